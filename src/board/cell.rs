//! A single board square: occupancy and local queries

use serde::{Deserialize, Serialize};

use crate::pieces::Figure;
use crate::types::Square;

/// Tile shade in the checkerboard pattern, cosmetic only
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellShade {
    Light,
    Dark,
}

/// One square of the 8x8 grid
///
/// Identity is the (file, rank) pair, fixed for the cell's lifetime; only
/// the occupant changes. `available` is a highlight flag owned by the
/// presentation layer - engine code never writes it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    square: Square,
    shade: CellShade,
    figure: Option<Figure>,
    pub available: bool,
    id: u8,
}

impl Cell {
    pub(crate) fn new(square: Square) -> Self {
        // Standard checkerboard parity: a1 dark, h1 light.
        let shade = if (square.file.index() + square.rank.index() + 1) % 2 == 0 {
            CellShade::Light
        } else {
            CellShade::Dark
        };

        Cell {
            square,
            shade,
            figure: None,
            available: false,
            id: square.grid_index() as u8,
        }
    }

    pub fn square(&self) -> Square {
        self.square
    }

    pub fn shade(&self) -> CellShade {
        self.shade
    }

    /// Stable identifier, derived from the coordinates
    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn figure(&self) -> Option<&Figure> {
        self.figure.as_ref()
    }

    /// True iff no figure occupies this cell
    pub fn is_empty(&self) -> bool {
        self.figure.is_none()
    }

    /// True iff both cells are occupied and the occupants' colors differ
    ///
    /// Empty cells are never enemies: an unoccupied `self` or `target`
    /// yields `false` rather than an error.
    pub fn is_enemy(&self, target: &Cell) -> bool {
        match (&self.figure, &target.figure) {
            (Some(mine), Some(theirs)) => mine.color != theirs.color,
            _ => false,
        }
    }

    /// Low-level link operation: writes the occupant and its back-link
    /// square together, so the bidirectional invariant can never be observed
    /// broken. Legality has already been decided by the caller.
    pub(crate) fn set_figure(&mut self, mut figure: Figure) {
        figure.cell = self.square;
        self.figure = Some(figure);
    }

    pub(crate) fn take_figure(&mut self) -> Option<Figure> {
        self.figure.take()
    }
}
