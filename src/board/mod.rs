//! Board arena: cells, capture logs, geometry queries, and the move command
//!
//! The board owns all 64 cells by value in a flat row-major grid; figures
//! live inside their cells. A figure's back-link square is rewritten
//! together with the grid slot, so the grid stays the single source of
//! truth and the inverse lookup never drifts.
//!
//! # Query / command split
//!
//! Everything except [`Board::move_figure`] and the setup surface is a pure
//! query. The move command validates through [`crate::rules::can_move`]
//! first and only then mutates, which is what guarantees a rejected move
//! leaves the board untouched.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::captured::CapturedFigures;
use crate::error::{GameError, GameResult};
use crate::pieces::{Figure, PieceColor, PieceType};
use crate::rules;
use crate::types::Square;

mod cell;

pub use cell::{Cell, CellShade};

/// Files/ranks per side
pub const BOARD_SIZE: u8 = 8;

/// Standard back-rank layout, queen on the d-file, king on the e-file
const BACK_ROW: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// The full grid plus capture logs
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Vec<Cell>,
    captured: CapturedFigures,
}

impl Board {
    /// An empty board: 64 cells, no figures
    pub fn new() -> Self {
        let mut cells = Vec::with_capacity(64);
        for rank in 0..BOARD_SIZE {
            for file in 0..BOARD_SIZE {
                cells.push(Cell::new(Square::new(file, rank)));
            }
        }

        Board {
            cells,
            captured: CapturedFigures::default(),
        }
    }

    /// A board with the standard chess starting position
    ///
    /// Data-driven: the back row comes from a const array, pawns fill the
    /// second rank of each side.
    pub fn standard() -> Self {
        let mut board = Board::new();

        for (file, &piece_type) in BACK_ROW.iter().enumerate() {
            board.place_figure(Square::new(file as u8, 0), PieceColor::White, piece_type);
            board.place_figure(Square::new(file as u8, 7), PieceColor::Black, piece_type);
        }

        for file in 0..BOARD_SIZE {
            board.place_figure(Square::new(file, 1), PieceColor::White, PieceType::Pawn);
            board.place_figure(Square::new(file, 6), PieceColor::Black, PieceType::Pawn);
        }

        board
    }

    /// Put a new figure on `square`, replacing any occupant
    ///
    /// Setup surface for position construction; gameplay goes through
    /// [`Board::move_figure`].
    pub fn place_figure(&mut self, square: Square, color: PieceColor, piece_type: PieceType) {
        self.cell_mut(square)
            .set_figure(Figure::new(color, piece_type, square));
    }

    /// The unique cell at `square`
    pub fn cell(&self, square: Square) -> &Cell {
        &self.cells[square.grid_index()]
    }

    fn cell_mut(&mut self, square: Square) -> &mut Cell {
        &mut self.cells[square.grid_index()]
    }

    /// All 64 cells, rank by rank from White's side
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Capture logs for both sides
    pub fn captured(&self) -> &CapturedFigures {
        &self.captured
    }

    /// White figures Black has captured, in capture order
    pub fn lost_white_figures(&self) -> &[Figure] {
        self.captured.lost_white()
    }

    /// Black figures White has captured, in capture order
    pub fn lost_black_figures(&self) -> &[Figure] {
        self.captured.lost_black()
    }

    /// True iff `from` and `to` share a file and every cell strictly
    /// between them is empty
    ///
    /// A distance of zero passes trivially; alignment alone is not enough.
    pub fn is_empty_vertical(&self, from: Square, to: Square) -> bool {
        if from.file != to.file {
            return false;
        }

        let min = from.rank.index().min(to.rank.index());
        let max = from.rank.index().max(to.rank.index());
        ((min + 1)..max).all(|rank| self.cell(Square::new(from.file.index(), rank)).is_empty())
    }

    /// True iff `from` and `to` share a rank and every cell strictly
    /// between them is empty
    pub fn is_empty_horizontal(&self, from: Square, to: Square) -> bool {
        if from.rank != to.rank {
            return false;
        }

        let min = from.file.index().min(to.file.index());
        let max = from.file.index().max(to.file.index());
        ((min + 1)..max).all(|file| self.cell(Square::new(file, from.rank.index())).is_empty())
    }

    /// True iff `from` and `to` lie on a common diagonal and every cell
    /// strictly between them is empty
    pub fn is_empty_diagonal(&self, from: Square, to: Square) -> bool {
        let abs_x = (to.file.index() as i8 - from.file.index() as i8).abs();
        let abs_y = (to.rank.index() as i8 - from.rank.index() as i8).abs();

        if abs_x != abs_y {
            return false;
        }

        let dx: i8 = if from.file < to.file { 1 } else { -1 };
        let dy: i8 = if from.rank < to.rank { 1 } else { -1 };

        (1..abs_y).all(|step| {
            let file = (from.file.index() as i8 + dx * step) as u8;
            let rank = (from.rank.index() as i8 + dy * step) as u8;
            self.cell(Square::new(file, rank)).is_empty()
        })
    }

    /// Scan the whole board for an enemy of the figure on `origin` that
    /// threatens `target`
    ///
    /// King threat is re-derived geometrically (any enemy king within one
    /// square of `target`) and pawn threat from the two diagonal-forward
    /// capture squares; every other piece type answers through its own
    /// [`crate::rules::can_move`]. The king special case is what lets the
    /// king's movement rule call back into this scan without recursing.
    ///
    /// Returns on the first threat found. Vacuously false when `origin` is
    /// empty: with no figure there is no enemy side to scan for.
    pub fn is_over_attack(&self, origin: Square, target: Square) -> bool {
        let Some(mover) = self.cell(origin).figure() else {
            return false;
        };

        for cell in &self.cells {
            let Some(attacker) = cell.figure() else {
                continue;
            };
            if attacker.color == mover.color {
                continue;
            }

            let square = cell.square();
            let threatens = match attacker.piece_type {
                PieceType::King => {
                    let dx = (square.file.index() as i8 - target.file.index() as i8).abs();
                    let dy = (square.rank.index() as i8 - target.rank.index() as i8).abs();
                    dx <= 1 && dy <= 1
                }
                PieceType::Pawn => {
                    let direction = attacker.color.pawn_direction();
                    let dx = (target.file.index() as i8 - square.file.index() as i8).abs();
                    let dy = target.rank.index() as i8 - square.rank.index() as i8;
                    dx == 1 && dy == direction
                }
                _ => rules::can_move(self, square, target),
            };

            if threatens {
                return true;
            }
        }

        false
    }

    /// Square of `color`'s king, if one is on the board
    pub fn find_king(&self, color: PieceColor) -> Option<Square> {
        self.cells.iter().find_map(|cell| {
            cell.figure()
                .filter(|figure| figure.piece_type == PieceType::King && figure.color == color)
                .map(|_| cell.square())
        })
    }

    /// Whether `color`'s king currently stands on an attacked square
    pub fn is_in_check(&self, color: PieceColor) -> bool {
        match self.find_king(color) {
            Some(king) => self.is_over_attack(king, king),
            None => {
                warn!("[BOARD] no {:?} king on the board", color);
                false
            }
        }
    }

    /// Move the figure on `from` to `to`
    ///
    /// The sole externally-driven mutation. Legality is delegated to
    /// [`crate::rules::can_move`]; on rejection the board is left untouched
    /// and the error says why. On success the figure's post-move hook runs,
    /// any occupant of `to` is appended to the matching capture log, and
    /// the figure is relinked to `to`. Returns the captured figure, if any.
    pub fn move_figure(&mut self, from: Square, to: Square) -> GameResult<Option<Figure>> {
        if self.cell(from).is_empty() {
            return Err(GameError::PieceNotFound { square: from });
        }

        if !rules::can_move(self, from, to) {
            debug!("[BOARD] rejected {from} -> {to}");
            return Err(GameError::IllegalMove { from, to });
        }

        let Some(mut figure) = self.cell_mut(from).take_figure() else {
            return Err(GameError::PieceNotFound { square: from });
        };
        figure.mark_moved();

        let captured = self.cell_mut(to).take_figure();
        if let Some(lost) = captured {
            info!("[BOARD] {:?} {:?} captured on {to}", lost.color, lost.piece_type);
            self.captured.add_capture(lost);
        }

        self.cell_mut(to).set_figure(figure);
        info!("[BOARD] moved {:?} {from} -> {to}", figure.piece_type);

        Ok(captured)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

/// Renders the grid with FEN-style letters, rank 8 at the top, followed by
/// both capture logs
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +-----------------+")?;
        for rank in (0..BOARD_SIZE).rev() {
            write!(f, "{} | ", rank + 1)?;
            for file in 0..BOARD_SIZE {
                match self.cell(Square::new(file, rank)).figure() {
                    Some(figure) => write!(f, "{} ", figure.piece_type.symbol(figure.color))?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "  +-----------------+")?;
        writeln!(f, "    a b c d e f g h")?;

        write!(f, "Captured by White:")?;
        for figure in self.lost_black_figures() {
            write!(f, " {}", figure.piece_type.symbol(figure.color))?;
        }
        writeln!(f)?;

        write!(f, "Captured by Black:")?;
        for figure in self.lost_white_figures() {
            write!(f, " {}", figure.piece_type.symbol(figure.color))?;
        }
        writeln!(f)
    }
}
