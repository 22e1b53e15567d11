//! Piece identity and per-figure state
//!
//! `PieceColor` and `PieceType` are closed enums; everything that varies by
//! piece type dispatches over them in [`crate::rules`]. A [`Figure`] is a
//! plain value owned by the cell holding it.

use serde::{Deserialize, Serialize};

use crate::types::Square;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    /// The opposing side
    pub fn opposite(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// Rank direction this side's pawns advance in
    pub(crate) fn pawn_direction(self) -> i8 {
        match self {
            PieceColor::White => 1,
            PieceColor::Black => -1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceType {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

impl PieceType {
    /// FEN-style letter for this piece, uppercase for White
    pub fn symbol(self, color: PieceColor) -> char {
        let letter = match self {
            PieceType::King => 'k',
            PieceType::Queen => 'q',
            PieceType::Bishop => 'b',
            PieceType::Knight => 'n',
            PieceType::Rook => 'r',
            PieceType::Pawn => 'p',
        };
        match color {
            PieceColor::White => letter.to_ascii_uppercase(),
            PieceColor::Black => letter,
        }
    }
}

/// A piece on the board: color, type, and the square currently holding it
///
/// The `cell` back-link mirrors the grid slot and is rewritten by the cell's
/// link operation whenever the figure is placed, so the grid remains the
/// single source of truth. `has_moved`/`move_count` are maintained by the
/// post-move hook; movement rules that depend on piece history (pawn
/// double-step, castling) would key off this state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Figure {
    pub color: PieceColor,
    pub piece_type: PieceType,
    /// Square currently holding this figure; for a captured figure, the
    /// square it was taken from.
    pub cell: Square,
    pub has_moved: bool,
    pub move_count: u32,
}

impl Figure {
    pub fn new(color: PieceColor, piece_type: PieceType, cell: Square) -> Self {
        Figure {
            color,
            piece_type,
            cell,
            has_moved: false,
            move_count: 0,
        }
    }

    /// Post-move hook, run once per successful move
    pub(crate) fn mark_moved(&mut self) {
        self.has_moved = true;
        self.move_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_color() {
        assert_eq!(PieceColor::White.opposite(), PieceColor::Black);
        assert_eq!(PieceColor::Black.opposite(), PieceColor::White);
    }

    #[test]
    fn test_pawn_directions() {
        assert_eq!(PieceColor::White.pawn_direction(), 1);
        assert_eq!(PieceColor::Black.pawn_direction(), -1);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(PieceType::King.symbol(PieceColor::White), 'K');
        assert_eq!(PieceType::Knight.symbol(PieceColor::White), 'N');
        assert_eq!(PieceType::Pawn.symbol(PieceColor::Black), 'p');
        assert_eq!(PieceType::Queen.symbol(PieceColor::Black), 'q');
    }

    #[test]
    fn test_mark_moved() {
        let mut figure = Figure::new(PieceColor::White, PieceType::Pawn, Square::new(4, 1));
        assert!(!figure.has_moved);
        assert_eq!(figure.move_count, 0);

        figure.mark_moved();
        figure.mark_moved();
        assert!(figure.has_moved);
        assert_eq!(figure.move_count, 2);
    }
}
