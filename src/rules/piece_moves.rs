//! Movement rules for each piece type
//!
//! Pure functions with no side effects - easy to test. The board supplies
//! the clearance and attack queries; this module supplies the per-piece
//! geometry and the baseline every piece shares.

use crate::board::Board;
use crate::pieces::{PieceColor, PieceType};
use crate::types::Square;

/// Check whether the figure on `from` may move to `to`
///
/// Baseline for every piece type: a move to the current square or onto a
/// same-color figure is illegal; an empty `from` is never legal. The
/// per-type geometry then decides.
pub fn can_move(board: &Board, from: Square, to: Square) -> bool {
    let Some(figure) = board.cell(from).figure() else {
        return false;
    };

    if from == to {
        return false;
    }

    if let Some(occupant) = board.cell(to).figure() {
        if occupant.color == figure.color {
            return false;
        }
    }

    match figure.piece_type {
        PieceType::Pawn => is_valid_pawn_move(board, figure.color, from, to),
        PieceType::Knight => is_valid_knight_move(from, to),
        PieceType::Bishop => board.is_empty_diagonal(from, to),
        PieceType::Rook => is_valid_rook_move(board, from, to),
        PieceType::Queen => is_valid_queen_move(board, from, to),
        PieceType::King => is_valid_king_move(board, from, to),
    }
}

/// All legal destinations for the figure on `from`
pub fn possible_moves(board: &Board, from: Square) -> Vec<Square> {
    let mut moves = Vec::new();

    for rank in 0..8 {
        for file in 0..8 {
            let to = Square::new(file, rank);
            if can_move(board, from, to) {
                moves.push(to);
            }
        }
    }

    moves
}

/// Signed (file, rank) offsets from `from` to `to`
fn deltas(from: Square, to: Square) -> (i8, i8) {
    (
        to.file.index() as i8 - from.file.index() as i8,
        to.rank.index() as i8 - from.rank.index() as i8,
    )
}

fn is_valid_pawn_move(board: &Board, color: PieceColor, from: Square, to: Square) -> bool {
    let direction = color.pawn_direction();
    let (dx, dy) = deltas(from, to);

    // Single step forward into an empty cell.
    if dx == 0 && dy == direction {
        return board.cell(to).is_empty();
    }

    // Diagonal step forward, capture only.
    if dx.abs() == 1 && dy == direction {
        return board.cell(from).is_enemy(board.cell(to));
    }

    false
}

fn is_valid_knight_move(from: Square, to: Square) -> bool {
    let (dx, dy) = deltas(from, to);
    (dx.abs() == 2 && dy.abs() == 1) || (dx.abs() == 1 && dy.abs() == 2)
}

fn is_valid_rook_move(board: &Board, from: Square, to: Square) -> bool {
    board.is_empty_vertical(from, to) || board.is_empty_horizontal(from, to)
}

/// Queen moves like rook or bishop
fn is_valid_queen_move(board: &Board, from: Square, to: Square) -> bool {
    is_valid_rook_move(board, from, to) || board.is_empty_diagonal(from, to)
}

fn is_valid_king_move(board: &Board, from: Square, to: Square) -> bool {
    let (dx, dy) = deltas(from, to);

    if dx.abs() > 1 || dy.abs() > 1 {
        return false;
    }

    // The scan runs on the current board, with the king still on `from`: an
    // attacker whose line passes through `from` toward `to` is not seen.
    !board.is_over_attack(from, to)
}
