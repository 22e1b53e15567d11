//! Capture log bookkeeping
//!
//! Tracks captured figures for both sides in capture order and scores the
//! material balance. Used by display layers and potentially for
//! resignation/draw offer logic.
//!
//! # Material Advantage
//!
//! Positive advantage means White is ahead, negative means Black is ahead.
//! Example: if White captured a rook and a pawn (5 + 1) and Black captured a
//! knight (3), White's advantage is +3 pawns.

use serde::{Deserialize, Serialize};

use crate::pieces::{Figure, PieceColor};
use crate::types::Centipawns;

/// Append-only capture logs, one per side
///
/// `lost_white` holds White figures Black has taken, `lost_black` the Black
/// figures White has taken. Order is capture order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CapturedFigures {
    lost_white: Vec<Figure>,
    lost_black: Vec<Figure>,
}

impl CapturedFigures {
    /// Append a captured figure to the log matching its color
    pub(crate) fn add_capture(&mut self, figure: Figure) {
        match figure.color {
            PieceColor::White => self.lost_white.push(figure),
            PieceColor::Black => self.lost_black.push(figure),
        }
    }

    /// White figures captured by Black, in capture order
    pub fn lost_white(&self) -> &[Figure] {
        &self.lost_white
    }

    /// Black figures captured by White, in capture order
    pub fn lost_black(&self) -> &[Figure] {
        &self.lost_black
    }

    /// Material balance from captures: positive if White is ahead
    pub fn material_advantage(&self) -> Centipawns {
        let score = |log: &[Figure]| {
            log.iter().fold(Centipawns(0), |total, figure| {
                total + Centipawns::for_piece(figure.piece_type)
            })
        };
        score(&self.lost_black) - score(&self.lost_white)
    }

    /// Clear both logs (for a new game)
    pub fn clear(&mut self) {
        self.lost_white.clear();
        self.lost_black.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::PieceType;
    use crate::types::Square;

    fn figure(color: PieceColor, piece_type: PieceType) -> Figure {
        Figure::new(color, piece_type, Square::new(0, 0))
    }

    #[test]
    fn test_captured_figures_default() {
        //! Verifies that the capture logs start empty
        let captured = CapturedFigures::default();
        assert!(captured.lost_white().is_empty());
        assert!(captured.lost_black().is_empty());
        assert_eq!(captured.material_advantage().value(), 0);
    }

    #[test]
    fn test_add_capture_routes_by_color() {
        //! A captured figure lands in the log matching its own color
        let mut captured = CapturedFigures::default();
        captured.add_capture(figure(PieceColor::Black, PieceType::Queen));

        assert_eq!(captured.lost_black().len(), 1);
        assert_eq!(captured.lost_black()[0].piece_type, PieceType::Queen);
        assert!(captured.lost_white().is_empty());

        captured.add_capture(figure(PieceColor::White, PieceType::Rook));
        assert_eq!(captured.lost_white().len(), 1);
        assert_eq!(captured.lost_white()[0].piece_type, PieceType::Rook);
    }

    #[test]
    fn test_capture_order_is_preserved() {
        //! Logs are append-only: later captures follow earlier ones
        let mut captured = CapturedFigures::default();
        captured.add_capture(figure(PieceColor::Black, PieceType::Pawn));
        captured.add_capture(figure(PieceColor::Black, PieceType::Knight));
        captured.add_capture(figure(PieceColor::Black, PieceType::Queen));

        let kinds: Vec<PieceType> = captured
            .lost_black()
            .iter()
            .map(|figure| figure.piece_type)
            .collect();
        assert_eq!(
            kinds,
            vec![PieceType::Pawn, PieceType::Knight, PieceType::Queen],
            "capture log must keep capture order"
        );
    }

    #[test]
    fn test_material_advantage_white_ahead() {
        //! Tests material calculation when White is ahead
        let mut captured = CapturedFigures::default();
        captured.add_capture(figure(PieceColor::Black, PieceType::Queen)); // White takes queen (9)
        captured.add_capture(figure(PieceColor::White, PieceType::Pawn)); // Black takes pawn (1)

        assert_eq!(
            captured.material_advantage().value(),
            8,
            "White should be +8 (9-1)"
        );
    }

    #[test]
    fn test_material_advantage_black_ahead() {
        //! Tests material calculation when Black is ahead
        let mut captured = CapturedFigures::default();
        captured.add_capture(figure(PieceColor::White, PieceType::Rook)); // Black takes rook (5)
        captured.add_capture(figure(PieceColor::Black, PieceType::Bishop)); // White takes bishop (3)

        assert_eq!(
            captured.material_advantage().value(),
            -2,
            "Black should be +2 (3-5 = -2)"
        );
    }

    #[test]
    fn test_material_advantage_equal() {
        //! An equal exchange nets out to zero
        let mut captured = CapturedFigures::default();
        captured.add_capture(figure(PieceColor::Black, PieceType::Knight));
        captured.add_capture(figure(PieceColor::White, PieceType::Bishop));

        assert_eq!(captured.material_advantage().value(), 0);
    }

    #[test]
    fn test_clear() {
        //! Clearing resets both logs for a new game
        let mut captured = CapturedFigures::default();
        captured.add_capture(figure(PieceColor::Black, PieceType::Queen));
        captured.add_capture(figure(PieceColor::White, PieceType::Rook));

        captured.clear();

        assert!(captured.lost_white().is_empty());
        assert!(captured.lost_black().is_empty());
        assert_eq!(captured.material_advantage().value(), 0);
    }
}
