//! Move-legality and board-state core for a two-player chess game
//!
//! The crate is the rule-enforcement engine behind a chess UI: an 8x8 board
//! of cells, piece placement, per-piece movement legality, and check
//! detection via attack scanning. Rendering, input, and networking live in
//! whatever drives the engine; this library only answers "may this move
//! happen?" and applies it when it may.
//!
//! # Module Organization
//!
//! - `board` - the [`Board`] arena: cells, capture logs, geometry queries,
//!   and the move command
//! - `rules` - pure legality functions dispatching over [`PieceType`]
//! - `pieces` - piece identity and per-figure state
//! - `captured` - capture logs and material balance
//! - `types` - coordinate newtypes and algebraic notation
//! - `error` - the move command's error taxonomy
//!
//! # Architecture
//!
//! **Single source of truth**: the board owns every cell and, through the
//! cells, every figure. Figures carry a back-link square that is rewritten
//! together with the grid slot, never independently.
//!
//! **Queries are pure, mutation is one door**: everything except
//! [`Board::move_figure`] (and the setup surface) is read-only. A rejected
//! move returns an error and changes nothing.
//!
//! # Example
//!
//! ```
//! use chess_logic_core::{Board, Square};
//!
//! let mut board = Board::standard();
//! let from = Square::from_algebraic("e2").unwrap();
//! let to = Square::from_algebraic("e3").unwrap();
//!
//! assert!(chess_logic_core::can_move(&board, from, to));
//! board.move_figure(from, to).unwrap();
//! assert!(board.cell(from).is_empty());
//! ```

pub mod board;
pub mod captured;
pub mod error;
pub mod pieces;
pub mod rules;
pub mod types;

pub use board::{Board, Cell, CellShade, BOARD_SIZE};
pub use captured::CapturedFigures;
pub use error::{GameError, GameResult};
pub use pieces::{Figure, PieceColor, PieceType};
pub use rules::{can_move, possible_moves};
pub use types::{Centipawns, File, Rank, Square};
