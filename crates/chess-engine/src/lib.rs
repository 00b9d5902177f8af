//! Chess rules engine.
//!
//! This crate provides:
//! - [`Board`] - Sparse piece placement plus the color to move, with move validation
//! - [`movement`] - The per-piece movement pattern table
//! - [`Game`] - Lifecycle state machine (`Ready` -> `Playing` -> `KingDie` / `End`)
//! - [`Score`] - Material scoring with a stacked-pawn penalty
//! - Snapshots for persisting and restoring games
//!
//! A game ends when a king is captured, not on checkmate: there is no check
//! detection, castling, en passant, or promotion.
//!
//! # Example
//!
//! ```
//! use chess_core::Position;
//! use chess_engine::{Board, Game, GameStatus};
//!
//! let mut game = Game::new(Board::initial());
//! game.start().unwrap();
//!
//! let e2 = Position::parse("e2").unwrap();
//! let e4 = Position::parse("e4").unwrap();
//! game.move_piece(e2, e4).unwrap();
//!
//! assert_eq!(game.status(), GameStatus::Playing);
//! println!("{}", game.board());
//! ```

mod board;
mod game;
pub mod movement;
mod result;
mod score;
mod snapshot;

pub use board::{Board, MoveError};
pub use game::{Game, GameError, GameStatus};
pub use result::{EndResult, MoveResult, StartResult};
pub use score::{piece_value, Score};
pub use snapshot::{BoardSnapshot, GameSnapshot, PieceEntry, SnapshotError};
