//! Core types for chess.
//!
//! This crate provides the fundamental value types used by the rules engine
//! and the room service:
//! - [`Piece`], [`PieceKind`] and [`Color`] for piece representation
//! - [`Position`], [`File`], and [`Rank`] for board coordinates
//! - [`Move`] for a from/to pair in text notation

mod color;
mod mov;
mod piece;
mod position;

pub use color::Color;
pub use mov::Move;
pub use piece::{Piece, PieceKind};
pub use position::{File, Position, PositionError, Rank};
