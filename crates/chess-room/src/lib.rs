//! Room service for hosting chess games.
//!
//! This crate sits between a transport (here, a console) and the rules
//! engine. It names games by room, persists them as snapshots through a
//! [`GameStore`], seats players, and logs what happens with `tracing`.
//!
//! # Overview
//!
//! - [`RoomService`] - Create rooms, start, move, score, and end games
//! - [`GameStore`] / [`MemoryStore`] - Snapshot persistence
//! - [`Seats`] - White/Black seat assignment per room
//! - [`RoomConfig`] - TOML configuration
//! - [`console`] - Command parsing and execution for the `chess-room` binary
//!
//! # Example
//!
//! ```
//! use chess_core::Position;
//! use chess_room::{MemoryStore, RoomConfig, RoomService};
//!
//! let mut service = RoomService::new(MemoryStore::new(), RoomConfig::default());
//! service.create_room("lobby").unwrap();
//! service.start("lobby").unwrap();
//!
//! let e2 = Position::parse("e2").unwrap();
//! let e4 = Position::parse("e4").unwrap();
//! service.move_piece("lobby", e2, e4).unwrap();
//! ```

pub mod config;
pub mod console;
mod error;
mod room;
mod seats;
mod service;
mod store;

pub use config::{ConfigError, RoomConfig};
pub use error::RoomError;
pub use room::RoomName;
pub use seats::Seats;
pub use service::RoomService;
pub use store::{GameStore, MemoryStore};
