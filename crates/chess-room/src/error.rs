//! Error type for room operations.

use chess_core::Color;
use chess_engine::{GameError, SnapshotError};
use thiserror::Error;

/// Errors returned by [`RoomService`](crate::RoomService).
///
/// Game and board failures are passed through unchanged so callers can map
/// each kind to their own response.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoomError {
    #[error("room not found: {0}")]
    RoomNotFound(String),

    #[error("room already exists: {0}")]
    RoomAlreadyExists(String),

    #[error("invalid room name '{name}': {reason}")]
    InvalidRoomName { name: String, reason: String },

    #[error("room is full: {0}")]
    RoomFull(String),

    #[error("{color} seat in room {room} is not taken")]
    SeatNotTaken { room: String, color: Color },

    #[error("room {0} has a game in progress")]
    GameInProgress(String),

    #[error("room limit of {0} reached")]
    TooManyRooms(usize),

    #[error(transparent)]
    Game(#[from] GameError),

    #[error("stored game is corrupt: {0}")]
    Snapshot(#[from] SnapshotError),
}
