//! Persisted form of boards and games.
//!
//! A snapshot is the minimal state a store must keep to rebuild a game:
//! the placed pieces, the color to move, and the game status.

use crate::GameStatus;
use chess_core::{Color, PieceKind, Position};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a snapshot describes an impossible board.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("more than one piece placed on {0}")]
    DuplicatePosition(Position),

    #[error("{0} has more than one king")]
    TooManyKings(Color),
}

/// One placed piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceEntry {
    pub position: Position,
    pub kind: PieceKind,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub pieces: Vec<PieceEntry>,
    pub turn: Color,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: BoardSnapshot,
    pub status: GameStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Game};

    #[test]
    fn board_snapshot_is_sorted() {
        let snapshot = Board::initial().to_snapshot();
        assert_eq!(snapshot.pieces.len(), 32);
        assert_eq!(snapshot.pieces[0].position, Position::A1);
        assert_eq!(snapshot.pieces[31].position, Position::H8);
        assert!(snapshot
            .pieces
            .windows(2)
            .all(|w| w[0].position < w[1].position));
    }

    #[test]
    fn json_shape() {
        let board = Board::from_pieces(
            [(
                Position::E1,
                chess_core::Piece::new(PieceKind::King, Color::White),
            )],
            Color::Black,
        )
        .unwrap();
        let snapshot = GameSnapshot {
            board: board.to_snapshot(),
            status: GameStatus::KingDie,
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(
            json,
            r#"{"board":{"pieces":[{"position":"e1","kind":"KING","color":"WHITE"}],"turn":"BLACK"},"status":"KING_DIE"}"#
        );
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn game_round_trip_keeps_status() {
        let mut game = Game::new(Board::initial());
        game.start().unwrap();
        let restored = Game::from_snapshot(&game.to_snapshot()).unwrap();
        assert_eq!(restored, game);
    }

    #[test]
    fn invalid_json_position_is_rejected() {
        let json = r#"{"pieces":[{"position":"j9","kind":"PAWN","color":"WHITE"}],"turn":"WHITE"}"#;
        assert!(serde_json::from_str::<BoardSnapshot>(json).is_err());
    }
}
