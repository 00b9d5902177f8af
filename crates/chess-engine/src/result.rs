//! Outcomes reported by [`Game`](crate::Game) operations.

use crate::{Board, GameStatus, Score};
use chess_core::{Color, Piece, Position};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The layout a game starts from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartResult {
    pub pieces: BTreeMap<Position, Piece>,
}

/// What a played move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    pub captured: Option<Piece>,
    pub status: GameStatus,
    /// Color to move next.
    pub turn: Color,
}

/// Final summary of an ended game.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EndResult {
    pub score: Score,
    winner: Option<Color>,
}

impl EndResult {
    pub(crate) fn new(board: &Board) -> Self {
        let score = Score::calculate(board.pieces());
        let survivors: Vec<Color> = Color::ALL
            .into_iter()
            .filter(|&c| board.has_king(c))
            .collect();
        let winner = match survivors.as_slice() {
            [only] => Some(*only),
            _ => score.leader(),
        };
        EndResult { score, winner }
    }

    /// The winning color, or `None` for a draw.
    ///
    /// A side whose king was captured loses outright. Otherwise the higher
    /// material score wins.
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }
}
