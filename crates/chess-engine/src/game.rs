//! Game lifecycle on top of a [`Board`].
//!
//! A [`Game`] gates every board operation on its [`GameStatus`]:
//! - `Ready` until [`Game::start`] is called
//! - `Playing` while moves are accepted
//! - `KingDie` once a king has been captured
//! - `End` after [`Game::end`], after which nothing changes

use crate::board::MoveError;
use crate::result::{EndResult, MoveResult, StartResult};
use crate::snapshot::{GameSnapshot, SnapshotError};
use crate::{Board, Score};
use chess_core::{Color, Position};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Lifecycle state of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    Ready,
    Playing,
    KingDie,
    End,
}

impl GameStatus {
    #[inline]
    pub const fn is_playing(self) -> bool {
        matches!(self, GameStatus::Playing)
    }

    /// Returns true once no more moves will be accepted.
    #[inline]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::KingDie | GameStatus::End)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameStatus::Ready => "READY",
            GameStatus::Playing => "PLAYING",
            GameStatus::KingDie => "KING_DIE",
            GameStatus::End => "END",
        };
        write!(f, "{}", name)
    }
}

/// Error type for game operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The operation needs a game in progress.
    #[error("game is not in progress (status: {0})")]
    NotInProgress(GameStatus),

    /// `start` was called on a game that already left `Ready`.
    #[error("game has already started (status: {0})")]
    AlreadyStarted(GameStatus),

    #[error(transparent)]
    Move(#[from] MoveError),
}

/// A board together with its lifecycle status.
///
/// A game owns its board exclusively. Operations take `&mut self`, so a
/// caller sharing a game between threads must hold a lock around each call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    status: GameStatus,
}

impl Default for Game {
    /// An unstarted game with an empty board; [`Game::start`] sets up the pieces.
    fn default() -> Self {
        Self::new(Board::empty())
    }
}

impl Game {
    /// Creates a game in `Ready` status.
    pub fn new(board: Board) -> Self {
        Game {
            board,
            status: GameStatus::Ready,
        }
    }

    /// Creates a game with an explicit status, e.g. one loaded from storage.
    pub fn with_status(board: Board, status: GameStatus) -> Self {
        Game { board, status }
    }

    pub fn from_snapshot(snapshot: &GameSnapshot) -> Result<Self, SnapshotError> {
        let board = Board::from_snapshot(&snapshot.board)?;
        Ok(Self::with_status(board, snapshot.status))
    }

    pub fn to_snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.to_snapshot(),
            status: self.status,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn current_turn(&self) -> Color {
        self.board.current_turn()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn is_playing(&self) -> bool {
        self.status.is_playing()
    }

    /// Starts the game.
    ///
    /// An empty board is replaced by the standard starting layout; a board
    /// that already holds pieces is played as is.
    pub fn start(&mut self) -> Result<StartResult, GameError> {
        if self.status != GameStatus::Ready {
            return Err(GameError::AlreadyStarted(self.status));
        }
        if self.board.is_empty() {
            self.board = Board::initial();
        }
        self.status = GameStatus::Playing;
        Ok(StartResult {
            pieces: self
                .board
                .pieces()
                .iter()
                .map(|(&position, &piece)| (position, piece))
                .collect(),
        })
    }

    /// Plays a move. Capturing a king moves the game to `KingDie`.
    pub fn move_piece(&mut self, from: Position, to: Position) -> Result<MoveResult, GameError> {
        self.ensure_playing()?;
        let captured = self.board.move_piece(from, to)?;
        if self.board.is_king_captured() {
            self.status = GameStatus::KingDie;
        }
        Ok(MoveResult {
            captured,
            status: self.status,
            turn: self.board.current_turn(),
        })
    }

    /// Returns the current material score.
    pub fn calculate_score(&self) -> Result<Score, GameError> {
        self.ensure_playing()?;
        Ok(Score::calculate(self.board.pieces()))
    }

    /// Ends the game and reports the final result.
    ///
    /// Allowed while playing or after a king was captured.
    pub fn end(&mut self) -> Result<EndResult, GameError> {
        if !matches!(self.status, GameStatus::Playing | GameStatus::KingDie) {
            return Err(GameError::NotInProgress(self.status));
        }
        self.status = GameStatus::End;
        Ok(EndResult::new(&self.board))
    }

    fn ensure_playing(&self) -> Result<(), GameError> {
        if self.status.is_playing() {
            Ok(())
        } else {
            Err(GameError::NotInProgress(self.status))
        }
    }
}
