//! Move representation.

use crate::{Position, PositionError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A request to move whatever stands on `from` to `to`.
///
/// A move carries no legality on its own; the board decides whether it can
/// be played.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    #[inline]
    pub const fn new(from: Position, to: Position) -> Self {
        Move { from, to }
    }

    /// Returns the compact notation for this move (e.g. "e2e4").
    pub fn to_text(self) -> String {
        format!("{}{}", self.from, self.to)
    }

    /// Parses a move from compact notation ("e2e4") or from two positions
    /// separated by whitespace or a dash ("e2 e4", "e2-e4").
    pub fn parse(s: &str) -> Result<Self, PositionError> {
        let invalid = || PositionError::InvalidFormat(s.to_string());
        let parts: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == '-')
            .filter(|p| !p.is_empty())
            .collect();
        match parts.as_slice() {
            [from, to] => Ok(Move::new(Position::parse(from)?, Position::parse(to)?)),
            [both] if both.is_ascii() && both.len() == 4 => Ok(Move::new(
                Position::parse(&both[0..2])?,
                Position::parse(&both[2..4])?,
            )),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_text())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}
