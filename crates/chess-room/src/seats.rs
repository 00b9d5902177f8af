//! Player seats per room.
//!
//! The first player to join a room plays White, the second Black. There is
//! no process-wide table: whoever owns a [`Seats`] value owns the seating.

use crate::RoomError;
use chess_core::Color;
use std::collections::HashMap;

#[derive(Debug, Default, Clone)]
pub struct Seats {
    taken: HashMap<String, [bool; 2]>,
}

impl Seats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seats a new player in `room` and returns the color they play.
    pub fn enter(&mut self, room: &str) -> Result<Color, RoomError> {
        let seats = self.taken.entry(room.to_string()).or_default();
        let color = Color::ALL
            .into_iter()
            .find(|c| !seats[c.index()])
            .ok_or_else(|| RoomError::RoomFull(room.to_string()))?;
        seats[color.index()] = true;
        Ok(color)
    }

    /// Frees the seat of `color` in `room`.
    pub fn leave(&mut self, room: &str, color: Color) -> Result<(), RoomError> {
        let not_taken = || RoomError::SeatNotTaken {
            room: room.to_string(),
            color,
        };
        let seats = self.taken.get_mut(room).ok_or_else(not_taken)?;
        if !seats[color.index()] {
            return Err(not_taken());
        }
        seats[color.index()] = false;
        if seats.iter().all(|taken| !taken) {
            self.taken.remove(room);
        }
        Ok(())
    }

    /// Number of seated players in `room`.
    pub fn occupancy(&self, room: &str) -> usize {
        self.taken
            .get(room)
            .map_or(0, |seats| seats.iter().filter(|&&t| t).count())
    }

    pub fn is_seated(&self, room: &str, color: Color) -> bool {
        self.taken
            .get(room)
            .is_some_and(|seats| seats[color.index()])
    }

    /// The color facing `color` in `room`, if that seat is taken.
    pub fn opponent(&self, room: &str, color: Color) -> Option<Color> {
        let other = color.opposite();
        self.is_seated(room, other).then_some(other)
    }

    /// Drops every seat of `room`.
    pub fn clear(&mut self, room: &str) {
        self.taken.remove(room);
    }
}
