//! Material scoring.

use chess_core::{Color, Piece, PieceKind, Position};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Value of a pawn that shares its file with another pawn of its color.
const STACKED_PAWN_VALUE: f64 = 0.5;

/// Returns the material value of a piece kind.
pub const fn piece_value(kind: PieceKind) -> f64 {
    match kind {
        PieceKind::Pawn => 1.0,
        PieceKind::Knight => 3.0,
        PieceKind::Bishop => 3.0,
        PieceKind::Rook => 5.0,
        PieceKind::Queen => 9.0,
        PieceKind::King => 0.0,
    }
}

/// Material totals of both colors at one point in a game.
///
/// Scores never pick a winner: equal totals are simply equal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub white: f64,
    pub black: f64,
}

impl Score {
    /// Scores a set of placed pieces.
    ///
    /// Pawns are grouped by file explicitly, so the result does not depend
    /// on the iteration order of `pieces`.
    pub fn calculate(pieces: &HashMap<Position, Piece>) -> Self {
        let mut totals = [0.0f64; 2];
        let mut pawns_per_file = [[0u8; 8]; 2];

        for (position, piece) in pieces {
            match piece.kind {
                PieceKind::Pawn => {
                    pawns_per_file[piece.color.index()][position.file().index() as usize] += 1;
                }
                kind => totals[piece.color.index()] += piece_value(kind),
            }
        }

        for color in Color::ALL {
            for &count in &pawns_per_file[color.index()] {
                let each = if count > 1 {
                    STACKED_PAWN_VALUE
                } else {
                    piece_value(PieceKind::Pawn)
                };
                totals[color.index()] += each * f64::from(count);
            }
        }

        Score {
            white: totals[Color::White.index()],
            black: totals[Color::Black.index()],
        }
    }

    /// Returns the total of one color.
    pub fn get(&self, color: Color) -> f64 {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    /// Returns the color with the strictly higher total.
    pub fn leader(&self) -> Option<Color> {
        if self.white > self.black {
            Some(Color::White)
        } else if self.black > self.white {
            Some(Color::Black)
        } else {
            None
        }
    }
}
