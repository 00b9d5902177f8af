//! Board state and move legality.

use crate::movement::{self, Capture};
use crate::snapshot::{BoardSnapshot, PieceEntry, SnapshotError};
use chess_core::{Color, File, Piece, PieceKind, Position, Rank};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use thiserror::Error;

/// Reasons a move is rejected by the board.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("not your turn: {turn} to move, but {position} holds no {turn} piece")]
    NotYourTurn { position: Position, turn: Color },

    #[error("cannot capture own piece at {0}")]
    CannotCaptureOwnPiece(Position),

    #[error("{piece} cannot move from {from} to {to}")]
    IllegalMovementPattern {
        piece: Piece,
        from: Position,
        to: Position,
    },

    #[error("path is obstructed at {0}")]
    PathObstructed(Position),
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Pieces on the board plus the color to move.
///
/// Empty squares have no entry. The board is only changed through
/// [`Board::move_piece`], which validates the whole move before touching
/// anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pieces: HashMap<Position, Piece>,
    turn: Color,
}

impl Board {
    /// Creates a board with no pieces, White to move.
    pub fn empty() -> Self {
        Board {
            pieces: HashMap::new(),
            turn: Color::White,
        }
    }

    /// Creates the standard 32-piece starting layout, White to move.
    pub fn initial() -> Self {
        let mut pieces = HashMap::with_capacity(32);
        for color in Color::ALL {
            for (file, kind) in File::ALL.into_iter().zip(BACK_RANK) {
                pieces.insert(
                    Position::new(file, color.back_rank()),
                    Piece::new(kind, color),
                );
                pieces.insert(
                    Position::new(file, color.pawn_rank()),
                    Piece::new(PieceKind::Pawn, color),
                );
            }
        }
        Board {
            pieces,
            turn: Color::White,
        }
    }

    /// Creates a board from explicit placements.
    ///
    /// Fails if a position is listed twice or a color has more than one king.
    pub fn from_pieces<I>(placements: I, turn: Color) -> Result<Self, SnapshotError>
    where
        I: IntoIterator<Item = (Position, Piece)>,
    {
        let mut pieces = HashMap::new();
        let mut kings = [0u8; 2];
        for (position, piece) in placements {
            if pieces.insert(position, piece).is_some() {
                return Err(SnapshotError::DuplicatePosition(position));
            }
            if piece.is_king() {
                kings[piece.color.index()] += 1;
                if kings[piece.color.index()] > 1 {
                    return Err(SnapshotError::TooManyKings(piece.color));
                }
            }
        }
        Ok(Board { pieces, turn })
    }

    /// Reconstructs a board from persisted state.
    pub fn from_snapshot(snapshot: &BoardSnapshot) -> Result<Self, SnapshotError> {
        Self::from_pieces(
            snapshot
                .pieces
                .iter()
                .map(|e| (e.position, Piece::new(e.kind, e.color))),
            snapshot.turn,
        )
    }

    /// Captures the board as a list of placements in rank-major order.
    pub fn to_snapshot(&self) -> BoardSnapshot {
        let mut pieces: Vec<PieceEntry> = self
            .pieces
            .iter()
            .map(|(&position, piece)| PieceEntry {
                position,
                kind: piece.kind,
                color: piece.color,
            })
            .collect();
        pieces.sort_by_key(|e| e.position);
        BoardSnapshot {
            pieces,
            turn: self.turn,
        }
    }

    /// Returns the color whose turn it is.
    #[inline]
    pub fn current_turn(&self) -> Color {
        self.turn
    }

    /// Returns the piece at the given position, if any.
    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        self.pieces.get(&position).copied()
    }

    /// Returns every placed piece. Iteration order is unspecified.
    pub fn pieces(&self) -> &HashMap<Position, Piece> {
        &self.pieces
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Decides whether moving the piece on `from` to `to` is legal.
    ///
    /// Checks run in a fixed order and the first failure is reported: turn,
    /// own-piece capture, movement pattern, then obstruction.
    pub fn check_move(&self, from: Position, to: Position) -> Result<(), MoveError> {
        let piece = match self.piece_at(from) {
            Some(piece) if piece.color == self.turn => piece,
            _ => {
                return Err(MoveError::NotYourTurn {
                    position: from,
                    turn: self.turn,
                })
            }
        };

        let target = self.piece_at(to);
        if target.is_some_and(|t| t.color == piece.color) {
            return Err(MoveError::CannotCaptureOwnPiece(to));
        }

        let illegal = || MoveError::IllegalMovementPattern { piece, from, to };
        let stride = movement::find_stride(piece, from, to).ok_or_else(illegal)?;
        let capture_fits = match stride.pattern.capture {
            Capture::Allowed => true,
            Capture::Forbidden => target.is_none(),
            Capture::Required => target.is_some(),
        };
        if !capture_fits {
            return Err(illegal());
        }

        if let Some(blocked) = stride
            .between(from)
            .find(|&p| self.pieces.contains_key(&p))
        {
            return Err(MoveError::PathObstructed(blocked));
        }

        Ok(())
    }

    /// Validates and plays a move, then passes the turn.
    ///
    /// Returns the captured piece, if any. On error the board is unchanged.
    pub fn move_piece(&mut self, from: Position, to: Position) -> Result<Option<Piece>, MoveError> {
        self.check_move(from, to)?;
        let Some(piece) = self.pieces.remove(&from) else {
            unreachable!("check_move guarantees a piece on {from}");
        };
        let captured = self.pieces.insert(to, piece);
        self.turn = self.turn.opposite();
        Ok(captured)
    }

    /// Returns every position the piece on `from` may legally move to.
    ///
    /// Empty when `from` holds no piece of the side to move.
    pub fn movable_positions(&self, from: Position) -> BTreeSet<Position> {
        Position::all()
            .filter(|&to| self.check_move(from, to).is_ok())
            .collect()
    }

    /// Returns true if the given color still has its king.
    pub fn has_king(&self, color: Color) -> bool {
        self.pieces
            .values()
            .any(|p| p.is_king() && p.color == color)
    }

    /// Returns true if at least one color has lost its king.
    pub fn is_king_captured(&self) -> bool {
        Color::ALL.iter().any(|&color| !self.has_king(color))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::ALL.iter().rev() {
            write!(f, "{}", rank)?;
            for file in File::ALL {
                let c = self
                    .piece_at(Position::new(file, *rank))
                    .map_or('.', Piece::to_char);
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, " ")?;
        for file in File::ALL {
            write!(f, " {}", file)?;
        }
        Ok(())
    }
}
