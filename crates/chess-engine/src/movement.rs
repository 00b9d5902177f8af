//! Per-piece movement patterns.
//!
//! Every piece kind maps to a fixed table of [`Pattern`]s. A pattern names a
//! direction, how far the piece may travel along it, and whether the move
//! must, may, or must not capture. The board combines a matched pattern with
//! occupancy to decide legality; nothing here looks at the board.

use chess_core::{Color, Piece, PieceKind, Position};

/// A unit step on the board, in files and ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub file: i8,
    pub rank: i8,
}

impl Direction {
    pub const fn new(file: i8, rank: i8) -> Self {
        Direction { file, rank }
    }

    /// Number of whole steps along this direction that cover the given
    /// displacement, if any.
    fn steps_to(self, file_delta: i8, rank_delta: i8) -> Option<u8> {
        let steps = if self.file != 0 {
            file_delta / self.file
        } else {
            rank_delta / self.rank
        };
        if steps <= 0 || self.file * steps != file_delta || self.rank * steps != rank_delta {
            return None;
        }
        Some(steps as u8)
    }
}

/// How far a piece may travel along a pattern's direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reach {
    /// Exactly one step (king, knight, pawn capture).
    One,
    /// Any number of steps, through empty squares only.
    Unlimited,
    /// One step, or two from the pawn's starting rank.
    PawnAdvance,
}

/// What a pattern requires of the destination square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    /// Empty or opposing piece.
    Allowed,
    /// Must be empty.
    Forbidden,
    /// Must hold an opposing piece.
    Required,
}

/// One movement rule of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub direction: Direction,
    pub reach: Reach,
    pub capture: Capture,
}

impl Pattern {
    const fn new(file: i8, rank: i8, reach: Reach, capture: Capture) -> Self {
        Pattern {
            direction: Direction::new(file, rank),
            reach,
            capture,
        }
    }

    const fn slide(file: i8, rank: i8) -> Self {
        Self::new(file, rank, Reach::Unlimited, Capture::Allowed)
    }

    const fn step(file: i8, rank: i8) -> Self {
        Self::new(file, rank, Reach::One, Capture::Allowed)
    }

    fn max_steps(self, piece: Piece, from: Position) -> u8 {
        match self.reach {
            Reach::One => 1,
            Reach::Unlimited => 7,
            Reach::PawnAdvance if from.rank() == piece.color.pawn_rank() => 2,
            Reach::PawnAdvance => 1,
        }
    }
}

const ROOK: [Pattern; 4] = [
    Pattern::slide(1, 0),
    Pattern::slide(-1, 0),
    Pattern::slide(0, 1),
    Pattern::slide(0, -1),
];

const BISHOP: [Pattern; 4] = [
    Pattern::slide(1, 1),
    Pattern::slide(1, -1),
    Pattern::slide(-1, 1),
    Pattern::slide(-1, -1),
];

const QUEEN: [Pattern; 8] = [
    Pattern::slide(1, 0),
    Pattern::slide(-1, 0),
    Pattern::slide(0, 1),
    Pattern::slide(0, -1),
    Pattern::slide(1, 1),
    Pattern::slide(1, -1),
    Pattern::slide(-1, 1),
    Pattern::slide(-1, -1),
];

const KING: [Pattern; 8] = [
    Pattern::step(1, 0),
    Pattern::step(-1, 0),
    Pattern::step(0, 1),
    Pattern::step(0, -1),
    Pattern::step(1, 1),
    Pattern::step(1, -1),
    Pattern::step(-1, 1),
    Pattern::step(-1, -1),
];

const KNIGHT: [Pattern; 8] = [
    Pattern::step(-2, -1),
    Pattern::step(-2, 1),
    Pattern::step(-1, -2),
    Pattern::step(-1, 2),
    Pattern::step(1, -2),
    Pattern::step(1, 2),
    Pattern::step(2, -1),
    Pattern::step(2, 1),
];

const WHITE_PAWN: [Pattern; 3] = [
    Pattern::new(0, 1, Reach::PawnAdvance, Capture::Forbidden),
    Pattern::new(-1, 1, Reach::One, Capture::Required),
    Pattern::new(1, 1, Reach::One, Capture::Required),
];

const BLACK_PAWN: [Pattern; 3] = [
    Pattern::new(0, -1, Reach::PawnAdvance, Capture::Forbidden),
    Pattern::new(-1, -1, Reach::One, Capture::Required),
    Pattern::new(1, -1, Reach::One, Capture::Required),
];

/// Returns the movement table of a piece.
pub fn patterns(piece: Piece) -> &'static [Pattern] {
    match (piece.kind, piece.color) {
        (PieceKind::Pawn, Color::White) => &WHITE_PAWN,
        (PieceKind::Pawn, Color::Black) => &BLACK_PAWN,
        (PieceKind::Knight, _) => &KNIGHT,
        (PieceKind::Bishop, _) => &BISHOP,
        (PieceKind::Rook, _) => &ROOK,
        (PieceKind::Queen, _) => &QUEEN,
        (PieceKind::King, _) => &KING,
    }
}

/// Returns the directions a piece may move along.
pub fn candidate_directions(piece: Piece) -> impl Iterator<Item = Direction> {
    patterns(piece).iter().map(|p| p.direction)
}

/// Returns true if the piece may travel any distance along its directions.
#[inline]
pub fn is_sliding(piece: Piece) -> bool {
    piece.kind.is_slider()
}

/// A displacement matched against one of a piece's patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stride {
    pub pattern: Pattern,
    pub steps: u8,
}

impl Stride {
    /// Positions strictly between `from` and the destination.
    pub fn between(self, from: Position) -> impl Iterator<Item = Position> {
        let Direction { file, rank } = self.pattern.direction;
        (1..self.steps as i8).filter_map(move |n| from.offset(file * n, rank * n))
    }
}

/// Matches the displacement `from -> to` against the piece's patterns.
///
/// Only geometry is considered here: occupancy of the destination and of the
/// squares in between is left to the caller.
pub fn find_stride(piece: Piece, from: Position, to: Position) -> Option<Stride> {
    let file_delta = to.file().index() as i8 - from.file().index() as i8;
    let rank_delta = to.rank().index() as i8 - from.rank().index() as i8;
    patterns(piece).iter().find_map(|&pattern| {
        let steps = pattern.direction.steps_to(file_delta, rank_delta)?;
        (steps <= pattern.max_steps(piece, from)).then_some(Stride { pattern, steps })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(s: &str) -> Position {
        Position::parse(s).unwrap()
    }

    fn piece(kind: PieceKind, color: Color) -> Piece {
        Piece::new(kind, color)
    }

    #[test]
    fn steps_to_requires_exact_multiple() {
        let up_right = Direction::new(1, 1);
        assert_eq!(up_right.steps_to(3, 3), Some(3));
        assert_eq!(up_right.steps_to(3, 2), None);
        assert_eq!(up_right.steps_to(-2, -2), None);
        assert_eq!(Direction::new(0, 1).steps_to(0, 0), None);
        assert_eq!(Direction::new(2, 1).steps_to(4, 2), Some(2));
    }

    #[test]
    fn rook_slides_orthogonally() {
        let rook = piece(PieceKind::Rook, Color::White);
        let stride = find_stride(rook, pos("a1"), pos("a8")).unwrap();
        assert_eq!(stride.steps, 7);
        assert!(find_stride(rook, pos("a1"), pos("b2")).is_none());
    }

    #[test]
    fn bishop_slides_diagonally() {
        let bishop = piece(PieceKind::Bishop, Color::Black);
        assert!(find_stride(bishop, pos("c1"), pos("h6")).is_some());
        assert!(find_stride(bishop, pos("c1"), pos("c2")).is_none());
    }

    #[test]
    fn knight_jumps_once() {
        let knight = piece(PieceKind::Knight, Color::White);
        assert!(find_stride(knight, pos("g1"), pos("f3")).is_some());
        assert!(find_stride(knight, pos("g1"), pos("e2")).is_some());
        // Two jumps in the same direction are not a knight move.
        assert!(find_stride(knight, pos("b1"), pos("d5")).is_none());
    }

    #[test]
    fn king_steps_once() {
        let king = piece(PieceKind::King, Color::White);
        assert!(find_stride(king, pos("e1"), pos("f2")).is_some());
        assert!(find_stride(king, pos("e1"), pos("e3")).is_none());
    }

    #[test]
    fn pawn_double_step_only_from_start_rank() {
        let white = piece(PieceKind::Pawn, Color::White);
        assert_eq!(find_stride(white, pos("e2"), pos("e4")).unwrap().steps, 2);
        assert!(find_stride(white, pos("e3"), pos("e5")).is_none());
        assert!(find_stride(white, pos("e2"), pos("e1")).is_none());

        let black = piece(PieceKind::Pawn, Color::Black);
        assert_eq!(find_stride(black, pos("d7"), pos("d5")).unwrap().steps, 2);
        assert!(find_stride(black, pos("d7"), pos("d8")).is_none());
    }

    #[test]
    fn pawn_diagonal_requires_capture() {
        let white = piece(PieceKind::Pawn, Color::White);
        let stride = find_stride(white, pos("e2"), pos("d3")).unwrap();
        assert_eq!(stride.pattern.capture, Capture::Required);
        let forward = find_stride(white, pos("e2"), pos("e3")).unwrap();
        assert_eq!(forward.pattern.capture, Capture::Forbidden);
    }

    #[test]
    fn between_excludes_endpoints() {
        let queen = piece(PieceKind::Queen, Color::White);
        let stride = find_stride(queen, pos("a1"), pos("d4")).unwrap();
        let between: Vec<_> = stride.between(pos("a1")).collect();
        assert_eq!(between, vec![pos("b2"), pos("c3")]);
    }

    #[test]
    fn candidate_directions_per_kind() {
        assert_eq!(
            candidate_directions(piece(PieceKind::Queen, Color::White)).count(),
            8
        );
        assert_eq!(
            candidate_directions(piece(PieceKind::Pawn, Color::Black)).count(),
            3
        );
        assert!(is_sliding(piece(PieceKind::Rook, Color::Black)));
        assert!(!is_sliding(piece(PieceKind::Knight, Color::Black)));
    }
}
