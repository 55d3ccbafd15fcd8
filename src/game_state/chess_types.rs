//! Value types shared by the board, the generators and the executor.
//!
//! Squares are addressed by 1-based (file, rank) pairs, so `(5, 2)` is the
//! white king's pawn square. Pieces are a closed set of kinds carrying their
//! own mutable flags; the board that holds them is always passed in explicitly.

use std::fmt;

use crate::chess_errors::ChessErrors;

/// Side of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank delta of a single pawn step.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank holding the king and rooks at the start of the game.
    #[inline]
    pub const fn home_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 8,
        }
    }

    #[inline]
    pub const fn pawn_start_rank(self) -> u8 {
        match self {
            Color::White => 2,
            Color::Black => 7,
        }
    }

    /// Rank on which this side's pawns promote.
    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Color::White => 8,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Piece kind. Color is stored next to it on `Piece`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Bishops, rooks and queens move along rays.
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }

    /// Kinds a pawn may turn into on the last rank.
    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }
}

pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
];

/// A square on the board, file and rank both in `1..=8`.
///
/// Ordering is file-major, which is the iteration order of every move map the
/// engine hands out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    file: u8,
    rank: u8,
}

impl Position {
    /// Builds a position, rejecting coordinates outside the board.
    pub fn new(file: i8, rank: i8) -> Result<Self, ChessErrors> {
        if (1..=8).contains(&file) && (1..=8).contains(&rank) {
            Ok(Self {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            Err(ChessErrors::OutOfRange(file, rank))
        }
    }

    /// Const constructor for literal squares.
    ///
    /// Panics if either coordinate is outside `1..=8`; use [`Position::new`]
    /// for anything that did not come from source code.
    pub const fn at(file: u8, rank: u8) -> Self {
        assert!(file >= 1 && file <= 8 && rank >= 1 && rank <= 8, "square off the board");
        Self { file, rank }
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Shifts the position, failing with `OutOfRange` when it leaves the board.
    #[inline]
    pub fn translate(self, d_file: i8, d_rank: i8) -> Result<Self, ChessErrors> {
        Position::new(self.file as i8 + d_file, self.rank as i8 + d_rank)
    }

    /// Squares strictly between `self` and `other` when they share a rank,
    /// file or diagonal. `None` when they are not aligned.
    pub fn squares_between(self, other: Position) -> Option<Vec<Position>> {
        let d_file = other.file as i8 - self.file as i8;
        let d_rank = other.rank as i8 - self.rank as i8;
        if d_file == 0 && d_rank == 0 {
            return None;
        }
        let aligned = d_file == 0 || d_rank == 0 || d_file.abs() == d_rank.abs();
        if !aligned {
            return None;
        }

        let step_file = d_file.signum();
        let step_rank = d_rank.signum();
        let mut out = Vec::new();
        let mut cursor = self.translate(step_file, step_rank).ok()?;
        while cursor != other {
            out.push(cursor);
            cursor = cursor.translate(step_file, step_rank).ok()?;
        }
        Some(out)
    }

    /// All 64 squares, file-major.
    pub fn all() -> impl Iterator<Item = Position> {
        (1..=8u8).flat_map(|file| (1..=8u8).map(move |rank| Position { file, rank }))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", char::from(b'a' + self.file - 1), self.rank)
    }
}

/// A piece on the board together with its rule flags.
///
/// `has_moved` matters for pawns, rooks and kings; `en_passant_vulnerable` only
/// for pawns; `in_check` and `checking_piece` only for kings. The checker is
/// stored by square, not by reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub position: Position,
    pub has_moved: bool,
    pub en_passant_vulnerable: bool,
    pub in_check: bool,
    pub checking_piece: Option<Position>,
}

impl Piece {
    /// A fresh piece with default flags.
    pub const fn new(kind: PieceKind, color: Color, position: Position) -> Self {
        Self {
            kind,
            color,
            position,
            has_moved: false,
            en_passant_vulnerable: false,
            in_check: false,
            checking_piece: None,
        }
    }

    #[inline]
    pub fn is(&self, kind: PieceKind, color: Color) -> bool {
        self.kind == kind && self.color == color
    }
}

/// What kind of move a from/to pair turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Normal,
    DoubleStep,
    Capture,
    EnPassantCapture,
    CastleKingside,
    CastleQueenside,
    Promotion(PieceKind),
}

/// A classified move. Transient: built right before execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChessMove {
    pub from: Position,
    pub to: Position,
    pub kind: MoveKind,
    pub moved_piece: PieceKind,
    pub captured_piece: Option<PieceKind>,
}

impl ChessMove {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        matches!(self.kind, MoveKind::CastleKingside | MoveKind::CastleQueenside)
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let MoveKind::Promotion(kind) = self.kind {
            let c = match kind {
                PieceKind::Knight => 'n',
                PieceKind::Bishop => 'b',
                PieceKind::Rook => 'r',
                _ => 'q',
            };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
