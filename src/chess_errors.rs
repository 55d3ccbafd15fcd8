//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type returned by board queries, move
//! generation, legality filtering, move application, setup parsing and the
//! player collaborators. Variants fall into two groups:
//! - declined results (out-of-range coordinates, illegal moves, wrong side to
//!   move, malformed input). These are expected during play and the caller
//!   simply asks for another move.
//! - invariant violations (a missing or captured king, more than one pinner on
//!   a single piece). These are engine defects and are never produced by a
//!   correctly constructed game.

use thiserror::Error;

use crate::game_state::chess_types::{Color, PieceKind, Position};

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// A coordinate pair fell outside the 1..8 board.
    ///
    /// Payload: the offending (file, rank).
    #[error("position ({0}, {1}) is outside the 1..8 board")]
    OutOfRange(i8, i8),

    /// An engine invariant was broken. Not recoverable within the game.
    #[error("engine invariant violated: {0}")]
    InvariantViolation(InvariantViolation),

    /// The destination is not in the computed legal-move set for the piece.
    #[error("illegal move {from} -> {to}")]
    IllegalMove { from: Position, to: Position },

    /// A move or query named a square that holds no piece.
    #[error("no piece on {0}")]
    EmptySquare(Position),

    /// The selected piece belongs to the side that is not on move.
    ///
    /// Payload: the color whose turn it actually is.
    #[error("it is {0}'s turn")]
    NotSideToMove(Color),

    /// A pawn reached the last rank and no promotion piece was given.
    #[error("move {from} -> {to} promotes and needs a piece choice")]
    PromotionChoiceRequired { from: Position, to: Position },

    /// Pawns may only promote to a knight, bishop, rook or queen.
    #[error("cannot promote to {0:?}")]
    InvalidPromotion(PieceKind),

    /// The game already reached a terminal status.
    #[error("the game is over")]
    GameOver,

    /// Setup string could not be parsed or describes an unplayable position.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// Player input was not a two-digit file/rank coordinate.
    #[error("invalid coordinate input: {0:?}")]
    InvalidCoordinate(String),

    /// Configuration option name is not known.
    #[error("unknown option: {0}")]
    UnknownOption(String),

    /// Configuration option value could not be interpreted.
    #[error("invalid value {value:?} for option {name}")]
    InvalidOption { name: String, value: String },

    /// The player collaborator could not produce a move (input closed, etc).
    #[error("player failed: {0}")]
    PlayerFailed(String),
}

/// Specific engine invariants that can be violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// No king of the given color on the board.
    #[error("{0} king is missing from the board")]
    KingMissing(Color),

    /// More than one king of the given color on the board.
    #[error("{0} has more than one king")]
    DuplicateKing(Color),

    /// A move would have removed a king from the board.
    #[error("king on {0} would have been captured")]
    KingCaptured(Position),

    /// More than one slider pins the same piece.
    #[error("piece on {0} has more than one pinner")]
    MultiplePinners(Position),

    /// A grid cell holds a piece whose stored position disagrees with the cell.
    #[error("cell {0} holds a piece that thinks it is elsewhere")]
    MisplacedPiece(Position),
}

impl From<InvariantViolation> for ChessErrors {
    fn from(value: InvariantViolation) -> Self {
        ChessErrors::InvariantViolation(value)
    }
}

impl ChessErrors {
    /// True for declined results the caller can answer with a new move.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ChessErrors::InvariantViolation(_))
    }
}
