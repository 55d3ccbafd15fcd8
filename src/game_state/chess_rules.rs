//! Canonical chess-rule constants.
//!
//! Starting layout, castling geometry and the files involved, all in 1-based
//! file numbers.

use crate::game_state::chess_types::PieceKind;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Back-rank piece order from file 1 to file 8.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const KING_START_FILE: u8 = 5;

pub const KINGSIDE_ROOK_FILE: u8 = 8;
pub const QUEENSIDE_ROOK_FILE: u8 = 1;

/// King destination files after castling.
pub const KINGSIDE_KING_TARGET_FILE: u8 = 7;
pub const QUEENSIDE_KING_TARGET_FILE: u8 = 3;

/// Rook destination files after castling.
pub const KINGSIDE_ROOK_TARGET_FILE: u8 = 6;
pub const QUEENSIDE_ROOK_TARGET_FILE: u8 = 4;
