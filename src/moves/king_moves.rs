//! King movement and castling availability.
//!
//! In `Full` mode the unit steps are filtered against the opponent's attacks
//! after the step is made on a probe board, and castling destinations are
//! appended. In `Simple` mode the raw unit steps are returned; that is the
//! king's attack geometry.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::*;
use crate::moves::move_templates::{step_destinations, GenerationMode};

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastlingSide {
    Kingside,
    Queenside,
}

impl CastlingSide {
    pub const fn rook_file(self) -> u8 {
        match self {
            CastlingSide::Kingside => KINGSIDE_ROOK_FILE,
            CastlingSide::Queenside => QUEENSIDE_ROOK_FILE,
        }
    }

    pub const fn king_target_file(self) -> u8 {
        match self {
            CastlingSide::Kingside => KINGSIDE_KING_TARGET_FILE,
            CastlingSide::Queenside => QUEENSIDE_KING_TARGET_FILE,
        }
    }

    pub const fn rook_target_file(self) -> u8 {
        match self {
            CastlingSide::Kingside => KINGSIDE_ROOK_TARGET_FILE,
            CastlingSide::Queenside => QUEENSIDE_ROOK_TARGET_FILE,
        }
    }

    /// Side a king move from `from` to `to` castles toward, if it is a
    /// castling move at all.
    pub fn from_king_move(from: Position, to: Position) -> Option<Self> {
        if from.rank() != to.rank() || from.file() != KING_START_FILE {
            return None;
        }
        match to.file() {
            KINGSIDE_KING_TARGET_FILE => Some(CastlingSide::Kingside),
            QUEENSIDE_KING_TARGET_FILE => Some(CastlingSide::Queenside),
            _ => None,
        }
    }
}

pub fn generate_king_moves(board: &Board, king: &Piece, mode: GenerationMode) -> Vec<Position> {
    let mut out = step_destinations(board, king, &KING_OFFSETS);
    if mode == GenerationMode::Simple {
        return out;
    }

    out.retain(|to| !threatened_after_step(board, king, *to));
    out.extend(castling_destinations(board, king));
    out
}

fn threatened_after_step(board: &Board, king: &Piece, to: Position) -> bool {
    let mut probe = *board;
    probe.relocate(king.position, to);
    probe.is_threatened(king.color, &[to])
}

/// King destinations of every castle currently available to `king`.
pub fn castling_destinations(board: &Board, king: &Piece) -> Vec<Position> {
    let home = Position::at(KING_START_FILE, king.color.home_rank());
    if king.kind != PieceKind::King || king.has_moved || king.position != home {
        return Vec::new();
    }

    [CastlingSide::Kingside, CastlingSide::Queenside]
        .into_iter()
        .filter_map(|side| castle_target(board, king, side))
        .collect()
}

fn castle_target(board: &Board, king: &Piece, side: CastlingSide) -> Option<Position> {
    let rank = king.color.home_rank();
    let rook_square = Position::at(side.rook_file(), rank);
    let rook = board.occupant_at(rook_square)?;
    if !rook.is(PieceKind::Rook, king.color) || rook.has_moved {
        return None;
    }

    let between = king.position.squares_between(rook_square)?;
    if !between.iter().all(|pos| board.is_empty_at(*pos)) {
        return None;
    }

    let target = Position::at(side.king_target_file(), rank);
    let mut transit = vec![king.position];
    transit.extend(king.position.squares_between(target)?);
    transit.push(target);
    if board.is_threatened(king.color, &transit) {
        return None;
    }

    Some(target)
}
