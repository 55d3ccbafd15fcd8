//! Pawn movement.
//!
//! Pushes go one square forward, two from an unmoved pawn when both squares are
//! empty. Captures go diagonally onto enemy pieces, or onto the empty square an
//! adjacent enemy pawn skipped on its double step while that pawn is still
//! flagged `en_passant_vulnerable`. Generation is a pure query; the flag is set
//! by the executor when the double step is applied.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::move_templates::GenerationMode;

const CAPTURE_FILE_DELTAS: [i8; 2] = [-1, 1];

pub fn generate_pawn_moves(board: &Board, pawn: &Piece, mode: GenerationMode) -> Vec<Position> {
    let direction = pawn.color.pawn_direction();
    let mut out = Vec::new();

    if mode == GenerationMode::Simple {
        for d_file in CAPTURE_FILE_DELTAS {
            if let Ok(to) = pawn.position.translate(d_file, direction) {
                if board.color_at(to) != Some(pawn.color) {
                    out.push(to);
                }
            }
        }
        return out;
    }

    if let Ok(one_step) = pawn.position.translate(0, direction) {
        if board.is_empty_at(one_step) {
            out.push(one_step);
            if !pawn.has_moved {
                if let Ok(two_step) = one_step.translate(0, direction) {
                    if board.is_empty_at(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for d_file in CAPTURE_FILE_DELTAS {
        let Ok(to) = pawn.position.translate(d_file, direction) else {
            continue;
        };
        match board.occupant_at(to) {
            Some(target) => {
                if target.color != pawn.color {
                    out.push(to);
                }
            }
            None => {
                if en_passant_victim(board, pawn, d_file).is_some() {
                    out.push(to);
                }
            }
        }
    }

    out
}

/// Square of the enemy pawn that `pawn` could take en passant toward
/// `d_file`, if any.
pub fn en_passant_victim(board: &Board, pawn: &Piece, d_file: i8) -> Option<Position> {
    let beside = pawn.position.translate(d_file, 0).ok()?;
    let victim = board.occupant_at(beside)?;
    (victim.is(PieceKind::Pawn, pawn.color.opposite()) && victim.en_passant_vulnerable)
        .then_some(beside)
}
