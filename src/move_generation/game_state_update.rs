//! Bookkeeping after a move has been executed.
//!
//! En passant eligibility lasts exactly one reply: every pawn flag is cleared
//! except the one belonging to the pawn that just double-stepped. The mover's
//! king can no longer be in check, and the opponent king's check flags are
//! recomputed from every attack the mover now has, so discovered and double
//! checks are seen too.

use tracing::trace;

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::attackers_of;

/// Updates flags after `mv` by `mover` and returns the squares now checking
/// the opponent king.
pub fn update_after_move(
    board: &mut Board,
    mover: Color,
    mv: &ChessMove,
) -> Result<Vec<Position>, ChessErrors> {
    let just_double_stepped = (mv.kind == MoveKind::DoubleStep).then_some(mv.to);
    for piece in board.pieces_mut() {
        if piece.kind == PieceKind::Pawn && Some(piece.position) != just_double_stepped {
            piece.en_passant_vulnerable = false;
        }
    }

    let own_king = board.find_king(mover)?;
    if let Some(king) = board.occupant_at_mut(own_king) {
        king.in_check = false;
        king.checking_piece = None;
    }

    let opponent = mover.opposite();
    let opponent_king = board.find_king(opponent)?;
    let checkers = attackers_of(board, opponent_king, mover);
    if let Some(king) = board.occupant_at_mut(opponent_king) {
        king.in_check = !checkers.is_empty();
        king.checking_piece = checkers.first().copied();
    }

    if !checkers.is_empty() {
        trace!(king = %opponent_king, checkers = checkers.len(), "check delivered");
    }
    Ok(checkers)
}
