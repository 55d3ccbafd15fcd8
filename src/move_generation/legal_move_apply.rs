//! Special-move executor.
//!
//! `describe_move` classifies a from/to pair against the current board and
//! `execute_move` carries it out: plain relocation, capture, the two-piece
//! castling relocation, en passant removal of the bypassing pawn, and pawn
//! replacement on promotion. No legality is checked here; callers only hand in
//! moves that came out of the legality filter, or run this on a probe board.

use crate::chess_errors::{ChessErrors, InvariantViolation};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::king_moves::CastlingSide;

/// Classifies the move of the piece on `from` to `to`.
///
/// `promotion` is only consulted when a pawn lands on its last rank; it must
/// name a knight, bishop, rook or queen.
pub fn describe_move(
    board: &Board,
    from: Position,
    to: Position,
    promotion: Option<PieceKind>,
) -> Result<ChessMove, ChessErrors> {
    let piece = board
        .occupant_at(from)
        .ok_or(ChessErrors::EmptySquare(from))?;
    let target = board.occupant_at(to);
    let mut captured_piece = target.map(|p| p.kind);

    let kind = match piece.kind {
        PieceKind::Pawn if to.rank() == piece.color.promotion_rank() => {
            let choice = promotion.ok_or(ChessErrors::PromotionChoiceRequired { from, to })?;
            if !choice.is_promotion_target() {
                return Err(ChessErrors::InvalidPromotion(choice));
            }
            MoveKind::Promotion(choice)
        }
        PieceKind::Pawn if from.file() != to.file() && target.is_none() => {
            captured_piece = Some(PieceKind::Pawn);
            MoveKind::EnPassantCapture
        }
        PieceKind::Pawn if from.rank().abs_diff(to.rank()) == 2 => MoveKind::DoubleStep,
        PieceKind::King if from.file().abs_diff(to.file()) == 2 => {
            match CastlingSide::from_king_move(from, to) {
                Some(CastlingSide::Kingside) => MoveKind::CastleKingside,
                Some(CastlingSide::Queenside) => MoveKind::CastleQueenside,
                None => MoveKind::Normal,
            }
        }
        _ if target.is_some() => MoveKind::Capture,
        _ => MoveKind::Normal,
    };

    Ok(ChessMove {
        from,
        to,
        kind,
        moved_piece: piece.kind,
        captured_piece,
    })
}

/// True when the piece on `from` is a pawn that would land on its last rank.
pub fn is_promotion(board: &Board, from: Position, to: Position) -> bool {
    board
        .occupant_at(from)
        .is_some_and(|p| p.kind == PieceKind::Pawn && to.rank() == p.color.promotion_rank())
}

/// Applies `mv` to `board` and returns the captured piece, if any.
///
/// Sets `has_moved` on every piece that moves and `en_passant_vulnerable` on a
/// pawn that double-steps. A promoted piece is fresh and keeps default flags.
/// Capturing a king is refused as an invariant violation and leaves `board` as
/// it was.
pub fn execute_move(board: &mut Board, mv: &ChessMove) -> Result<Option<Piece>, ChessErrors> {
    let mut piece = *board
        .occupant_at(mv.from)
        .ok_or(ChessErrors::EmptySquare(mv.from))?;

    let captured_square = match mv.kind {
        MoveKind::EnPassantCapture => {
            Position::new(mv.to.file() as i8, mv.from.rank() as i8)?
        }
        _ => mv.to,
    };
    if let Some(victim) = board.occupant_at(captured_square) {
        if victim.kind == PieceKind::King {
            return Err(InvariantViolation::KingCaptured(captured_square).into());
        }
    }

    let captured = board.take(captured_square);
    board.take(mv.from);

    piece.has_moved = true;
    piece.en_passant_vulnerable = mv.kind == MoveKind::DoubleStep;
    if let MoveKind::Promotion(kind) = mv.kind {
        piece = Piece::new(kind, piece.color, mv.to);
    }
    board.set_cell(mv.to, Some(piece));

    let castle = match mv.kind {
        MoveKind::CastleKingside => Some(CastlingSide::Kingside),
        MoveKind::CastleQueenside => Some(CastlingSide::Queenside),
        _ => None,
    };
    if let Some(side) = castle {
        let rank = mv.from.rank();
        let rook_from = Position::at(side.rook_file(), rank);
        let rook_to = Position::at(side.rook_target_file(), rank);
        board.relocate(rook_from, rook_to);
        if let Some(rook) = board.occupant_at_mut(rook_to) {
            rook.has_moved = true;
        }
    }

    Ok(captured)
}
