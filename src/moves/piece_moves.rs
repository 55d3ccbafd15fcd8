//! Uniform entry point for pseudo-legal generation.
//!
//! Dispatches on the closed `PieceKind` set; callers never need to know which
//! generator a piece uses.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::move_templates::GenerationMode;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::queen_moves::generate_queen_moves;
use crate::moves::rook_moves::generate_rook_moves;

/// Pseudo-legal destinations of `piece` in template order.
pub fn pseudo_legal_destinations(board: &Board, piece: &Piece, mode: GenerationMode) -> Vec<Position> {
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, piece, mode),
        PieceKind::Knight => generate_knight_moves(board, piece),
        PieceKind::Bishop => generate_bishop_moves(board, piece),
        PieceKind::Rook => generate_rook_moves(board, piece),
        PieceKind::Queen => generate_queen_moves(board, piece),
        PieceKind::King => generate_king_moves(board, piece, mode),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_position_offers_twenty_pseudo_legal_moves_per_side() {
        let board = Board::standard();
        for color in [Color::White, Color::Black] {
            let total: usize = board
                .pieces_of(color)
                .map(|p| pseudo_legal_destinations(&board, p, GenerationMode::Full).len())
                .sum();
            assert_eq!(total, 20);
        }
    }

    #[test]
    fn destinations_never_leave_the_board() {
        let board = Board::standard();
        for piece in board.pieces() {
            for mode in [GenerationMode::Full, GenerationMode::Simple] {
                for to in pseudo_legal_destinations(&board, piece, mode) {
                    assert!((1..=8).contains(&to.file()));
                    assert!((1..=8).contains(&to.rank()));
                }
            }
        }
    }
}
