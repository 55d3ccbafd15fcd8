//! Attack and threat evaluation.
//!
//! Every query here generates the opponent's moves in `Simple` mode. Using
//! attack geometry rather than full legality is what keeps threat evaluation
//! and the legality filter from calling each other forever.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::move_templates::GenerationMode;
use crate::moves::piece_moves::pseudo_legal_destinations;

/// True iff any piece not of `color` attacks one of `squares`.
pub fn is_threatened(board: &Board, color: Color, squares: &[Position]) -> bool {
    board.pieces().filter(|p| p.color != color).any(|attacker| {
        pseudo_legal_destinations(board, attacker, GenerationMode::Simple)
            .iter()
            .any(|to| squares.contains(to))
    })
}

/// Squares of the pieces of `attacker_color` attacking `square`, in board scan
/// order.
pub fn attackers_of(board: &Board, square: Position, attacker_color: Color) -> Vec<Position> {
    board
        .pieces_of(attacker_color)
        .filter(|attacker| {
            pseudo_legal_destinations(board, attacker, GenerationMode::Simple).contains(&square)
        })
        .map(|attacker| attacker.position)
        .collect()
}

#[inline]
pub fn king_square(board: &Board, color: Color) -> Result<Position, ChessErrors> {
    board.find_king(color)
}

pub fn is_king_in_check(board: &Board, color: Color) -> Result<bool, ChessErrors> {
    let king = king_square(board, color)?;
    Ok(is_threatened(board, color, &[king]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(board: &mut Board, kind: PieceKind, color: Color, file: u8, rank: u8) {
        let pos = Position::at(file, rank);
        board.set_cell(pos, Some(Piece::new(kind, color, pos)));
    }

    #[test]
    fn nothing_is_attacked_in_the_middle_at_the_start() {
        let board = Board::standard();
        assert!(!is_threatened(&board, Color::White, &[Position::at(5, 5)]));
        assert!(is_threatened(&board, Color::White, &[Position::at(5, 6)]));
        assert!(!is_king_in_check(&board, Color::White).expect("kings present"));
    }

    #[test]
    fn pawn_threatens_empty_diagonals_not_the_square_ahead() {
        let mut board = Board::empty();
        place(&mut board, PieceKind::Pawn, Color::Black, 4, 5);
        assert!(is_threatened(&board, Color::White, &[Position::at(3, 4)]));
        assert!(is_threatened(&board, Color::White, &[Position::at(5, 4)]));
        assert!(!is_threatened(&board, Color::White, &[Position::at(4, 4)]));
    }

    #[test]
    fn attackers_are_listed_for_double_check() {
        let mut board = Board::empty();
        place(&mut board, PieceKind::King, Color::White, 5, 1);
        place(&mut board, PieceKind::Rook, Color::Black, 5, 8);
        place(&mut board, PieceKind::Knight, Color::Black, 4, 3);
        place(&mut board, PieceKind::King, Color::Black, 1, 8);
        let attackers = attackers_of(&board, Position::at(5, 1), Color::Black);
        assert_eq!(attackers, vec![Position::at(4, 3), Position::at(5, 8)]);
        assert!(is_king_in_check(&board, Color::White).expect("kings present"));
    }

    #[test]
    fn own_pieces_never_threaten() {
        let mut board = Board::empty();
        place(&mut board, PieceKind::Queen, Color::White, 4, 4);
        assert!(!is_threatened(&board, Color::White, &[Position::at(4, 8)]));
        assert!(is_threatened(&board, Color::Black, &[Position::at(4, 8)]));
    }
}
