//! Legality filter.
//!
//! Pseudo-legal destinations are narrowed in two passes. First the pin
//! restriction keeps a pinned piece on its pin line. Then every remaining
//! candidate is played on a probe copy of the board and dropped if the mover's
//! king is attacked afterwards. The second pass is what resolves check: only
//! captures of the checker, interpositions and king escapes survive it, and it
//! looks at all attackers, so double check needs no special case.

use std::collections::BTreeMap;

use tracing::trace;

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{describe_move, execute_move};
use crate::move_generation::legal_move_pins::find_pin;
use crate::moves::move_templates::GenerationMode;
use crate::moves::piece_moves::pseudo_legal_destinations;

/// Legal destinations keyed by the square of the piece that can move there.
pub type LegalMoveMap = BTreeMap<Position, Vec<Position>>;

/// Legal destinations of the piece on `from`, in generation order.
pub fn legal_destinations(board: &Board, from: Position) -> Result<Vec<Position>, ChessErrors> {
    let piece = *board
        .occupant_at(from)
        .ok_or(ChessErrors::EmptySquare(from))?;

    let mut destinations = pseudo_legal_destinations(board, &piece, GenerationMode::Full);
    if let Some(pin) = find_pin(board, from)? {
        destinations.retain(|to| pin.allows(*to));
    }

    let mut legal = Vec::with_capacity(destinations.len());
    for to in destinations {
        if leaves_king_safe(board, from, to)? {
            legal.push(to);
        }
    }
    Ok(legal)
}

/// Plays `from -> to` on a probe copy and reports whether the mover's king is
/// unattacked afterwards.
pub fn leaves_king_safe(board: &Board, from: Position, to: Position) -> Result<bool, ChessErrors> {
    let color = board
        .occupant_at(from)
        .map(|p| p.color)
        .ok_or(ChessErrors::EmptySquare(from))?;

    let mut probe = *board;
    let mv = describe_move(&probe, from, to, Some(PieceKind::Queen))?;
    execute_move(&mut probe, &mv)?;
    let king = probe.find_king(color)?;
    Ok(!probe.is_threatened(color, &[king]))
}

/// Every legal move of `color`, omitting pieces with none.
///
/// When `color` is in check this is the check-response map; an empty map then
/// means checkmate.
pub fn legal_move_map(board: &Board, color: Color) -> Result<LegalMoveMap, ChessErrors> {
    let mut map = LegalMoveMap::new();
    let squares: Vec<Position> = board.pieces_of(color).map(|p| p.position).collect();
    for from in squares {
        let destinations = legal_destinations(board, from)?;
        if !destinations.is_empty() {
            map.insert(from, destinations);
        }
    }
    trace!(%color, movable = map.len(), "legal move map built");
    Ok(map)
}

/// True as soon as one piece of `color` has a legal move.
pub fn has_legal_move(board: &Board, color: Color) -> Result<bool, ChessErrors> {
    let squares: Vec<Position> = board.pieces_of(color).map(|p| p.position).collect();
    for from in squares {
        if !legal_destinations(board, from)?.is_empty() {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Number of legal from/to pairs in a map.
pub fn count_moves(map: &LegalMoveMap) -> usize {
    map.values().map(Vec::len).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_errors::InvariantViolation;
    use crate::move_generation::legal_move_checks::is_king_in_check;

    fn place(board: &mut Board, kind: PieceKind, color: Color, file: u8, rank: u8) {
        let pos = Position::at(file, rank);
        board.set_cell(pos, Some(Piece::new(kind, color, pos)));
    }

    #[test]
    fn startpos_has_twenty_legal_moves() {
        let board = Board::standard();
        let before = board;
        let map = legal_move_map(&board, Color::White).expect("kings present");
        assert_eq!(count_moves(&map), 20);
        assert_eq!(map.len(), 10);
        assert_eq!(board, before);
    }

    #[test]
    fn pinned_bishop_cannot_leave_the_file() {
        let mut board = Board::empty();
        place(&mut board, PieceKind::King, Color::White, 5, 1);
        place(&mut board, PieceKind::Bishop, Color::White, 5, 3);
        place(&mut board, PieceKind::Rook, Color::Black, 5, 6);
        place(&mut board, PieceKind::King, Color::Black, 1, 8);
        assert!(legal_destinations(&board, Position::at(5, 3))
            .expect("bishop present")
            .is_empty());
    }

    #[test]
    fn pinned_rook_slides_along_the_pin_line() {
        let mut board = Board::empty();
        place(&mut board, PieceKind::King, Color::White, 5, 1);
        place(&mut board, PieceKind::Rook, Color::White, 5, 3);
        place(&mut board, PieceKind::Rook, Color::Black, 5, 6);
        place(&mut board, PieceKind::King, Color::Black, 1, 8);
        let dests = legal_destinations(&board, Position::at(5, 3)).expect("rook present");
        assert_eq!(
            dests,
            vec![
                Position::at(5, 4),
                Position::at(5, 5),
                Position::at(5, 6),
                Position::at(5, 2)
            ]
        );
    }

    #[test]
    fn check_responses_are_capture_block_or_escape() {
        let mut board = Board::empty();
        place(&mut board, PieceKind::King, Color::White, 5, 1);
        place(&mut board, PieceKind::Pawn, Color::White, 4, 2);
        place(&mut board, PieceKind::Pawn, Color::White, 6, 2);
        place(&mut board, PieceKind::Rook, Color::White, 1, 3);
        place(&mut board, PieceKind::Knight, Color::White, 3, 6);
        place(&mut board, PieceKind::Rook, Color::Black, 5, 7);
        place(&mut board, PieceKind::King, Color::Black, 8, 8);
        assert!(is_king_in_check(&board, Color::White).expect("kings present"));

        let map = legal_move_map(&board, Color::White).expect("kings present");
        assert_eq!(map.get(&Position::at(1, 3)), Some(&vec![Position::at(5, 3)]));
        assert_eq!(
            map.get(&Position::at(3, 6)),
            Some(&vec![Position::at(5, 7), Position::at(5, 5)])
        );
        assert_eq!(
            map.get(&Position::at(5, 1)),
            Some(&vec![Position::at(4, 1), Position::at(6, 1)])
        );
        assert!(!map.contains_key(&Position::at(4, 2)));
        assert!(!map.contains_key(&Position::at(6, 2)));
    }

    #[test]
    fn double_check_leaves_only_king_moves() {
        let mut board = Board::empty();
        place(&mut board, PieceKind::King, Color::White, 5, 1);
        place(&mut board, PieceKind::Rook, Color::White, 1, 3);
        place(&mut board, PieceKind::Rook, Color::Black, 5, 8);
        place(&mut board, PieceKind::Knight, Color::Black, 4, 3);
        place(&mut board, PieceKind::King, Color::Black, 8, 8);
        let map = legal_move_map(&board, Color::White).expect("kings present");
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![Position::at(5, 1)]);
    }

    #[test]
    fn back_rank_mate_has_empty_map() {
        let mut board = Board::empty();
        place(&mut board, PieceKind::King, Color::White, 7, 1);
        place(&mut board, PieceKind::Pawn, Color::White, 6, 2);
        place(&mut board, PieceKind::Pawn, Color::White, 7, 2);
        place(&mut board, PieceKind::Pawn, Color::White, 8, 2);
        place(&mut board, PieceKind::Rook, Color::Black, 1, 1);
        place(&mut board, PieceKind::King, Color::Black, 7, 8);
        assert!(legal_move_map(&board, Color::White)
            .expect("kings present")
            .is_empty());
        assert!(!has_legal_move(&board, Color::White).expect("kings present"));

        board.take(Position::at(1, 1));
        assert!(has_legal_move(&board, Color::White).expect("kings present"));
    }

    #[test]
    fn king_may_not_capture_a_defended_piece() {
        let mut board = Board::empty();
        place(&mut board, PieceKind::King, Color::White, 5, 1);
        place(&mut board, PieceKind::Queen, Color::Black, 5, 2);
        place(&mut board, PieceKind::Bishop, Color::Black, 3, 4);
        place(&mut board, PieceKind::King, Color::Black, 5, 8);
        let dests = legal_destinations(&board, Position::at(5, 1)).expect("king present");
        assert!(dests.is_empty());
    }

    #[test]
    fn en_passant_that_exposes_the_king_on_the_rank_is_illegal() {
        let mut board = Board::empty();
        place(&mut board, PieceKind::King, Color::White, 1, 5);
        let mut pawn = Piece::new(PieceKind::Pawn, Color::White, Position::at(2, 5));
        pawn.has_moved = true;
        board.set_cell(pawn.position, Some(pawn));
        let mut victim = Piece::new(PieceKind::Pawn, Color::Black, Position::at(3, 5));
        victim.has_moved = true;
        victim.en_passant_vulnerable = true;
        board.set_cell(victim.position, Some(victim));
        place(&mut board, PieceKind::Rook, Color::Black, 8, 5);
        place(&mut board, PieceKind::King, Color::Black, 8, 8);

        let dests = legal_destinations(&board, Position::at(2, 5)).expect("pawn present");
        assert_eq!(dests, vec![Position::at(2, 6)]);
    }

    #[test]
    fn legality_queries_leave_the_board_untouched() {
        let mut board = Board::empty();
        place(&mut board, PieceKind::King, Color::White, 5, 1);
        place(&mut board, PieceKind::Bishop, Color::White, 5, 3);
        place(&mut board, PieceKind::Rook, Color::Black, 5, 6);
        place(&mut board, PieceKind::Queen, Color::Black, 2, 5);
        place(&mut board, PieceKind::King, Color::Black, 1, 8);
        let before = board;
        for color in [Color::White, Color::Black] {
            let map = legal_move_map(&board, color).expect("kings present");
            assert!(!map.is_empty());
        }
        assert_eq!(board, before);
    }

    #[test]
    fn querying_the_side_that_could_take_a_king_is_a_violation() {
        let mut board = Board::empty();
        place(&mut board, PieceKind::King, Color::White, 5, 1);
        place(&mut board, PieceKind::Queen, Color::Black, 2, 4);
        place(&mut board, PieceKind::King, Color::Black, 1, 8);
        let before = board;
        assert_eq!(
            legal_destinations(&board, Position::at(2, 4)),
            Err(ChessErrors::InvariantViolation(InvariantViolation::KingCaptured(
                Position::at(5, 1)
            )))
        );
        assert_eq!(board, before);
    }
}
