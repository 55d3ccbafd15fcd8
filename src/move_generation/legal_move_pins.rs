//! Pin detection.
//!
//! A piece is pinned when lifting it off the board lets an enemy slider reach
//! its own king through the vacated square. The probe happens on a copy of the
//! board, so the caller's board is untouched whatever path this takes.

use tracing::trace;

use crate::chess_errors::{ChessErrors, InvariantViolation};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::move_templates::GenerationMode;
use crate::moves::piece_moves::pseudo_legal_destinations;

/// A pinned piece, the slider pinning it and the king behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pin {
    pub pinned: Position,
    pub pinner: Position,
    pub king: Position,
}

impl Pin {
    /// True if `to` keeps the pinned piece on the pin line: any square
    /// between king and pinner, or the pinner itself.
    pub fn allows(&self, to: Position) -> bool {
        if to == self.pinner {
            return true;
        }
        self.king
            .squares_between(self.pinner)
            .is_some_and(|line| line.contains(&to))
    }
}

/// The pin on the piece at `square`, if there is one.
///
/// Kings are never pinned. Finding two pinners is geometrically impossible and
/// is reported as an invariant violation.
pub fn find_pin(board: &Board, square: Position) -> Result<Option<Pin>, ChessErrors> {
    let Some(piece) = board.occupant_at(square) else {
        return Err(ChessErrors::EmptySquare(square));
    };
    if piece.kind == PieceKind::King {
        return Ok(None);
    }

    let color = piece.color;
    let king = board.find_king(color)?;

    let mut vacated = *board;
    vacated.set_cell(square, None);

    let pinners: Vec<Position> = vacated
        .pieces_of(color.opposite())
        .filter(|slider| slider.kind.is_slider())
        .filter(|slider| {
            slider
                .position
                .squares_between(king)
                .is_some_and(|line| line.contains(&square))
        })
        .filter(|slider| {
            pseudo_legal_destinations(&vacated, slider, GenerationMode::Simple).contains(&king)
        })
        .map(|slider| slider.position)
        .collect();

    match pinners.as_slice() {
        [] => Ok(None),
        [pinner] => {
            trace!(pinned = %square, pinner = %pinner, "pin found");
            Ok(Some(Pin {
                pinned: square,
                pinner: *pinner,
                king,
            }))
        }
        _ => Err(InvariantViolation::MultiplePinners(square).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(board: &mut Board, kind: PieceKind, color: Color, file: u8, rank: u8) {
        let pos = Position::at(file, rank);
        board.set_cell(pos, Some(Piece::new(kind, color, pos)));
    }

    #[test]
    fn bishop_between_king_and_rook_is_pinned() {
        let mut board = Board::empty();
        place(&mut board, PieceKind::King, Color::White, 5, 1);
        place(&mut board, PieceKind::Bishop, Color::White, 5, 3);
        place(&mut board, PieceKind::Rook, Color::Black, 5, 7);
        place(&mut board, PieceKind::King, Color::Black, 1, 8);
        let before = board;

        let pin = find_pin(&board, Position::at(5, 3))
            .expect("kings present")
            .expect("bishop is pinned");
        assert_eq!(pin.pinner, Position::at(5, 7));
        assert!(pin.allows(Position::at(5, 2)));
        assert!(pin.allows(Position::at(5, 6)));
        assert!(pin.allows(Position::at(5, 7)));
        assert!(!pin.allows(Position::at(4, 4)));
        assert!(!pin.allows(Position::at(5, 8)));
        assert_eq!(board, before);
    }

    #[test]
    fn second_blocker_means_no_pin() {
        let mut board = Board::empty();
        place(&mut board, PieceKind::King, Color::White, 5, 1);
        place(&mut board, PieceKind::Bishop, Color::White, 5, 3);
        place(&mut board, PieceKind::Knight, Color::White, 5, 5);
        place(&mut board, PieceKind::Rook, Color::Black, 5, 7);
        place(&mut board, PieceKind::King, Color::Black, 1, 8);
        assert_eq!(find_pin(&board, Position::at(5, 3)), Ok(None));
    }

    #[test]
    fn slider_on_wrong_line_does_not_pin() {
        let mut board = Board::empty();
        place(&mut board, PieceKind::King, Color::White, 5, 1);
        place(&mut board, PieceKind::Rook, Color::White, 6, 2);
        place(&mut board, PieceKind::Rook, Color::Black, 7, 3);
        place(&mut board, PieceKind::King, Color::Black, 1, 8);
        assert_eq!(find_pin(&board, Position::at(6, 2)), Ok(None));

        place(&mut board, PieceKind::Bishop, Color::Black, 7, 3);
        let pin = find_pin(&board, Position::at(6, 2)).expect("kings present");
        assert_eq!(pin.map(|p| p.pinner), Some(Position::at(7, 3)));
    }

    #[test]
    fn pin_survives_an_existing_check_from_elsewhere() {
        let mut board = Board::empty();
        place(&mut board, PieceKind::King, Color::White, 5, 1);
        place(&mut board, PieceKind::Knight, Color::White, 5, 2);
        place(&mut board, PieceKind::Rook, Color::Black, 5, 8);
        place(&mut board, PieceKind::Rook, Color::Black, 1, 1);
        place(&mut board, PieceKind::King, Color::Black, 8, 8);
        let pin = find_pin(&board, Position::at(5, 2)).expect("kings present");
        assert_eq!(pin.map(|p| p.pinner), Some(Position::at(5, 8)));
    }

    #[test]
    fn empty_square_is_reported() {
        let board = Board::standard();
        assert_eq!(
            find_pin(&board, Position::at(4, 4)),
            Err(ChessErrors::EmptySquare(Position::at(4, 4)))
        );
    }
}
