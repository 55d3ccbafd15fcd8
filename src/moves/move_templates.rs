//! Offset templates and the two walking primitives every generator is built on.
//!
//! Knights and kings take fixed steps, bishops, rooks and queens walk rays.
//! Pawns get their own conditional template in `pawn_moves`; the per-kind
//! offset tables live next to their generators.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

/// How much of a piece's movement to generate.
///
/// `Simple` is attack geometry only and is what threat evaluation uses: pawns
/// report their diagonals and no pushes, kings report unit steps without
/// castling or safety filtering. That keeps threat evaluation from recursing
/// back into king-move legality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    Full,
    Simple,
}

/// One square per offset, skipping squares off the board or held by a friend.
pub fn step_destinations(board: &Board, piece: &Piece, offsets: &[(i8, i8)]) -> Vec<Position> {
    offsets
        .iter()
        .filter_map(|&(d_file, d_rank)| piece.position.translate(d_file, d_rank).ok())
        .filter(|to| board.color_at(*to) != Some(piece.color))
        .collect()
}

/// Walks each ray until the edge or the first occupied square, which is kept
/// only when it holds an enemy piece.
pub fn ray_destinations(board: &Board, piece: &Piece, directions: &[(i8, i8)]) -> Vec<Position> {
    let mut out = Vec::new();
    for &(d_file, d_rank) in directions {
        let mut cursor = piece.position;
        while let Ok(next) = cursor.translate(d_file, d_rank) {
            match board.color_at(next) {
                None => out.push(next),
                Some(color) => {
                    if color != piece.color {
                        out.push(next);
                    }
                    break;
                }
            }
            cursor = next;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::knight_moves::KNIGHT_OFFSETS;
    use crate::moves::rook_moves::ROOK_DIRECTIONS;

    #[test]
    fn rays_stop_at_first_blocker() {
        let mut board = Board::empty();
        let rook = Piece::new(PieceKind::Rook, Color::White, Position::at(1, 1));
        board.set_cell(rook.position, Some(rook));
        board.set_cell(
            Position::at(1, 4),
            Some(Piece::new(PieceKind::Pawn, Color::Black, Position::at(1, 4))),
        );
        board.set_cell(
            Position::at(3, 1),
            Some(Piece::new(PieceKind::Bishop, Color::White, Position::at(3, 1))),
        );

        let dests = ray_destinations(&board, &rook, &ROOK_DIRECTIONS);
        assert!(dests.contains(&Position::at(1, 4)));
        assert!(!dests.contains(&Position::at(1, 5)));
        assert!(dests.contains(&Position::at(2, 1)));
        assert!(!dests.contains(&Position::at(3, 1)));
        assert_eq!(dests.len(), 4);
    }

    #[test]
    fn steps_skip_friendly_squares_and_edges() {
        let mut board = Board::empty();
        let knight = Piece::new(PieceKind::Knight, Color::Black, Position::at(1, 1));
        board.set_cell(knight.position, Some(knight));
        board.set_cell(
            Position::at(2, 3),
            Some(Piece::new(PieceKind::Pawn, Color::Black, Position::at(2, 3))),
        );
        let dests = step_destinations(&board, &knight, &KNIGHT_OFFSETS);
        assert_eq!(dests, vec![Position::at(3, 2)]);
    }
}
