use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, Position};
use crate::moves::move_templates::ray_destinations;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

#[inline]
pub fn generate_bishop_moves(board: &Board, bishop: &Piece) -> Vec<Position> {
    ray_destinations(board, bishop, &BISHOP_DIRECTIONS)
}

#[cfg(test)]
mod tests {
    use super::generate_bishop_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;

    #[test]
    fn bishop_rays_from_d4_cover_thirteen_squares() {
        let mut board = Board::empty();
        let bishop = Piece::new(PieceKind::Bishop, Color::White, Position::at(4, 4));
        board.set_cell(bishop.position, Some(bishop));
        assert_eq!(generate_bishop_moves(&board, &bishop).len(), 13);
    }

    #[test]
    fn bishop_captures_but_does_not_pass_an_enemy() {
        let mut board = Board::empty();
        let bishop = Piece::new(PieceKind::Bishop, Color::White, Position::at(1, 1));
        board.set_cell(bishop.position, Some(bishop));
        board.set_cell(
            Position::at(3, 3),
            Some(Piece::new(PieceKind::Knight, Color::Black, Position::at(3, 3))),
        );
        let dests = generate_bishop_moves(&board, &bishop);
        assert_eq!(dests, vec![Position::at(2, 2), Position::at(3, 3)]);
    }
}
