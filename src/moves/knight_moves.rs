use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, Position};
use crate::moves::move_templates::step_destinations;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

#[inline]
pub fn generate_knight_moves(board: &Board, knight: &Piece) -> Vec<Position> {
    step_destinations(board, knight, &KNIGHT_OFFSETS)
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;

    #[test]
    fn knight_from_d4_has_eight_targets() {
        let mut board = Board::empty();
        let knight = Piece::new(PieceKind::Knight, Color::White, Position::at(4, 4));
        board.set_cell(knight.position, Some(knight));
        assert_eq!(generate_knight_moves(&board, &knight).len(), 8);
    }

    #[test]
    fn knight_jumps_over_the_starting_pawns() {
        let board = Board::standard();
        let knight = *board.occupant_at(Position::at(2, 1)).expect("b1 knight");
        let dests = generate_knight_moves(&board, &knight);
        assert_eq!(dests, vec![Position::at(3, 3), Position::at(1, 3)]);
    }
}
