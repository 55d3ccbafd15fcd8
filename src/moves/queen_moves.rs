use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, Position};
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::move_templates::ray_destinations;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = generate_queen_directions();

#[inline]
pub fn generate_queen_moves(board: &Board, queen: &Piece) -> Vec<Position> {
    ray_destinations(board, queen, &QUEEN_DIRECTIONS)
}

const fn generate_queen_directions() -> [(i8, i8); 8] {
    let mut table = [(0i8, 0i8); 8];
    let mut idx = 0usize;

    while idx < 4 {
        table[idx] = ROOK_DIRECTIONS[idx];
        table[idx + 4] = BISHOP_DIRECTIONS[idx];
        idx += 1;
    }

    table
}
