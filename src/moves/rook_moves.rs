use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, Position};
use crate::moves::move_templates::ray_destinations;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

#[inline]
pub fn generate_rook_moves(board: &Board, rook: &Piece) -> Vec<Position> {
    ray_destinations(board, rook, &ROOK_DIRECTIONS)
}
