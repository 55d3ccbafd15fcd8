//! Two-digit coordinate input.
//!
//! Players type a square as `XY`: the file digit then the rank digit, each
//! 1-8, so `52` is the white king's pawn square. Surrounding whitespace is
//! ignored.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::Position;

pub fn parse_coordinate(input: &str) -> Result<Position, ChessErrors> {
    let trimmed = input.trim();
    let invalid = || ChessErrors::InvalidCoordinate(trimmed.to_owned());

    let mut chars = trimmed.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(invalid());
    };
    let file = file.to_digit(10).ok_or_else(invalid)?;
    let rank = rank.to_digit(10).ok_or_else(invalid)?;

    Position::new(file as i8, rank as i8).map_err(|_| invalid())
}
