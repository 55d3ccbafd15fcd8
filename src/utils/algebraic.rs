//! Algebraic square names.
//!
//! Parses coordinates such as `e4` into a `Position`, used by the setup
//! notation. `Position`'s `Display` goes the other way.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::Position;

/// Parse a square name (for example: "e4").
pub fn algebraic_to_position(square: &str) -> Result<Position, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidCoordinate(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidCoordinate(square.to_owned()));
    }

    Position::new((file - b'a' + 1) as i8, (rank - b'0') as i8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_convert_both_ways() {
        assert_eq!(algebraic_to_position("a1"), Ok(Position::at(1, 1)));
        assert_eq!(algebraic_to_position("h8"), Ok(Position::at(8, 8)));
        assert_eq!(Position::at(5, 3).to_string(), "e3");
    }

    #[test]
    fn malformed_names_are_rejected() {
        for bad in ["", "e", "i1", "a9", "a0", "E4", "e44"] {
            assert!(algebraic_to_position(bad).is_err(), "{bad} should fail");
        }
    }
}
