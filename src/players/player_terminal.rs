//! Line-oriented human player.
//!
//! Reads squares as two digits (file then rank) and promotion pieces by letter
//! or name. Malformed input is answered with a message and the same prompt
//! again; only a closed input stream ends the exchange.

use std::io::{BufRead, Write};

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{PieceKind, Position};
use crate::game_state::game_config::parse_promotion_kind;
use crate::game_state::game_state::GameState;
use crate::players::player_trait::{MoveRequest, Player};
use crate::utils::coordinate_input::parse_coordinate;

pub struct TerminalPlayer<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn prompt_line(&mut self, prompt: &str) -> Result<String, ChessErrors> {
        write!(self.output, "{prompt}").map_err(io_failure)?;
        self.output.flush().map_err(io_failure)?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(io_failure)?;
        if read == 0 {
            return Err(ChessErrors::PlayerFailed("input closed".to_owned()));
        }
        Ok(line)
    }

    fn prompt_square(&mut self, prompt: &str) -> Result<Position, ChessErrors> {
        loop {
            let line = self.prompt_line(prompt)?;
            match parse_coordinate(&line) {
                Ok(position) => return Ok(position),
                Err(err) => writeln!(self.output, "{err}; type file then rank, e.g. 52")
                    .map_err(io_failure)?,
            }
        }
    }
}

fn io_failure(err: std::io::Error) -> ChessErrors {
    ChessErrors::PlayerFailed(err.to_string())
}

impl<R: BufRead, W: Write> Player for TerminalPlayer<R, W> {
    fn name(&self) -> &str {
        "terminal"
    }

    fn choose_move(&mut self, game_state: &GameState) -> Result<MoveRequest, ChessErrors> {
        let side = game_state.side_to_move();
        if game_state.is_in_check() {
            writeln!(self.output, "{side} is in check").map_err(io_failure)?;
        }
        let from = self.prompt_square(&format!("{side} moves from (XY): "))?;
        let to = self.prompt_square(&format!("{side} moves {from} to (XY): "))?;
        Ok(MoveRequest { from, to })
    }

    fn choose_promotion(
        &mut self,
        _game_state: &GameState,
        request: MoveRequest,
    ) -> Result<PieceKind, ChessErrors> {
        loop {
            let line = self.prompt_line(&format!(
                "promote on {} to (q/r/b/n): ",
                request.to
            ))?;
            match parse_promotion_kind(&line) {
                Some(kind) => return Ok(kind),
                None => writeln!(self.output, "choose one of q, r, b or n").map_err(io_failure)?,
            }
        }
    }

    fn move_declined(&mut self, request: MoveRequest, reason: &ChessErrors) {
        // Output errors here are surfaced by the next prompt.
        let _ = writeln!(
            self.output,
            "{} -> {} declined: {reason}",
            request.from, request.to
        );
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn reads_two_squares_and_reprompts_on_garbage() {
        let input = Cursor::new("e2\n52\n99\n54\n");
        let mut output = Vec::new();
        let request = {
            let mut player = TerminalPlayer::new(input, &mut output);
            player
                .choose_move(&GameState::new_game())
                .expect("input has a move")
        };
        assert_eq!(
            request,
            MoveRequest {
                from: Position::at(5, 2),
                to: Position::at(5, 4)
            }
        );
        let text = String::from_utf8(output).expect("utf8 output");
        assert_eq!(text.matches("type file then rank").count(), 2);
    }

    #[test]
    fn promotion_accepts_letters_and_names() {
        let input = Cursor::new("king\nRook\n");
        let mut output = Vec::new();
        let mut player = TerminalPlayer::new(input, &mut output);
        let request = MoveRequest {
            from: Position::at(1, 7),
            to: Position::at(1, 8),
        };
        assert_eq!(
            player.choose_promotion(&GameState::new_game(), request),
            Ok(PieceKind::Rook)
        );
    }

    #[test]
    fn closed_input_fails_the_player() {
        let mut player = TerminalPlayer::new(Cursor::new(""), Vec::new());
        assert_eq!(
            player.choose_move(&GameState::new_game()),
            Err(ChessErrors::PlayerFailed("input closed".to_owned()))
        );
    }
}
