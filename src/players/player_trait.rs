//! Player abstraction used by the turn loop.
//!
//! A player only proposes moves. The game session decides whether a proposal
//! is legal, and the loop asks again when it is declined.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{PieceKind, Position};
use crate::game_state::game_state::GameState;

/// A proposed move: source square then destination square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    pub from: Position,
    pub to: Position,
}

pub trait Player {
    fn name(&self) -> &str;

    fn choose_move(&mut self, game_state: &GameState) -> Result<MoveRequest, ChessErrors>;

    /// Asked only when the chosen move promotes and no default is configured.
    fn choose_promotion(
        &mut self,
        game_state: &GameState,
        request: MoveRequest,
    ) -> Result<PieceKind, ChessErrors>;

    /// Told when a proposal was declined, so interactive players can explain.
    fn move_declined(&mut self, _request: MoveRequest, _reason: &ChessErrors) {}
}
