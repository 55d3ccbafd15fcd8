//! Uniform random player.
//!
//! Picks uniformly among every legal from/to pair of the side to move. Seeded
//! construction makes games reproducible for tests and diagnostics.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::trace;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{PieceKind, Position, PROMOTION_KINDS};
use crate::game_state::game_state::GameState;
use crate::players::player_trait::{MoveRequest, Player};

pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(&mut self, game_state: &GameState) -> Result<MoveRequest, ChessErrors> {
        let legal_moves: Vec<(Position, Position)> = game_state
            .legal_move_map()?
            .into_iter()
            .flat_map(|(from, dests)| dests.into_iter().map(move |to| (from, to)))
            .collect();
        trace!(count = legal_moves.len(), "random player choosing");

        let (from, to) = legal_moves
            .as_slice()
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| ChessErrors::PlayerFailed("no legal moves to choose from".to_owned()))?;
        Ok(MoveRequest { from, to })
    }

    fn choose_promotion(
        &mut self,
        _game_state: &GameState,
        _request: MoveRequest,
    ) -> Result<PieceKind, ChessErrors> {
        PROMOTION_KINDS
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| ChessErrors::PlayerFailed("no promotion kinds".to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chosen_moves_are_legal() {
        let game = GameState::new_game();
        let mut player = RandomPlayer::new(Some(7));
        for _ in 0..20 {
            let request = player.choose_move(&game).expect("start has moves");
            assert!(game
                .legal_moves_for(request.from)
                .expect("own piece")
                .contains(&request.to));
        }
    }

    #[test]
    fn same_seed_same_game() {
        let play = |seed| {
            let mut game = GameState::new_game();
            let mut player = RandomPlayer::new(Some(seed));
            let mut fens = Vec::new();
            for _ in 0..16 {
                if game.is_game_over() {
                    break;
                }
                let request = player.choose_move(&game).expect("moves available");
                game.apply_move(request.from, request.to, Some(PieceKind::Queen))
                    .expect("legal move");
                fens.push(game.get_fen());
            }
            fens
        };
        assert_eq!(play(11), play(11));
    }

    #[test]
    fn mated_side_cannot_choose() {
        let game = GameState::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").expect("FEN should parse");
        assert!(game.is_game_over());
        let mut player = RandomPlayer::new(Some(1));
        assert!(matches!(
            player.choose_move(&game),
            Err(ChessErrors::PlayerFailed(_))
        ));
        let promotion = player
            .choose_promotion(
                &game,
                MoveRequest {
                    from: Position::at(1, 7),
                    to: Position::at(1, 8),
                },
            )
            .expect("always a kind");
        assert!(promotion.is_promotion_target());
    }
}
