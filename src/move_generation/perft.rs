//! Perft: counts leaf nodes of the legal move tree to a fixed depth.
//!
//! Used as a correctness tool for move generation. Each promotion counts once
//! per promotion kind, so the totals line up with published tables.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::{GameState, GameStatus, MoveOutcome};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn record_leaf(&mut self, outcome: &MoveOutcome) {
        self.nodes += 1;

        if outcome.mv.is_capture() {
            self.captures += 1;
        }
        if outcome.mv.kind == MoveKind::EnPassantCapture {
            self.en_passant += 1;
        }
        if outcome.mv.is_castle() {
            self.castles += 1;
        }
        if matches!(outcome.mv.kind, MoveKind::Promotion(_)) {
            self.promotions += 1;
        }
        match outcome.status {
            GameStatus::Check(_) => self.checks += 1,
            GameStatus::Checkmate { .. } => {
                self.checks += 1;
                self.checkmates += 1;
            }
            GameStatus::Ongoing | GameStatus::Stalemate => {}
        }
    }
}

const PROMOTION_CHOICES: [Option<PieceKind>; 4] = [
    Some(PieceKind::Knight),
    Some(PieceKind::Bishop),
    Some(PieceKind::Rook),
    Some(PieceKind::Queen),
];

pub fn perft(game_state: &GameState, depth: u8) -> Result<PerftCounts, ChessErrors> {
    let mut total = PerftCounts::default();
    if depth == 0 {
        total.nodes = 1;
        return Ok(total);
    }

    perft_recurse(game_state, depth, &mut total)?;
    Ok(total)
}

fn perft_recurse(
    game_state: &GameState,
    depth: u8,
    counts: &mut PerftCounts,
) -> Result<(), ChessErrors> {
    for (from, destinations) in game_state.legal_move_map()? {
        for to in destinations {
            let choices: &[Option<PieceKind>] = if game_state.is_promotion_move(from, to) {
                &PROMOTION_CHOICES
            } else {
                &[None]
            };

            for promotion in choices {
                let mut child = game_state.clone();
                let outcome = child.play(from, to, *promotion)?;
                if depth == 1 {
                    counts.record_leaf(&outcome);
                } else {
                    perft_recurse(&child, depth - 1, counts)?;
                }
            }
        }
    }

    Ok(())
}

/// Node count per root move, in move-map order. Handy for locating a
/// generation bug by comparing against another engine.
pub fn perft_divide(game_state: &GameState, depth: u8) -> Result<Vec<(String, usize)>, ChessErrors> {
    let mut out = Vec::new();
    if depth == 0 {
        return Ok(out);
    }

    for (from, destinations) in game_state.legal_move_map()? {
        for to in destinations {
            let choices: &[Option<PieceKind>] = if game_state.is_promotion_move(from, to) {
                &PROMOTION_CHOICES
            } else {
                &[None]
            };

            for promotion in choices {
                let mut child = game_state.clone();
                let outcome = child.play(from, to, *promotion)?;
                let nodes = perft(&child, depth - 1)?.nodes;
                out.push((outcome.mv.to_string(), nodes));
            }
        }
    }

    Ok(out)
}
