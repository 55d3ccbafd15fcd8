//! Session options.
//!
//! Options are set by name, one `name`/`value` pair at a time, the same way a
//! front end would forward them from the command line. Names are matched
//! case-insensitively.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::{Color, PieceKind};

/// Who picks the moves for one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Random,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Setup string for the initial position.
    pub start_fen: String,
    /// Piece a pawn becomes when the caller gives no choice. `None` means a
    /// choice is required.
    pub default_promotion: Option<PieceKind>,
    pub white: PlayerKind,
    pub black: PlayerKind,
    /// Seed for random players; `None` draws one from the OS.
    pub seed: Option<u64>,
    /// Half-moves after which the session loop stops without a result.
    pub max_plies: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_fen: STARTING_POSITION_FEN.to_owned(),
            default_promotion: None,
            white: PlayerKind::Human,
            black: PlayerKind::Random,
            seed: None,
            max_plies: None,
        }
    }
}

impl GameConfig {
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), ChessErrors> {
        let invalid = || ChessErrors::InvalidOption {
            name: name.to_owned(),
            value: value.to_owned(),
        };
        let value = value.trim();

        if name.eq_ignore_ascii_case("StartFen") {
            if value.is_empty() {
                return Err(invalid());
            }
            self.start_fen = value.to_owned();
        } else if name.eq_ignore_ascii_case("DefaultPromotion") {
            self.default_promotion = match value.to_ascii_lowercase().as_str() {
                "none" | "ask" | "" => None,
                other => Some(parse_promotion_kind(other).ok_or_else(invalid)?),
            };
        } else if name.eq_ignore_ascii_case("White") {
            self.white = parse_player_kind(value).ok_or_else(invalid)?;
        } else if name.eq_ignore_ascii_case("Black") {
            self.black = parse_player_kind(value).ok_or_else(invalid)?;
        } else if name.eq_ignore_ascii_case("Seed") {
            self.seed = match value.to_ascii_lowercase().as_str() {
                "none" | "" => None,
                other => Some(other.parse::<u64>().map_err(|_| invalid())?),
            };
        } else if name.eq_ignore_ascii_case("MaxPlies") {
            self.max_plies = match value.parse::<u32>().map_err(|_| invalid())? {
                0 => None,
                plies => Some(plies),
            };
        } else {
            return Err(ChessErrors::UnknownOption(name.to_owned()));
        }

        Ok(())
    }

    /// Applies a `name=value` argument.
    pub fn apply_argument(&mut self, arg: &str) -> Result<(), ChessErrors> {
        let (name, value) = arg
            .split_once('=')
            .ok_or_else(|| ChessErrors::UnknownOption(arg.to_owned()))?;
        self.set_option(name.trim(), value)
    }

    pub fn player(&self, color: Color) -> PlayerKind {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }
}

fn parse_player_kind(value: &str) -> Option<PlayerKind> {
    match value.to_ascii_lowercase().as_str() {
        "human" | "terminal" => Some(PlayerKind::Human),
        "random" => Some(PlayerKind::Random),
        _ => None,
    }
}

/// Parses a promotion choice by letter or name.
pub fn parse_promotion_kind(value: &str) -> Option<PieceKind> {
    match value.trim().to_ascii_lowercase().as_str() {
        "n" | "knight" => Some(PieceKind::Knight),
        "b" | "bishop" => Some(PieceKind::Bishop),
        "r" | "rook" => Some(PieceKind::Rook),
        "q" | "queen" => Some(PieceKind::Queen),
        _ => None,
    }
}
