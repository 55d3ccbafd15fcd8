//! Crate root module declarations for the mailbox chess rules engine.
//!
//! This file exposes the board model and session state, the per-piece move
//! generators, the legality and move-application layer, the player
//! collaborators and the notation helpers so the binary, benches and tests can
//! import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_config;
    pub mod game_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_templates;
    pub mod pawn_moves;
    pub mod piece_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod game_state_update;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_pins;
    pub mod perft;
}

pub mod players {
    pub mod player_random;
    pub mod player_terminal;
    pub mod player_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod coordinate_input;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_game_state;
}
