//! Game session state.
//!
//! `GameState` owns the board for one game and is the surface the players and
//! the binary talk to: legal-move queries, move application, occupancy for
//! rendering and the game status. Moves are applied to a copy of the board and
//! committed only once every step succeeded, so a declined or failed move
//! leaves the session exactly as it was.

use tracing::{debug, error, info};

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_config::GameConfig;
use crate::move_generation::game_state_update::update_after_move;
use crate::move_generation::legal_move_apply::{describe_move, execute_move, is_promotion};
use crate::move_generation::legal_move_checks::{attackers_of, is_king_in_check};
use crate::move_generation::legal_move_generator::{
    has_legal_move, legal_destinations, legal_move_map, LegalMoveMap,
};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Where the game stands for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    /// The given side is in check and has at least one legal move.
    Check(Color),
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }
}

/// Result of a successfully applied move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub mv: ChessMove,
    /// The piece removed from the board, with the flags it had.
    pub captured: Option<Piece>,
    /// Squares of the pieces now checking the opponent king.
    pub checkers: Vec<Position>,
    /// Status for the side that moves next.
    pub status: GameStatus,
}

/// Rendering view of the grid, indexed `[rank - 1][file - 1]`.
pub type Occupancy = [[Option<(PieceKind, Color)>; 8]; 8];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    halfmove_clock: u16,
    fullmove_number: u16,
    status: GameStatus,
    default_promotion: Option<PieceKind>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard starting position, white to move.
    pub fn new_game() -> Self {
        Self {
            board: Board::standard(),
            side_to_move: Color::White,
            halfmove_clock: 0,
            fullmove_number: 1,
            status: GameStatus::Ongoing,
            default_promotion: None,
        }
    }

    pub fn with_config(config: &GameConfig) -> Result<Self, ChessErrors> {
        let mut game = Self::from_fen(&config.start_fen)?;
        game.default_promotion = config.default_promotion;
        Ok(game)
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Builds a session around a board set up elsewhere.
    ///
    /// Fails if the board breaks a structural invariant or if the side that is
    /// not on move is in check. King check flags are recomputed and the status
    /// is evaluated for `side_to_move`.
    pub fn from_setup(
        mut board: Board,
        side_to_move: Color,
        halfmove_clock: u16,
        fullmove_number: u16,
    ) -> Result<Self, ChessErrors> {
        board.validate()?;
        if is_king_in_check(&board, side_to_move.opposite())? {
            return Err(ChessErrors::InvalidFen(format!(
                "{} is in check but it is {side_to_move}'s turn",
                side_to_move.opposite()
            )));
        }

        for color in [Color::White, Color::Black] {
            let king_square = board.find_king(color)?;
            let checkers = attackers_of(&board, king_square, color.opposite());
            if let Some(king) = board.occupant_at_mut(king_square) {
                king.in_check = !checkers.is_empty();
                king.checking_piece = checkers.first().copied();
            }
        }

        let in_check = is_king_in_check(&board, side_to_move)?;
        let status = evaluate_status(&board, side_to_move, in_check)?;
        Ok(Self {
            board,
            side_to_move,
            halfmove_clock,
            fullmove_number,
            status,
            default_promotion: None,
        })
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.status.is_terminal()
    }

    #[inline]
    pub fn default_promotion(&self) -> Option<PieceKind> {
        self.default_promotion
    }

    #[inline]
    pub fn occupant_at(&self, pos: Position) -> Option<&Piece> {
        self.board.occupant_at(pos)
    }

    pub fn occupancy(&self) -> Occupancy {
        let mut grid: Occupancy = [[None; 8]; 8];
        for piece in self.board.pieces() {
            let pos = piece.position;
            grid[pos.rank() as usize - 1][pos.file() as usize - 1] = Some((piece.kind, piece.color));
        }
        grid
    }

    /// Legal destinations of the side-to-move piece on `from`.
    pub fn legal_moves_for(&self, from: Position) -> Result<Vec<Position>, ChessErrors> {
        let piece = self
            .board
            .occupant_at(from)
            .ok_or(ChessErrors::EmptySquare(from))?;
        if piece.color != self.side_to_move {
            return Err(ChessErrors::NotSideToMove(self.side_to_move));
        }
        legal_destinations(&self.board, from)
    }

    /// Every legal move of the side to move.
    pub fn legal_move_map(&self) -> Result<LegalMoveMap, ChessErrors> {
        legal_move_map(&self.board, self.side_to_move)
    }

    /// The moves that get the side to move out of check, or `None` when it is
    /// not in check. An empty map is checkmate.
    pub fn check_responses(&self) -> Result<Option<LegalMoveMap>, ChessErrors> {
        if !is_king_in_check(&self.board, self.side_to_move)? {
            return Ok(None);
        }
        self.legal_move_map().map(Some)
    }

    #[inline]
    pub fn is_in_check(&self) -> bool {
        matches!(
            self.status,
            GameStatus::Check(_) | GameStatus::Checkmate { .. }
        )
    }

    /// True when moving `from -> to` would promote, so a piece choice is needed.
    #[inline]
    pub fn is_promotion_move(&self, from: Position, to: Position) -> bool {
        is_promotion(&self.board, from, to)
    }

    /// Validates and applies a move for the side to move.
    ///
    /// `promotion` falls back to the configured default promotion. Declined
    /// moves return a recoverable error and leave the game untouched.
    pub fn apply_move(
        &mut self,
        from: Position,
        to: Position,
        promotion: Option<PieceKind>,
    ) -> Result<MoveOutcome, ChessErrors> {
        let result = self.validated_move(from, to, promotion);
        match &result {
            Ok(outcome) => debug!(mv = %outcome.mv, status = ?outcome.status, "move applied"),
            Err(err) if err.is_recoverable() => debug!(%from, %to, %err, "move declined"),
            Err(err) => error!(%from, %to, %err, "move aborted"),
        }
        result
    }

    fn validated_move(
        &mut self,
        from: Position,
        to: Position,
        promotion: Option<PieceKind>,
    ) -> Result<MoveOutcome, ChessErrors> {
        if self.is_game_over() {
            return Err(ChessErrors::GameOver);
        }
        if !self.legal_moves_for(from)?.contains(&to) {
            return Err(ChessErrors::IllegalMove { from, to });
        }
        self.play(from, to, promotion.or(self.default_promotion))
    }

    /// Applies a move already known to be legal.
    pub(crate) fn play(
        &mut self,
        from: Position,
        to: Position,
        promotion: Option<PieceKind>,
    ) -> Result<MoveOutcome, ChessErrors> {
        let mover = self.side_to_move;
        let mut next = self.board;

        let mv = describe_move(&next, from, to, promotion)?;
        let captured = execute_move(&mut next, &mv)?;
        let checkers = update_after_move(&mut next, mover, &mv)?;

        let opponent = mover.opposite();
        let status = evaluate_status(&next, opponent, !checkers.is_empty())?;

        self.board = next;
        self.side_to_move = opponent;
        if mv.moved_piece == PieceKind::Pawn || mv.is_capture() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if mover == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.status = status;

        if status.is_terminal() {
            info!(?status, "game over");
        }

        Ok(MoveOutcome {
            mv,
            captured,
            checkers,
            status,
        })
    }
}

fn evaluate_status(board: &Board, side: Color, in_check: bool) -> Result<GameStatus, ChessErrors> {
    let can_move = has_legal_move(board, side)?;
    Ok(match (can_move, in_check) {
        (true, true) => GameStatus::Check(side),
        (true, false) => GameStatus::Ongoing,
        (false, true) => GameStatus::Checkmate {
            winner: side.opposite(),
        },
        (false, false) => GameStatus::Stalemate,
    })
}
