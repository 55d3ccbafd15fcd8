//! Mailbox board index.
//!
//! `Board` is an 8×8 grid of optional pieces. It answers occupancy and king
//! location queries and applies raw cell mutations with no rule checking; all
//! legality lives in `move_generation`. The grid is a plain `Copy` value, so
//! hypothetical moves are tested on a copy and the caller's board is never
//! perturbed.

use crate::chess_errors::{ChessErrors, InvariantViolation};
use crate::game_state::chess_rules::BACK_RANK;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    // [rank - 1][file - 1]
    cells: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            cells: [[None; 8]; 8],
        }
    }

    /// Standard 32-piece starting layout.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            for (idx, kind) in BACK_RANK.iter().enumerate() {
                let pos = Position::at(idx as u8 + 1, color.home_rank());
                board.set_cell(pos, Some(Piece::new(*kind, color, pos)));
            }
            for file in 1..=8 {
                let pos = Position::at(file, color.pawn_start_rank());
                board.set_cell(pos, Some(Piece::new(PieceKind::Pawn, color, pos)));
            }
        }
        board
    }

    #[inline]
    pub fn occupant_at(&self, pos: Position) -> Option<&Piece> {
        self.cells[pos.rank() as usize - 1][pos.file() as usize - 1].as_ref()
    }

    #[inline]
    pub fn occupant_at_mut(&mut self, pos: Position) -> Option<&mut Piece> {
        self.cells[pos.rank() as usize - 1][pos.file() as usize - 1].as_mut()
    }

    /// Occupant lookup on raw coordinates, guarded against off-board input.
    pub fn occupant_at_coords(&self, file: i8, rank: i8) -> Result<Option<&Piece>, ChessErrors> {
        let pos = Position::new(file, rank)?;
        Ok(self.occupant_at(pos))
    }

    /// Raw cell write. The stored piece's position is rewritten to `pos` so
    /// the piece and its cell never disagree.
    pub fn set_cell(&mut self, pos: Position, occupant: Option<Piece>) {
        let occupant = occupant.map(|mut piece| {
            piece.position = pos;
            piece
        });
        self.cells[pos.rank() as usize - 1][pos.file() as usize - 1] = occupant;
    }

    /// Empties the cell and hands back whatever was there.
    pub fn take(&mut self, pos: Position) -> Option<Piece> {
        self.cells[pos.rank() as usize - 1][pos.file() as usize - 1].take()
    }

    /// Moves whatever stands on `from` to `to`, returning the displaced
    /// occupant of `to`.
    pub fn relocate(&mut self, from: Position, to: Position) -> Option<Piece> {
        let moving = self.take(from);
        let displaced = self.take(to);
        self.set_cell(to, moving);
        displaced
    }

    #[inline]
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.occupant_at(pos).is_none()
    }

    #[inline]
    pub fn color_at(&self, pos: Position) -> Option<Color> {
        self.occupant_at(pos).map(|p| p.color)
    }

    /// All pieces, rank 1 to 8 and file 1 to 8 within a rank.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.cells.iter().flat_map(|row| row.iter().flatten())
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces().filter(move |p| p.color == color)
    }

    pub fn pieces_mut(&mut self) -> impl Iterator<Item = &mut Piece> + '_ {
        self.cells.iter_mut().flat_map(|row| row.iter_mut().flatten())
    }

    /// Location of the king of `color`. A missing king is an engine defect.
    pub fn find_king(&self, color: Color) -> Result<Position, ChessErrors> {
        self.pieces()
            .find(|p| p.is(PieceKind::King, color))
            .map(|p| p.position)
            .ok_or(InvariantViolation::KingMissing(color).into())
    }

    /// True iff a piece not of `color` attacks any of `squares`.
    pub fn is_threatened(&self, color: Color, squares: &[Position]) -> bool {
        legal_move_checks::is_threatened(self, color, squares)
    }

    /// Checks the structural invariants: one king per color and every piece
    /// stored where its cell says it is.
    pub fn validate(&self) -> Result<(), ChessErrors> {
        for color in [Color::White, Color::Black] {
            let kings = self
                .pieces_of(color)
                .filter(|p| p.kind == PieceKind::King)
                .count();
            match kings {
                0 => return Err(InvariantViolation::KingMissing(color).into()),
                1 => {}
                _ => return Err(InvariantViolation::DuplicateKing(color).into()),
            }
        }
        for pos in Position::all() {
            if let Some(piece) = self.occupant_at(pos) {
                if piece.position != pos {
                    return Err(InvariantViolation::MisplacedPiece(pos).into());
                }
            }
        }
        Ok(())
    }
}
