//! FEN-to-GameState parser.
//!
//! Builds a board from a Forsyth-Edwards Notation string. Castling rights and
//! the en-passant square have no storage of their own here: they are mapped
//! onto the `has_moved` flags of kings and rooks and onto the vulnerability
//! flag of the pawn that just double-stepped. Pawns off their start rank are
//! marked as moved.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::moves::king_moves::CastlingSide;
use crate::utils::algebraic::algebraic_to_position;

fn invalid(message: impl Into<String>) -> ChessErrors {
    ChessErrors::InvalidFen(message.into())
}

pub fn parse_fen(fen: &str) -> Result<GameState, ChessErrors> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;
    let halfmove_part = parts.next().unwrap_or("0");
    let fullmove_part = parts.next().unwrap_or("1");

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let mut board = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;
    apply_castling_rights(&mut board, castling_part)?;
    apply_en_passant_square(&mut board, side_to_move, en_passant_part)?;

    let halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| invalid(format!("bad halfmove clock {halfmove_part}")))?;
    let fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| invalid(format!("bad fullmove number {fullmove_part}")))?;

    GameState::from_setup(board, side_to_move, halfmove_clock, fullmove_number)
}

fn parse_board(board_part: &str) -> Result<Board, ChessErrors> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut board = Board::empty();
    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 8 - fen_rank_idx as u8;
        let mut file = 1u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(format!("bad empty-square count '{ch}'")));
                }
                file += empty_count as u8;
                if file > 9 {
                    return Err(invalid(format!("rank {rank} has too many files")));
                }
                continue;
            }

            let (color, kind) = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(format!("bad piece character '{ch}'")))?;
            if file > 8 {
                return Err(invalid(format!("rank {rank} has too many files")));
            }

            let pos = Position::new(file as i8, rank as i8)?;
            let mut piece = Piece::new(kind, color, pos);
            piece.has_moved = match kind {
                PieceKind::Pawn => rank != color.pawn_start_rank(),
                // Re-armed by the castling field.
                PieceKind::King | PieceKind::Rook => true,
                _ => false,
            };
            board.set_cell(pos, Some(piece));
            file += 1;
        }

        if file != 9 {
            return Err(invalid(format!("rank {rank} does not sum to 8 files")));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessErrors> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(format!("bad side to move {side_part}"))),
    }
}

fn apply_castling_rights(board: &mut Board, castling_part: &str) -> Result<(), ChessErrors> {
    if castling_part == "-" {
        return Ok(());
    }

    for ch in castling_part.chars() {
        let (color, side) = match ch {
            'K' => (Color::White, CastlingSide::Kingside),
            'Q' => (Color::White, CastlingSide::Queenside),
            'k' => (Color::Black, CastlingSide::Kingside),
            'q' => (Color::Black, CastlingSide::Queenside),
            _ => return Err(invalid(format!("bad castling character '{ch}'"))),
        };

        let rank = color.home_rank();
        let king_square = Position::at(KING_START_FILE, rank);
        let rook_square = Position::at(side.rook_file(), rank);
        let in_place = board
            .occupant_at(king_square)
            .is_some_and(|p| p.is(PieceKind::King, color))
            && board
                .occupant_at(rook_square)
                .is_some_and(|p| p.is(PieceKind::Rook, color));
        if !in_place {
            return Err(invalid(format!(
                "castling right '{ch}' without king and rook on their home squares"
            )));
        }

        for square in [king_square, rook_square] {
            if let Some(piece) = board.occupant_at_mut(square) {
                piece.has_moved = false;
            }
        }
    }

    Ok(())
}

fn apply_en_passant_square(
    board: &mut Board,
    side_to_move: Color,
    en_passant_part: &str,
) -> Result<(), ChessErrors> {
    if en_passant_part == "-" {
        return Ok(());
    }

    let target = algebraic_to_position(en_passant_part)?;
    let mover = side_to_move.opposite();
    let pawn_square = target.translate(0, mover.pawn_direction())?;
    let expected_target_rank = (mover.pawn_start_rank() as i8 + mover.pawn_direction()) as u8;

    match board.occupant_at_mut(pawn_square) {
        Some(pawn)
            if pawn.is(PieceKind::Pawn, mover) && target.rank() == expected_target_rank =>
        {
            pawn.en_passant_vulnerable = true;
            Ok(())
        }
        _ => Err(invalid(format!(
            "en-passant square {en_passant_part} has no pawn that just double-stepped"
        ))),
    }
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, kind))
}
