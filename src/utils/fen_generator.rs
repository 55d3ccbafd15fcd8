use crate::game_state::board::Board;
use crate::game_state::chess_rules::KING_START_FILE;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::moves::king_moves::CastlingSide;

pub fn generate_fen(game_state: &GameState) -> String {
    let board = game_state.board();
    let side_to_move = match game_state.side_to_move() {
        Color::White => "w",
        Color::Black => "b",
    };

    format!(
        "{} {} {} {} {} {}",
        generate_board_field(board),
        side_to_move,
        generate_castling_field(board),
        generate_en_passant_field(board),
        game_state.halfmove_clock(),
        game_state.fullmove_number()
    )
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for rank in (1..=8u8).rev() {
        let mut empty_count = 0u8;

        for file in 1..=8u8 {
            match board.occupant_at(Position::at(file, rank)) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece_to_fen_char(piece.color, piece.kind));
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 1 {
            out.push('/');
        }
    }

    out
}

pub fn piece_to_fen_char(color: Color, kind: PieceKind) -> char {
    let base = match kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };

    match color {
        Color::White => base.to_ascii_uppercase(),
        Color::Black => base,
    }
}

fn generate_castling_field(board: &Board) -> String {
    let mut out = String::new();

    for color in [Color::White, Color::Black] {
        let rank = color.home_rank();
        let king_ready = board
            .occupant_at(Position::at(KING_START_FILE, rank))
            .is_some_and(|p| p.is(PieceKind::King, color) && !p.has_moved);
        if !king_ready {
            continue;
        }

        for (side, ch) in [(CastlingSide::Kingside, 'k'), (CastlingSide::Queenside, 'q')] {
            let rook_ready = board
                .occupant_at(Position::at(side.rook_file(), rank))
                .is_some_and(|p| p.is(PieceKind::Rook, color) && !p.has_moved);
            if rook_ready {
                out.push(match color {
                    Color::White => ch.to_ascii_uppercase(),
                    Color::Black => ch,
                });
            }
        }
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}

fn generate_en_passant_field(board: &Board) -> String {
    board
        .pieces()
        .find(|p| p.kind == PieceKind::Pawn && p.en_passant_vulnerable)
        .and_then(|pawn| pawn.position.translate(0, -pawn.color.pawn_direction()).ok())
        .map_or_else(|| "-".to_owned(), |square| square.to_string())
}
