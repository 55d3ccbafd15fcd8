use std::io;
use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use mailbox_chess::chess_errors::ChessErrors;
use mailbox_chess::game_state::chess_types::Color;
use mailbox_chess::game_state::game_config::{GameConfig, PlayerKind};
use mailbox_chess::game_state::game_state::{GameState, GameStatus};
use mailbox_chess::players::player_random::RandomPlayer;
use mailbox_chess::players::player_terminal::TerminalPlayer;
use mailbox_chess::players::player_trait::Player;
use mailbox_chess::utils::render_game_state::render_game_state;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut config = GameConfig::default();
    for arg in std::env::args().skip(1) {
        if let Err(err) = config.apply_argument(&arg) {
            eprintln!("{err}");
            eprintln!("options: StartFen= DefaultPromotion= White= Black= Seed= MaxPlies=");
            return ExitCode::FAILURE;
        }
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "session ended with an error");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// One player per side; two human sides share a single terminal player so
/// that stdin is locked once.
fn build_players(config: &GameConfig) -> (Vec<Box<dyn Player>>, [usize; 2]) {
    let mut players: Vec<Box<dyn Player>> = Vec::new();
    let mut seats = [0usize; 2];
    let mut human_seat = None;

    for color in [Color::White, Color::Black] {
        seats[color.index()] = match config.player(color) {
            PlayerKind::Human => *human_seat.get_or_insert_with(|| {
                players.push(Box::new(TerminalPlayer::new(
                    io::stdin().lock(),
                    io::stdout(),
                )));
                players.len() - 1
            }),
            PlayerKind::Random => {
                // Distinct streams per side when both are random.
                let seed = config.seed.map(|seed| seed.wrapping_add(color.index() as u64));
                players.push(Box::new(RandomPlayer::new(seed)));
                players.len() - 1
            }
        };
    }

    (players, seats)
}

fn run(config: &GameConfig) -> Result<(), ChessErrors> {
    let mut game = GameState::with_config(config)?;
    let (mut players, seats) = build_players(config);
    info!(
        white = players[seats[0]].name(),
        black = players[seats[1]].name(),
        fen = %game.get_fen(),
        "session started"
    );

    let mut plies = 0u32;
    loop {
        println!("{}\n", render_game_state(&game));
        if game.is_game_over() {
            break;
        }
        if config.max_plies.is_some_and(|limit| plies >= limit) {
            warn!(plies, "ply limit reached");
            println!("stopped after {plies} plies");
            return Ok(());
        }

        let side = game.side_to_move();
        let player = &mut players[seats[side.index()]];
        let request = player.choose_move(&game)?;
        let promotion = if game.is_promotion_move(request.from, request.to)
            && game.default_promotion().is_none()
            && game
                .legal_moves_for(request.from)
                .is_ok_and(|dests| dests.contains(&request.to))
        {
            Some(player.choose_promotion(&game, request)?)
        } else {
            None
        };

        match game.apply_move(request.from, request.to, promotion) {
            Ok(outcome) => {
                plies += 1;
                println!("{side} plays {}", outcome.mv);
                if let GameStatus::Check(color) = outcome.status {
                    println!("{color} is in check");
                }
            }
            Err(err) if err.is_recoverable() => player.move_declined(request, &err),
            Err(err) => return Err(err),
        }
    }

    match game.status() {
        GameStatus::Checkmate { winner } => println!("checkmate, {winner} wins"),
        GameStatus::Stalemate => println!("stalemate, draw"),
        GameStatus::Ongoing | GameStatus::Check(_) => {}
    }
    Ok(())
}
