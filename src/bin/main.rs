use std::io::{self, Write};
use std::{fs, process};

use board_game_traits::GameResult;
use clap::{Arg, Command};
use log::{error, info};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use takbot::game::{GameState, PlayerKind, TurnOutcome};
use takbot::game_log;
use takbot::position::{IllegalMove, TakError};

const PLAYER_NAMES: [&str; 8] = [
    "Human",
    "Random",
    "Selfish",
    "Attacker",
    "SelfishAttacker",
    "Gatherer",
    "ClusterBuilder",
    "ClusterBuilderGatherer",
];

fn main() -> io::Result<()> {
    let matches = Command::new("TakBot")
        .version("0.1")
        .about("Play 5x5 Tak in the terminal, against humans or minimax engines")
        .arg(
            Arg::new("player1")
                .long("player1")
                .env("PLAYER1")
                .help("Who controls player 1, the white player who moves first")
                .num_args(1)
                .value_parser(PLAYER_NAMES)
                .default_value("Human"),
        )
        .arg(
            Arg::new("depth1")
                .long("depth1")
                .env("DEPTH1")
                .help("Search depth in plies for player 1. Ignored for Human and Random players")
                .num_args(1)
                .default_value("2")
                .value_parser(clap::value_parser!(u16).range(1..=5)),
        )
        .arg(
            Arg::new("player2")
                .long("player2")
                .env("PLAYER2")
                .help("Who controls player 2, the black player")
                .num_args(1)
                .value_parser(PLAYER_NAMES)
                .default_value("Selfish"),
        )
        .arg(
            Arg::new("depth2")
                .long("depth2")
                .env("DEPTH2")
                .help("Search depth in plies for player 2. Ignored for Human and Random players")
                .num_args(1)
                .default_value("2")
                .value_parser(clap::value_parser!(u16).range(1..=5)),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .env("SEED")
                .help("Seed for the engines' random number generator")
                .num_args(1)
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("logfile")
                .short('l')
                .long("logfile")
                .env("LOGFILE")
                .value_name("takbot.log")
                .help("Name of debug logfile")
                .num_args(1),
        )
        .arg(
            Arg::new("resultLog")
                .long("result-log")
                .env("RESULT_LOG")
                .value_name("result.txt")
                .help("Write the moves and result of the game to this file when it ends")
                .num_args(1),
        )
        .get_matches();

    let log_dispatcher = fern::Dispatch::new().format(|out, message, record| {
        out.finish(format_args!(
            "{}[{}][{}] {}",
            chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
            record.target(),
            record.level(),
            message
        ))
    });

    let logger = if let Some(log_file) = matches.get_one::<String>("logfile") {
        log_dispatcher
            .chain(
                fern::Dispatch::new()
                    .level(log::LevelFilter::Debug)
                    .chain(fern::log_file(log_file)?),
            )
            .chain(
                fern::Dispatch::new()
                    .level(log::LevelFilter::Warn)
                    .chain(io::stderr()),
            )
    } else {
        log_dispatcher
            .level(log::LevelFilter::Warn)
            .chain(io::stderr())
    };
    logger
        .apply()
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;

    let player_kind = |player_id: &str, depth_id: &str| -> PlayerKind {
        let name = matches
            .get_one::<String>(player_id)
            .map(String::as_str)
            .unwrap_or("Human");
        let depth = matches.get_one::<u16>(depth_id).copied().unwrap_or(2);
        PlayerKind::from_name(name, depth).unwrap_or_else(|err| {
            eprintln!("{}", err);
            process::exit(1)
        })
    };
    let mut state = GameState::new(
        player_kind("player1", "depth1"),
        player_kind("player2", "depth2"),
    );

    let mut rng = match matches.get_one::<u64>("seed") {
        Some(seed) => SmallRng::seed_from_u64(*seed),
        None => SmallRng::from_entropy(),
    };

    println!("Moves are entered as F(r,c), S(r,c), C(r,c), M(r,c)D or M(r,c)Dn[p].");
    println!(
        "(0,0) is the bottom left corner. D is one of + (north), - (south), < (west), > (east)."
    );
    let result = play_game(&mut state, &mut rng)?;

    match result {
        Some(result) => {
            println!("{:?}", state);
            println!("{}", game_log::result_string(Some(result)));
        }
        None => println!("Game aborted after {} plies.", state.plies()),
    }
    info!("Game finished: {}", game_log::result_string(result));
    info!("Move list: {}", state.history().join(" "));

    if let Some(path) = matches.get_one::<String>("resultLog") {
        let mut file = fs::File::create(path)?;
        game_log::write_result_log(&mut file, state.history(), result)?;
    }
    Ok(())
}

/// Play until the game ends, or until the human players stop sending input.
fn play_game(state: &mut GameState, rng: &mut SmallRng) -> io::Result<Option<GameResult>> {
    let mut input = String::new();
    loop {
        println!("{:?}", state);
        input.clear();
        let engine_to_move = state.next_player().kind().is_engine();
        if !engine_to_move {
            print!("Player {} move: ", state.side_to_move());
            io::stdout().flush()?;
            if io::stdin().read_line(&mut input)? == 0 {
                return Ok(None);
            }
        }

        match state.make_move(input.trim(), rng) {
            Ok(TurnOutcome { mv, result }) => {
                println!("{}: {}", !state.side_to_move(), mv.describe());
                if result.is_some() {
                    return Ok(result);
                }
            }
            Err(TakError::IllegalMove(IllegalMove::NoLegalMoves)) if engine_to_move => {
                error!("{} has no legal moves", state.side_to_move());
                return Ok(None);
            }
            Err(err) => println!("{}, try again.", err),
        }
    }
}
