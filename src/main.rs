//! Mancala-Rust: a 14-pit sowing game engine.
//!
//! ## Usage
//!
//! - `mancala-rust` - Show an annotated engine-vs-engine game
//! - `mancala-rust protocol` - Start the text protocol on stdin/stdout
//! - `mancala-rust selfplay` - Play a batch of games and report the results
//!
//! Set `RUST_LOG=debug` to see search details on stderr.

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use mancala_rust::board::Side;
use mancala_rust::constants::MAX_GAME_LEN;
use mancala_rust::game::Game;
use mancala_rust::playout::random_move;
use mancala_rust::position::Outcome;
use mancala_rust::protocol::TextEngine;
use mancala_rust::search::{DecisionEngine, Difficulty};

/// Mancala-Rust: a 14-pit sowing game engine
#[derive(Parser)]
#[command(name = "mancala-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Engine level: easy, medium or hard
    #[arg(short, long, global = true, default_value = "medium")]
    difficulty: Difficulty,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the text protocol server for use with a front-end
    Protocol,
    /// Play a batch of games with the engine as side B
    Selfplay {
        /// Number of games to play
        #[arg(short, long, default_value_t = 10)]
        games: usize,
        /// Who plays side A
        #[arg(short, long, value_enum, default_value_t = Opponent::Random)]
        opponent: Opponent,
        /// Seed for the random opponent
        #[arg(short, long, default_value_t = 1)]
        seed: u64,
    },
    /// Play one annotated engine-vs-engine game
    Demo,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Opponent {
    /// The same engine at the same level
    Engine,
    /// Uniformly random legal moves
    Random,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let engine = DecisionEngine::new(cli.difficulty);

    match cli.command {
        Some(Commands::Protocol) => TextEngine::with_difficulty(cli.difficulty).run()?,
        Some(Commands::Selfplay {
            games,
            opponent,
            seed,
        }) => run_selfplay(engine, games, opponent, seed),
        Some(Commands::Demo) | None => run_demo(engine),
    }
    Ok(())
}

fn run_demo(engine: DecisionEngine) {
    println!("Mancala-Rust: engine vs engine at {} level\n", engine.difficulty());

    let mut game = Game::new();
    println!("{}", game.state());
    while !game.is_finished() && game.history().len() < MAX_GAME_LEN {
        let side = game.turn();
        let Some(decision) = engine.choose_move(game.state(), side) else {
            break;
        };
        if game.apply_move(decision.pit).is_err() {
            break;
        }
        println!("{side} plays {}: {}", decision.pit, decision.explanation);
        println!("{}", game.state());
    }
    println!("{} moves played", game.history().len());
}

fn run_selfplay(engine: DecisionEngine, games: usize, opponent: Opponent, seed: u64) {
    let mut rng = fastrand::Rng::with_seed(seed);
    let (mut wins, mut losses, mut ties, mut unfinished) = (0, 0, 0, 0);

    for _ in 0..games {
        let mut game = Game::new();
        while !game.is_finished() && game.history().len() < MAX_GAME_LEN {
            let side = game.turn();
            let pit = if side == Side::A && opponent == Opponent::Random {
                random_move(game.state(), &mut rng)
            } else {
                engine.choose_move(game.state(), side).map(|d| d.pit)
            };
            let Some(pit) = pit else {
                break;
            };
            if game.apply_move(pit).is_err() {
                break;
            }
        }
        match game.outcome() {
            Some(Outcome::Winner(Side::B)) => wins += 1,
            Some(Outcome::Winner(Side::A)) => losses += 1,
            Some(Outcome::Tie) => ties += 1,
            None => unfinished += 1,
        }
    }

    println!("Engine ({}) as side B over {games} games:", engine.difficulty());
    println!("  wins {wins}, losses {losses}, ties {ties}, unfinished {unfinished}");
}
