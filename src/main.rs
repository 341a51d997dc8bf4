//! Engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release -- --games 10 --depth 3`
//! `RUST_LOG=debug cargo run --release -- --opponent alpha-beta --verbose`

use clap::{Parser, ValueEnum};

use alice_chess::engines::engine_alpha_beta::AlphaBetaEngine;
use alice_chess::engines::engine_random::RandomEngine;
use alice_chess::engines::engine_trait::Engine;
use alice_chess::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};
use alice_chess::utils::game_session::{SessionConfig, VictoryRule};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Opponent {
    Random,
    AlphaBeta,
}

#[derive(Debug, Parser)]
#[command(name = "alice_chess")]
#[command(about = "Play Alice chess engines against each other", long_about = None)]
struct Args {
    /// Number of games in the series
    #[arg(long, default_value_t = 4)]
    games: u16,

    /// Search depth of the alpha-beta player
    #[arg(short, long, default_value_t = 3)]
    depth: u8,

    /// Root search threads of the alpha-beta player
    #[arg(short, long, default_value_t = 1)]
    threads: usize,

    /// Base seed for openings and the random player
    #[arg(short, long, default_value_t = 1234)]
    seed: u64,

    /// Ply cap per game
    #[arg(long, default_value_t = 200)]
    max_plies: u16,

    /// Second player
    #[arg(long, value_enum, default_value_t = Opponent::Random)]
    opponent: Opponent,

    /// End games only when a king is captured
    #[arg(long)]
    capture_only: bool,

    /// Log every game (same as RUST_LOG=info)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let default_filter = if args.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let depth = args.depth;
    let threads = args.threads;
    let player1 =
        move || -> Box<dyn Engine> { Box::new(AlphaBetaEngine::new(depth).with_threads(threads)) };
    let opponent = args.opponent;
    let seed = args.seed;
    let player2 = move || -> Box<dyn Engine> {
        match opponent {
            Opponent::Random => Box::new(RandomEngine::with_seed(seed)),
            Opponent::AlphaBeta => Box::new(AlphaBetaEngine::new(depth)),
        }
    };

    let victory_rule = if args.capture_only {
        VictoryRule::CaptureOnly
    } else {
        VictoryRule::CaptureOrCheck
    };
    let stats = play_engine_match_series(
        player1,
        player2,
        &MatchSeriesConfig {
            games: args.games,
            base_seed: args.seed,
            per_game: MatchConfig {
                max_plies: args.max_plies,
                session: SessionConfig { victory_rule },
                ..MatchConfig::default()
            },
        },
    )?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
