//! CLI frontend for the Snake & Ladder engine.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "snl",
    about = "Snake & Ladder: simulate single- and two-player games",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one game and print the turn log
    Play {
        /// Game mode: single or two-player
        #[arg(short, long, default_value = "single")]
        mode: String,

        /// RNG seed for a reproducible game (random if omitted)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Stop after this many turns without a winner
        #[arg(long, default_value_t = snl_engine::DEFAULT_MAX_TURNS, conflicts_with = "unbounded")]
        max_turns: u64,

        /// Play until someone wins, however long it takes
        #[arg(long)]
        unbounded: bool,

        /// Print the result as JSON instead of the turn log
        #[arg(long)]
        json: bool,
    },

    /// Play many games on consecutive seeds and summarize them
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u64,

        /// Game mode: single or two-player
        #[arg(short, long, default_value = "single")]
        mode: String,

        /// Seed of the first game
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Stop each game after this many turns without a winner
        #[arg(long, default_value_t = snl_engine::DEFAULT_MAX_TURNS)]
        max_turns: u64,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            mode,
            seed,
            max_turns,
            unbounded,
            json,
        } => commands::play::run(&mode, seed, (!unbounded).then_some(max_turns), json),
        Commands::Simulate {
            games,
            mode,
            seed,
            max_turns,
        } => commands::simulate::run(&mode, games, seed, max_turns),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
