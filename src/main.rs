//! Encircle CLI - resolve, check and analyse territory on text boards.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{Parser, Subcommand};
use encircle::PlayerId;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Encircle - territory resolution for enclosure grid games
#[derive(Parser, Debug)]
#[command(name = "encircle")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log engine activity to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve territory on a board file and print the result
    Resolve {
        /// Board file in text notation
        #[arg(required = true)]
        board: std::path::PathBuf,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Verify the territory marks in a board file
    Check {
        /// Board file in text notation, with territory marks
        #[arg(required = true)]
        board: std::path::PathBuf,
    },

    /// Rank every placement for a player by territory swing
    Moves {
        /// Board file in text notation
        #[arg(required = true)]
        board: std::path::PathBuf,

        /// Player to move (A or B)
        #[arg(short, long)]
        player: PlayerId,

        /// Show only the best N moves (default: 10)
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,

        /// Parallel threads (default: CPU count)
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Play many random games in parallel and aggregate ownership statistics
    Sweep {
        /// Number of games to run (default: 1000)
        #[arg(short, long, default_value = "1000")]
        games: u64,

        /// Board side length (default: 10)
        #[arg(long, default_value = "10")]
        size: u16,

        /// Placements per game (default: 40)
        #[arg(short, long, default_value = "40")]
        moves: u32,

        /// Starting seed (increments for each game)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Parallel threads (default: CPU count)
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Show progress bar
        #[arg(short, long)]
        progress: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let result = match args.command {
        Commands::Resolve { board, format } => cli::resolve::execute(&board, format),

        Commands::Check { board } => cli::check::execute(&board),

        Commands::Moves {
            board,
            player,
            top,
            threads,
            format,
        } => cli::moves::execute(&board, player, top, threads, format),

        Commands::Sweep {
            games,
            size,
            moves,
            seed,
            threads,
            format,
            progress,
        } => cli::sweep::execute(games, size, moves, seed, threads, format, progress),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
