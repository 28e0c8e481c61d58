//! Command-line flags for the game binaries.

use std::path::PathBuf;

use clap::{Args, Parser};

use crate::core::SimpleRng;
use crate::types::{SNAKE_HEIGHT, SNAKE_WIDTH};

/// Flags every game accepts.
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Fixed RNG seed (defaults to one derived from the system clock)
    #[arg(long)]
    pub seed: Option<u32>,

    /// Write tracing output to this file (filter with RUST_LOG)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl CommonArgs {
    /// The seed to play with: the `--seed` value or a clock-derived one.
    pub fn seed(&self) -> u32 {
        self.seed.unwrap_or_else(SimpleRng::clock_seed)
    }
}

/// Tic-tac-toe has no randomness, so it only takes the log flag.
#[derive(Parser, Debug)]
#[command(name = "tictactoe", about = "Two-player tic-tac-toe in the terminal", version)]
pub struct TicTacToeArgs {
    /// Write tracing output to this file (filter with RUST_LOG)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Parser, Debug)]
#[command(name = "hangman", about = "Guess the hidden word one letter at a time", version)]
pub struct HangmanArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Parser, Debug)]
#[command(name = "snake", about = "Turn-based snake: every key press is one step", version)]
pub struct SnakeArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Board width in cells
    #[arg(long, default_value_t = SNAKE_WIDTH, value_parser = clap::value_parser!(u16).range(5..=60))]
    pub width: u16,

    /// Board height in cells
    #[arg(long, default_value_t = SNAKE_HEIGHT, value_parser = clap::value_parser!(u16).range(5..=40))]
    pub height: u16,
}
