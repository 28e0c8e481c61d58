//! Turn-based snake: the snake moves one cell per key press.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use console_games::app;
use console_games::cli::SnakeArgs;
use console_games::core::{SnakeConfig, SnakeGame};
use console_games::engine::SnakeSession;
use console_games::input::snake_command;
use console_games::logging;
use console_games::term::SnakeView;

fn main() -> Result<()> {
    let args = SnakeArgs::parse();
    logging::init(args.common.log_file.as_deref())?;

    let seed = args.common.seed();
    info!(seed, width = args.width, height = args.height, "starting snake");
    let config = SnakeConfig::default().with_size(args.width, args.height);
    let mut session = SnakeSession::new(SnakeGame::new(config, seed));

    let outcome = app::play(&mut session, SnakeView::default(), snake_command)?;

    println!(
        "{} Final score: {} (length {})",
        outcome.reason.message(),
        outcome.score,
        outcome.length
    );
    Ok(())
}
