//! Two-player tic-tac-toe on one keyboard.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use console_games::app;
use console_games::cli::TicTacToeArgs;
use console_games::engine::{TicTacToeOutcome, TicTacToeSession};
use console_games::input::prompt_key;
use console_games::logging;
use console_games::term::TicTacToeView;

fn main() -> Result<()> {
    let args = TicTacToeArgs::parse();
    logging::init(args.log_file.as_deref())?;
    info!("starting tic-tac-toe");

    let mut session = TicTacToeSession::new();
    let outcome = app::play(&mut session, TicTacToeView, prompt_key)?;

    match outcome {
        TicTacToeOutcome::Won(player) => println!("Player {} wins!", player.symbol()),
        TicTacToeOutcome::Tied => println!("It's a tie!"),
        TicTacToeOutcome::Abandoned => println!("Game abandoned."),
    }
    Ok(())
}
