//! Hangman with a word drawn from the built-in vocabulary.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use console_games::app;
use console_games::cli::HangmanArgs;
use console_games::core::{Hangman, HangmanConfig, SimpleRng};
use console_games::engine::{HangmanOutcome, HangmanSession};
use console_games::input::prompt_key;
use console_games::logging;
use console_games::term::HangmanView;

fn main() -> Result<()> {
    let args = HangmanArgs::parse();
    logging::init(args.common.log_file.as_deref())?;

    let seed = args.common.seed();
    info!(seed, "starting hangman");
    let mut rng = SimpleRng::new(seed);
    let mut session = HangmanSession::new(Hangman::random(&mut rng, HangmanConfig::default()));

    let outcome = app::play(&mut session, HangmanView, prompt_key)?;

    let secret = session.game().secret();
    match outcome {
        HangmanOutcome::Won => println!("You guessed it: {secret}"),
        HangmanOutcome::Lost | HangmanOutcome::Abandoned => println!("The word was: {secret}"),
    }
    Ok(())
}
