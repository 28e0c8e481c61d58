//! Loop drivers for the three games.
//!
//! A session wraps one rule engine with what the player sees between
//! moves (the line being typed, the last feedback message). [`run`] drives
//! any session through the fixed turn order:
//!
//! render -> await input -> validate -> mutate -> check terminal -> loop or halt
//!
//! Input and output are collaborators behind the [`InputSource`] and
//! [`Renderer`] traits, so sessions run headless in tests and inside a
//! raw-mode terminal in the binaries.

pub mod driver;
pub mod hangman;
pub mod input;
pub mod prompt;
pub mod snake;
pub mod tictactoe;

pub use console_games_core as core;
pub use console_games_types as types;

pub use driver::{run, Renderer, Session};
pub use hangman::{HangmanFeedback, HangmanOutcome, HangmanSession};
pub use input::{EndOfInput, InputSource, MalformedInput, ScriptedInput};
pub use prompt::{LineBuffer, PromptEvent};
pub use snake::{SnakeOutcome, SnakeSession};
pub use tictactoe::{TicTacToeFeedback, TicTacToeOutcome, TicTacToeSession};
