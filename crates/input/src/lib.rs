//! Terminal input module.
//!
//! Maps `crossterm` key events into the games' input vocabulary
//! ([`crate::types::PromptKey`], [`crate::types::SnakeCommand`]) and provides
//! a blocking [`TerminalInput`] source for the loop driver.

pub mod map;
pub mod terminal;

pub use console_games_engine as engine;
pub use console_games_types as types;

pub use map::{prompt_key, should_quit, snake_command};
pub use terminal::{wait_for_key, TerminalInput};
