//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules and state of the three games. It has
//! **no dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical secrets and food placement
//! - **Testable**: Every rule is exercised by unit and property tests
//! - **Portable**: Drivers decide how input arrives and how state is shown
//!
//! # Module Structure
//!
//! - [`tictactoe`]: 3x3 board, move validation, win and tie detection
//! - [`hangman`]: secret word, revealed mask, sorted guessed letters, tries
//! - [`snake`]: body movement, wall and self collision, growth, food placement
//! - [`rng`]: small LCG used for word selection and food sampling
//!
//! # Example
//!
//! ```
//! use console_games_core::tictactoe::{GameStatus, TicTacToe};
//! use console_games_core::types::Player;
//!
//! let mut game = TicTacToe::new();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0)] {
//!     game.play(row, col).unwrap();
//! }
//! assert_eq!(game.play(0, 2), Ok(GameStatus::Won(Player::X)));
//! ```

pub mod hangman;
pub mod rng;
pub mod snake;
pub mod tictactoe;

pub use console_games_types as types;

// Re-export commonly used types for convenience
pub use hangman::{GuessOutcome, Hangman, HangmanConfig, HangmanStatus};
pub use rng::SimpleRng;
pub use snake::{OverReason, SnakeConfig, SnakeGame, SnakeStatus, Tick};
pub use tictactoe::{GameStatus, MoveRejection, TicTacToe};
