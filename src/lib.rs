//! Console games (workspace facade crate).
//!
//! Re-exports the workspace crates under short paths
//! (`console_games::{core, engine, input, term, types}`) and holds the pieces
//! shared by the three binaries: command-line flags, file logging and the
//! terminal session wrapper.

pub mod app;
pub mod cli;
pub mod logging;

pub use console_games_core as core;
pub use console_games_engine as engine;
pub use console_games_input as input;
pub use console_games_term as term;
pub use console_games_types as types;
