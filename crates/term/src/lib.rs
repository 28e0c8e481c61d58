//! Terminal presentation for the console games.
//!
//! Views render a session into a [`FrameBuffer`] without touching the
//! terminal, which keeps them unit-testable. [`TerminalRenderer`] flushes
//! framebuffers to stdout with crossterm, rewriting only changed cells
//! after the first frame, and [`Screen`] glues the two together into an
//! engine [`Renderer`](crate::engine::Renderer).

pub mod fb;
pub mod hangman_view;
pub mod renderer;
pub mod snake_view;
pub mod tictactoe_view;
pub mod view;

pub use console_games_core as core;
pub use console_games_engine as engine;
pub use console_games_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use hangman_view::HangmanView;
pub use renderer::{encode_diff_into, encode_full_into, Screen, TerminalRenderer};
pub use snake_view::SnakeView;
pub use tictactoe_view::TicTacToeView;
pub use view::{View, Viewport};
