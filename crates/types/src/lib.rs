//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used by all three games.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (rule engines, loop drivers, terminal rendering).
//!
//! # Board Dimensions
//!
//! | Game | Constant | Value |
//! |------|----------|-------|
//! | Tic-tac-toe | `TICTACTOE_SIZE` | 3x3 |
//! | Snake | `SNAKE_WIDTH` x `SNAKE_HEIGHT` | 20x15 |
//!
//! # Gameplay Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `HANGMAN_MAX_TRIES` | 6 | Wrong guesses allowed before the figure is complete |
//! | `HANGMAN_FIGURE_PARTS` | 6 | Parts of the hanged figure |
//! | `SNAKE_INITIAL_LENGTH` | 3 | Segments at game start |
//! | `SNAKE_FOOD_SCORE` | 10 | Points per food eaten |
//! | `PROMPT_MAX_LEN` | 32 | Longest line the prompt accepts |
//!
//! # Coordinates
//!
//! Tic-tac-toe addresses cells by `(row, col)`, both starting at 0 in the top-left.
//! Snake uses [`Point`] with `x` growing right and `y` growing down.
//!
//! # Examples
//!
//! ```
//! use console_games_types::{Direction, Player, Point};
//!
//! assert_eq!(Player::X.opponent(), Player::O);
//!
//! let head = Point::new(10, 7);
//! assert_eq!(head.step(Direction::Right), Point::new(11, 7));
//! assert!(Direction::Up.is_perpendicular_to(Direction::Left));
//! assert!(!Direction::Up.is_perpendicular_to(Direction::Down));
//! ```

/// Tic-tac-toe board side length (3x3)
pub const TICTACTOE_SIZE: usize = 3;

/// Number of cells on the tic-tac-toe board
pub const TICTACTOE_CELLS: usize = TICTACTOE_SIZE * TICTACTOE_SIZE;

/// Wrong guesses allowed in hangman
pub const HANGMAN_MAX_TRIES: u8 = 6;

/// Drawable parts of the hanged figure (head, body, two arms, two legs)
pub const HANGMAN_FIGURE_PARTS: u8 = 6;

/// Placeholder shown for unrevealed letters
pub const HANGMAN_PLACEHOLDER: char = '_';

/// Built-in hangman vocabulary
pub const HANGMAN_VOCABULARY: [&str; 10] = [
    "computer",
    "programming",
    "developer",
    "keyboard",
    "language",
    "hangman",
    "terminal",
    "console",
    "algorithm",
    "variable",
];

/// Snake board width in cells (20 columns)
pub const SNAKE_WIDTH: u16 = 20;

/// Snake board height in cells (15 rows)
pub const SNAKE_HEIGHT: u16 = 15;

/// Snake length at game start
pub const SNAKE_INITIAL_LENGTH: u16 = 3;

/// Score awarded per food eaten
pub const SNAKE_FOOD_SCORE: u32 = 10;

/// Longest line accepted by the text prompt
pub const PROMPT_MAX_LEN: usize = 32;


/// The two tic-tac-toe players
///
/// X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The other player
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Mark drawn on the board
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A cell on the tic-tac-toe board
///
/// - `None`: Empty cell
/// - `Some(Player)`: Cell marked by that player
pub type Cell = Option<Player>;

/// Grid coordinate on the snake board
///
/// Signed so that a step past the left or top edge is representable
/// and can be reported as a wall hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i16,
    pub y: i16,
}

impl Point {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// The neighbouring point one cell away in `direction`
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Axis-aligned movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step `(dx, dy)`; exactly one component is non-zero
    pub fn delta(self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// True when `other` moves along the other axis
    pub fn is_perpendicular_to(self, other: Direction) -> bool {
        self.is_horizontal() != other.is_horizontal()
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Parse direction from string
    ///
    /// Accepts full names or WASD letters (case-insensitive):
    /// "up" | "w", "down" | "s", "left" | "a", "right" | "d"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "w" => Some(Direction::Up),
            "down" | "s" => Some(Direction::Down),
            "left" | "a" => Some(Direction::Left),
            "right" | "d" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Key events understood by the line prompt (tic-tac-toe and hangman)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKey {
    /// A printable character typed by the user
    Char(char),
    /// Delete the last typed character
    Backspace,
    /// Submit the current line
    Enter,
    /// Leave the game
    Quit,
}

/// Commands understood by the snake loop
///
/// Every command except `Quit` advances the snake one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeCommand {
    /// Request a turn, then advance
    Turn(Direction),
    /// Advance without turning
    Step,
    /// Leave the game
    Quit,
}
