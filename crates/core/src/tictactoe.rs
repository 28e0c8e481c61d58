//! Tic-tac-toe rules - board, move validation, win and tie detection
//!
//! The board is a 3x3 grid stored as a flat row-major array.
//! Coordinates: (row, col) where both range 0..3, top-left is (0, 0).
//!
//! A turn is: [`Board::apply_move`] for the current player, then
//! [`Board::check_win`] for that player, then [`check_tie`], and only if
//! neither ended the game, [`TicTacToe::switch_player`]. [`TicTacToe::play`]
//! runs that sequence.

use tracing::debug;

use crate::types::{Cell, Player, TICTACTOE_CELLS, TICTACTOE_SIZE};

/// The eight winning lines as flat indices: rows, columns, diagonals
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Why a move was not applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    OutOfBounds,
    Occupied,
    GameOver,
}

impl MoveRejection {
    pub fn code(self) -> &'static str {
        match self {
            MoveRejection::OutOfBounds => "out_of_bounds",
            MoveRejection::Occupied => "occupied",
            MoveRejection::GameOver => "game_over",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            MoveRejection::OutOfBounds => {
                "Invalid coordinates. Row and column must be between 0 and 2."
            }
            MoveRejection::Occupied => "That cell is already taken. Try again.",
            MoveRejection::GameOver => "The game is already over.",
        }
    }
}

/// 3x3 board plus the number of accepted placements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * SIZE + col)
    cells: [Cell; TICTACTOE_CELLS],
    moves_made: u8,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; TICTACTOE_CELLS],
            moves_made: 0,
        }
    }

    /// Calculate flat index from (row, col)
    #[inline(always)]
    fn index(row: i32, col: i32) -> Option<usize> {
        let size = TICTACTOE_SIZE as i32;
        if row < 0 || row >= size || col < 0 || col >= size {
            return None;
        }
        Some((row * size + col) as usize)
    }

    /// Get cell at (row, col); `None` if out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    pub fn cells(&self) -> &[Cell; TICTACTOE_CELLS] {
        &self.cells
    }

    pub fn moves_made(&self) -> u8 {
        self.moves_made
    }

    /// Place `player`'s mark at (row, col).
    ///
    /// Accepted only inside the grid on an empty cell; increments the move counter.
    pub fn apply_move(&mut self, row: i32, col: i32, player: Player) -> Result<(), MoveRejection> {
        let idx = Self::index(row, col).ok_or(MoveRejection::OutOfBounds)?;
        if self.cells[idx].is_some() {
            return Err(MoveRejection::Occupied);
        }
        self.cells[idx] = Some(player);
        self.moves_made += 1;
        Ok(())
    }

    /// True iff some row, column or diagonal is fully occupied by `player`
    pub fn check_win(&self, player: Player) -> bool {
        self.winning_line(player).is_some()
    }

    /// First complete line owned by `player`, as flat cell indices
    pub fn winning_line(&self, player: Player) -> Option<[usize; 3]> {
        LINES
            .iter()
            .copied()
            .find(|line| line.iter().all(|&i| self.cells[i] == Some(player)))
    }

    /// Number of cells holding `player`'s mark
    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|&&c| c == Some(player)).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// True iff every cell has been played.
///
/// Only meaningful after the win check for the same move came back false.
pub fn check_tie(moves_made: u8) -> bool {
    moves_made as usize == TICTACTOE_CELLS
}

/// Lifecycle of a tic-tac-toe game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Tied,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Complete tic-tac-toe game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToe {
    board: Board,
    current: Player,
    status: GameStatus,
}

impl TicTacToe {
    /// Fresh game, X to move
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: Player::X,
            status: GameStatus::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn moves_made(&self) -> u8 {
        self.board.moves_made()
    }

    /// Hand the turn to the other player
    pub fn switch_player(&mut self) {
        self.current = self.current.opponent();
    }

    /// Play the current player's mark at (row, col) and settle the turn.
    ///
    /// Win is checked before tie: a last move that fills the board and
    /// completes a line is a win.
    pub fn play(&mut self, row: i32, col: i32) -> Result<GameStatus, MoveRejection> {
        if self.status.is_over() {
            return Err(MoveRejection::GameOver);
        }

        let player = self.current;
        self.board.apply_move(row, col, player)?;
        debug!(?player, row, col, moves = self.board.moves_made(), "move accepted");

        self.status = if self.board.check_win(player) {
            GameStatus::Won(player)
        } else if check_tie(self.board.moves_made()) {
            GameStatus::Tied
        } else {
            self.switch_player();
            GameStatus::InProgress
        };
        Ok(self.status)
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}
