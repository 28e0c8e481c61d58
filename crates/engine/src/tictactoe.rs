//! Tic-tac-toe session: line prompt for `row col`, feedback, turn settlement.

use std::fmt;

use tracing::{debug, info};

use crate::core::tictactoe::{GameStatus, MoveRejection, TicTacToe};
use crate::driver::Session;
use crate::input::MalformedInput;
use crate::prompt::{LineBuffer, PromptEvent};
use crate::types::{Player, PromptKey};

/// How a tic-tac-toe session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicTacToeOutcome {
    Won(Player),
    Tied,
    Abandoned,
}

/// Message shown above the prompt after the last submitted line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicTacToeFeedback {
    Welcome,
    Placed { player: Player, row: i32, col: i32 },
    Malformed,
    Rejected(MoveRejection),
    Won(Player),
    Tied,
    Abandoned,
}

impl fmt::Display for TicTacToeFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicTacToeFeedback::Welcome => f.write_str("Welcome to Tic-Tac-Toe!"),
            TicTacToeFeedback::Placed { player, row, col } => {
                write!(f, "Player {} took {} {}.", player.symbol(), row, col)
            }
            TicTacToeFeedback::Malformed => {
                f.write_str("Invalid input format. Please enter two numbers.")
            }
            TicTacToeFeedback::Rejected(rejection) => f.write_str(rejection.message()),
            TicTacToeFeedback::Won(player) => {
                write!(f, "CONGRATULATIONS! Player {} WINS!", player.symbol())
            }
            TicTacToeFeedback::Tied => f.write_str("IT'S A TIE! GAME OVER."),
            TicTacToeFeedback::Abandoned => f.write_str("Game abandoned."),
        }
    }
}

/// Parse `row col`: exactly two whitespace-separated integers.
pub fn parse_move(line: &str) -> Result<(i32, i32), MalformedInput> {
    let malformed = || MalformedInput::ExpectedTwoNumbers(line.to_string());
    let mut tokens = line.split_whitespace();
    let (Some(row), Some(col), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(malformed());
    };
    let row = row.parse::<i32>().map_err(|_| malformed())?;
    let col = col.parse::<i32>().map_err(|_| malformed())?;
    Ok((row, col))
}

/// Tic-tac-toe game plus prompt state
#[derive(Debug, Clone)]
pub struct TicTacToeSession {
    game: TicTacToe,
    prompt: LineBuffer,
    feedback: TicTacToeFeedback,
    abandoned: bool,
}

impl TicTacToeSession {
    pub fn new() -> Self {
        info!("tic-tac-toe started");
        Self {
            game: TicTacToe::new(),
            prompt: LineBuffer::new(),
            feedback: TicTacToeFeedback::Welcome,
            abandoned: false,
        }
    }

    pub fn game(&self) -> &TicTacToe {
        &self.game
    }

    pub fn prompt(&self) -> &str {
        self.prompt.text()
    }

    pub fn feedback(&self) -> TicTacToeFeedback {
        self.feedback
    }

    pub fn is_over(&self) -> bool {
        self.abandoned || self.game.status().is_over()
    }

    /// Handle a complete `row col` line. Malformed or illegal input keeps the turn.
    pub fn submit_line(&mut self, line: &str) -> Option<TicTacToeOutcome> {
        let (row, col) = match parse_move(line) {
            Ok(coords) => coords,
            Err(err) => {
                debug!(%err, "malformed move");
                self.feedback = TicTacToeFeedback::Malformed;
                return None;
            }
        };

        let player = self.game.current_player();
        match self.game.play(row, col) {
            Ok(GameStatus::InProgress) => {
                self.feedback = TicTacToeFeedback::Placed { player, row, col };
                None
            }
            Ok(GameStatus::Won(winner)) => {
                info!(?winner, moves = self.game.moves_made(), "tic-tac-toe won");
                self.feedback = TicTacToeFeedback::Won(winner);
                Some(TicTacToeOutcome::Won(winner))
            }
            Ok(GameStatus::Tied) => {
                info!("tic-tac-toe tied");
                self.feedback = TicTacToeFeedback::Tied;
                Some(TicTacToeOutcome::Tied)
            }
            Err(rejection) => {
                debug!(code = rejection.code(), row, col, "move rejected");
                self.feedback = TicTacToeFeedback::Rejected(rejection);
                None
            }
        }
    }
}

impl Default for TicTacToeSession {
    fn default() -> Self {
        Self::new()
    }
}

impl Session for TicTacToeSession {
    type Event = PromptKey;
    type Outcome = TicTacToeOutcome;

    fn handle(&mut self, key: PromptKey) -> Option<TicTacToeOutcome> {
        match self.prompt.handle(key) {
            PromptEvent::Edited | PromptEvent::Ignored => None,
            PromptEvent::Submitted(line) => self.submit_line(&line),
            PromptEvent::Quit => Some(self.abandon()),
        }
    }

    fn abandon(&mut self) -> TicTacToeOutcome {
        info!(moves = self.game.moves_made(), "tic-tac-toe abandoned");
        self.abandoned = true;
        self.feedback = TicTacToeFeedback::Abandoned;
        TicTacToeOutcome::Abandoned
    }
}
