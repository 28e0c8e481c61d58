//! Snake session: every command is one tick.

use tracing::info;

use crate::core::snake::{OverReason, SnakeGame, SnakeStatus, Tick};
use crate::driver::Session;
use crate::types::SnakeCommand;

/// How a snake session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnakeOutcome {
    pub reason: OverReason,
    pub score: u32,
    pub length: usize,
}

/// Snake game plus the result of the last tick
#[derive(Debug, Clone)]
pub struct SnakeSession {
    game: SnakeGame,
    last_tick: Option<Tick>,
}

impl SnakeSession {
    pub fn new(game: SnakeGame) -> Self {
        Self {
            game,
            last_tick: None,
        }
    }

    pub fn game(&self) -> &SnakeGame {
        &self.game
    }

    pub fn last_tick(&self) -> Option<Tick> {
        self.last_tick
    }

    pub fn is_over(&self) -> bool {
        self.game.is_over()
    }

    fn outcome(&self) -> Option<SnakeOutcome> {
        match self.game.status() {
            SnakeStatus::Running => None,
            SnakeStatus::Over(reason) => Some(SnakeOutcome {
                reason,
                score: self.game.score(),
                length: self.game.len(),
            }),
        }
    }
}

impl Session for SnakeSession {
    type Event = SnakeCommand;
    type Outcome = SnakeOutcome;

    fn handle(&mut self, command: SnakeCommand) -> Option<SnakeOutcome> {
        match command {
            SnakeCommand::Quit => return Some(self.abandon()),
            SnakeCommand::Turn(direction) => {
                self.game.set_direction(direction);
            }
            SnakeCommand::Step => {}
        }
        self.last_tick = Some(self.game.advance());

        let outcome = self.outcome();
        if let Some(outcome) = outcome {
            info!(reason = ?outcome.reason, score = outcome.score, length = outcome.length, "snake over");
        }
        outcome
    }

    fn abandon(&mut self) -> SnakeOutcome {
        self.game.quit();
        let outcome = SnakeOutcome {
            reason: OverReason::Quit,
            score: self.game.score(),
            length: self.game.len(),
        };
        self.outcome().unwrap_or(outcome)
    }
}
