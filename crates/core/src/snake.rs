//! Snake rules - body movement, collisions, growth and food placement
//!
//! Coordinates: (x, y) where x ranges 0..width (left to right), y ranges
//! 0..height (top to bottom). The body is ordered head first.
//!
//! One call to [`SnakeGame::advance`] is one tick. Head and tail move
//! together, so stepping into the cell the tail is leaving is legal,
//! unless the snake eats this tick and the tail stays put.

use std::collections::VecDeque;

use tracing::{debug, info};

use crate::rng::SimpleRng;
use crate::types::{
    Direction, Point, SNAKE_FOOD_SCORE, SNAKE_HEIGHT, SNAKE_INITIAL_LENGTH, SNAKE_WIDTH,
};

/// Tunables for a snake game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnakeConfig {
    pub width: u16,
    pub height: u16,
    pub initial_length: u16,
    pub food_score: u32,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            width: SNAKE_WIDTH,
            height: SNAKE_HEIGHT,
            initial_length: SNAKE_INITIAL_LENGTH,
            food_score: SNAKE_FOOD_SCORE,
        }
    }
}

impl SnakeConfig {
    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_initial_length(mut self, initial_length: u16) -> Self {
        self.initial_length = initial_length;
        self
    }

    /// Total number of cells on the board
    pub fn capacity(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// How a snake game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverReason {
    WallHit,
    SelfHit,
    /// No free cell left for food; counts as a win
    BoardFull,
    Quit,
}

impl OverReason {
    pub fn message(self) -> &'static str {
        match self {
            OverReason::WallHit => "You hit the wall.",
            OverReason::SelfHit => "You ran into yourself.",
            OverReason::BoardFull => "You filled the entire board! Amazing!",
            OverReason::Quit => "You quit the game.",
        }
    }

    pub fn is_win(self) -> bool {
        matches!(self, OverReason::BoardFull)
    }
}

/// Lifecycle of a snake game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeStatus {
    Running,
    Over(OverReason),
}

/// Result of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Continue,
    AteFood,
    /// The snake did not move; the game is over
    Collided(OverReason),
    /// The game had already ended; nothing changed
    Halted,
}

/// Complete snake game state
#[derive(Debug, Clone)]
pub struct SnakeGame {
    config: SnakeConfig,
    /// Body segments, index 0 is the head
    body: VecDeque<Point>,
    direction: Direction,
    food: Option<Point>,
    score: u32,
    status: SnakeStatus,
    rng: SimpleRng,
}

impl SnakeGame {
    /// Start a game: snake centred and heading right, first food placed.
    pub fn new(config: SnakeConfig, seed: u32) -> Self {
        let mut body = VecDeque::with_capacity(config.capacity());
        let cx = (config.width / 2) as i16;
        let cy = (config.height / 2) as i16;
        let length = config.initial_length.clamp(1, config.width / 2 + 1);
        for i in 0..length as i16 {
            body.push_back(Point::new(cx - i, cy));
        }

        let mut game = Self {
            config,
            body,
            direction: Direction::Right,
            food: None,
            score: 0,
            status: SnakeStatus::Running,
            rng: SimpleRng::new(seed),
        };
        game.food = game.generate_food();
        if game.food.is_none() {
            game.status = SnakeStatus::Over(OverReason::BoardFull);
        }
        info!(
            width = config.width,
            height = config.height,
            seed,
            "snake game started"
        );
        game
    }

    /// Build a game from an explicit body (head first) and food position.
    ///
    /// An empty body becomes a single segment at the board centre.
    pub fn from_parts(
        config: SnakeConfig,
        body: impl IntoIterator<Item = Point>,
        direction: Direction,
        food: Option<Point>,
        seed: u32,
    ) -> Self {
        let mut segments = VecDeque::with_capacity(config.capacity());
        segments.extend(body);
        if segments.is_empty() {
            segments.push_back(Point::new((config.width / 2) as i16, (config.height / 2) as i16));
        }
        Self {
            config,
            body: segments,
            direction,
            food,
            score: 0,
            status: SnakeStatus::Running,
            rng: SimpleRng::new(seed),
        }
    }

    pub fn width(&self) -> u16 {
        self.config.width
    }

    pub fn height(&self) -> u16 {
        self.config.height
    }

    /// Head position
    pub fn head(&self) -> Option<Point> {
        self.body.front().copied()
    }

    /// Body segments, head first
    pub fn body(&self) -> impl Iterator<Item = Point> + '_ {
        self.body.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food(&self) -> Option<Point> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> SnakeStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        matches!(self.status, SnakeStatus::Over(_))
    }

    /// True if any body segment occupies `p`
    pub fn occupies(&self, p: Point) -> bool {
        self.body.contains(&p)
    }

    fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as u16) < self.config.width && (p.y as u16) < self.config.height
    }

    /// Change heading. Only a turn onto the other axis is accepted;
    /// same-axis requests (including reversal) are ignored.
    pub fn set_direction(&mut self, requested: Direction) -> bool {
        if self.is_over() || !requested.is_perpendicular_to(self.direction) {
            return false;
        }
        self.direction = requested;
        true
    }

    /// End the game on the player's request
    pub fn quit(&mut self) {
        if !self.is_over() {
            self.status = SnakeStatus::Over(OverReason::Quit);
        }
    }

    /// Move one cell in the current direction.
    pub fn advance(&mut self) -> Tick {
        if self.is_over() {
            return Tick::Halted;
        }
        let Some(head) = self.head() else {
            // Nothing left to move: end the game instead of stalling.
            self.status = SnakeStatus::Over(OverReason::Quit);
            return Tick::Halted;
        };

        let new_head = head.step(self.direction);
        if !self.in_bounds(new_head) {
            return self.collide(OverReason::WallHit);
        }

        let grows = self.food == Some(new_head);
        // The tail moves out this tick unless the snake grows.
        let checked = if grows {
            self.body.len()
        } else {
            self.body.len().saturating_sub(1)
        };
        if self.body.iter().take(checked).any(|&p| p == new_head) {
            return self.collide(OverReason::SelfHit);
        }

        self.body.push_front(new_head);
        if !grows {
            self.body.pop_back();
            debug!(x = new_head.x, y = new_head.y, "tick");
            return Tick::Continue;
        }

        self.score += self.config.food_score;
        debug!(x = new_head.x, y = new_head.y, len = self.body.len(), score = self.score, "ate food");

        self.food = if self.body.len() >= self.config.capacity() {
            None
        } else {
            self.generate_food()
        };
        if self.food.is_none() {
            self.status = SnakeStatus::Over(OverReason::BoardFull);
            info!(score = self.score, "board full");
        }
        Tick::AteFood
    }

    fn collide(&mut self, reason: OverReason) -> Tick {
        self.status = SnakeStatus::Over(reason);
        info!(?reason, score = self.score, len = self.body.len(), "snake collided");
        Tick::Collided(reason)
    }

    /// Sample random cells until one is off the snake.
    ///
    /// Gives up after twice the board capacity; `None` means the board is
    /// treated as full.
    pub fn generate_food(&mut self) -> Option<Point> {
        let attempts = self.config.capacity() * 2;
        for _ in 0..attempts {
            let p = Point::new(
                self.rng.next_range(self.config.width as u32) as i16,
                self.rng.next_range(self.config.height as u32) as i16,
            );
            if !self.occupies(p) {
                return Some(p);
            }
        }
        None
    }
}
