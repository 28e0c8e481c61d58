//! Hangman rules - secret word, revealed mask, guessed letters and tries
//!
//! Guesses are single letters, compared case-insensitively against a
//! lowercase ASCII secret. A novel wrong letter costs one try; invalid
//! characters and repeats cost nothing.

use arrayvec::ArrayVec;
use derive_more::{Display, Error};
use tracing::debug;

use crate::rng::SimpleRng;
use crate::types::{
    HANGMAN_FIGURE_PARTS, HANGMAN_MAX_TRIES, HANGMAN_PLACEHOLDER, HANGMAN_VOCABULARY,
};

/// Pick the secret word uniformly from `vocabulary`
pub fn select_secret<'a>(rng: &mut SimpleRng, vocabulary: &[&'a str]) -> Option<&'a str> {
    rng.choose(vocabulary).copied()
}

/// Secret word rejected at game creation
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SecretError {
    #[display("secret word is empty")]
    Empty,
    #[display("secret word must be ASCII letters only, got {_0:?}")]
    NotAlphabetic(#[error(not(source))] String),
}

/// Result of submitting one character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Letter occurs in the secret; at least one position revealed
    Hit,
    /// Novel letter absent from the secret; one try consumed
    Miss,
    /// Letter was guessed before; nothing changed
    AlreadyGuessed,
    /// Not a letter; nothing changed
    InvalidCharacter,
    /// The game had already ended; nothing changed
    Finished,
}

/// Lifecycle of a hangman game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HangmanStatus {
    InProgress,
    Won,
    Lost,
}

impl HangmanStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, HangmanStatus::InProgress)
    }
}

/// Tunables for a hangman game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HangmanConfig {
    pub max_tries: u8,
}

impl Default for HangmanConfig {
    fn default() -> Self {
        Self {
            max_tries: HANGMAN_MAX_TRIES,
        }
    }
}

impl HangmanConfig {
    /// At least one try is always allowed.
    pub fn with_max_tries(mut self, max_tries: u8) -> Self {
        self.max_tries = max_tries.max(1);
        self
    }
}

/// Complete hangman game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hangman {
    secret: String,
    mask: Vec<char>,
    /// Guessed letters, kept sorted ascending
    guessed: ArrayVec<char, 26>,
    tries_left: u8,
    max_tries: u8,
    status: HangmanStatus,
}

impl Hangman {
    /// New game with a secret drawn from the built-in vocabulary
    pub fn random(rng: &mut SimpleRng, config: HangmanConfig) -> Self {
        let secret = select_secret(rng, &HANGMAN_VOCABULARY).unwrap_or(HANGMAN_VOCABULARY[0]);
        Self::build(secret.to_string(), config)
    }

    /// New game with a chosen secret word
    pub fn with_secret(secret: &str, config: HangmanConfig) -> Result<Self, SecretError> {
        if secret.is_empty() {
            return Err(SecretError::Empty);
        }
        if !secret.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(SecretError::NotAlphabetic(secret.to_string()));
        }
        Ok(Self::build(secret.to_ascii_lowercase(), config))
    }

    fn build(secret: String, config: HangmanConfig) -> Self {
        let mask = vec![HANGMAN_PLACEHOLDER; secret.len()];
        // The field is public, so a zero budget can bypass `with_max_tries`.
        let max_tries = config.max_tries.max(1);
        Self {
            secret,
            mask,
            guessed: ArrayVec::new(),
            tries_left: max_tries,
            max_tries,
            status: HangmanStatus::InProgress,
        }
    }

    /// The secret word. Only meant for display once the game is over.
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Revealed letters with placeholders, e.g. `"g_"`
    pub fn mask(&self) -> String {
        self.mask.iter().collect()
    }

    pub fn word_len(&self) -> usize {
        self.mask.len()
    }

    /// Guessed letters in ascending order
    pub fn guessed(&self) -> &[char] {
        &self.guessed
    }

    pub fn tries_left(&self) -> u8 {
        self.tries_left
    }

    pub fn max_tries(&self) -> u8 {
        self.max_tries
    }

    pub fn status(&self) -> HangmanStatus {
        self.status
    }

    pub fn is_revealed(&self) -> bool {
        !self.mask.contains(&HANGMAN_PLACEHOLDER)
    }

    /// Submit one character.
    ///
    /// Win is checked after every hit, loss after every miss.
    pub fn submit_guess(&mut self, input: char) -> GuessOutcome {
        if self.status.is_over() {
            return GuessOutcome::Finished;
        }

        let letter = input.to_ascii_lowercase();
        if !letter.is_ascii_lowercase() {
            return GuessOutcome::InvalidCharacter;
        }

        let slot = match self.guessed.binary_search(&letter) {
            Ok(_) => return GuessOutcome::AlreadyGuessed,
            Err(slot) => slot,
        };
        // At most 26 distinct lowercase letters, so the insert always fits.
        self.guessed.insert(slot, letter);

        let mut revealed = 0usize;
        for (pos, ch) in self.secret.chars().enumerate() {
            if ch == letter {
                self.mask[pos] = letter;
                revealed += 1;
            }
        }

        let outcome = if revealed > 0 {
            if self.is_revealed() {
                self.status = HangmanStatus::Won;
            }
            GuessOutcome::Hit
        } else {
            self.tries_left = self.tries_left.saturating_sub(1);
            if self.tries_left == 0 {
                self.status = HangmanStatus::Lost;
            }
            GuessOutcome::Miss
        };

        debug!(%letter, ?outcome, revealed, tries_left = self.tries_left, "guess");
        outcome
    }

    /// Hanged-figure stage: 0 (empty gallows) up to `max_tries` (complete figure)
    pub fn stage(&self) -> u8 {
        figure_stage(self.tries_left, self.max_tries)
    }
}

/// Number of body parts drawn for `tries_left`.
///
/// Each lost try adds exactly one part, in the order head, body, left arm,
/// right arm, left leg, right leg. Larger budgets stop at the full figure.
pub fn figure_stage(tries_left: u8, max_tries: u8) -> u8 {
    max_tries
        .saturating_sub(tries_left)
        .min(HANGMAN_FIGURE_PARTS)
}
