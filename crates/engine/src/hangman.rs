//! Hangman session: one letter per submitted line.

use std::fmt;

use tracing::{debug, info};

use crate::core::hangman::{GuessOutcome, Hangman, HangmanStatus};
use crate::driver::Session;
use crate::input::MalformedInput;
use crate::prompt::{LineBuffer, PromptEvent};
use crate::types::PromptKey;

/// How a hangman session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HangmanOutcome {
    Won,
    Lost,
    Abandoned,
}

/// Message shown above the prompt after the last submitted line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HangmanFeedback {
    Welcome { letters: usize },
    Malformed,
    Guess { letter: char, outcome: GuessOutcome },
    Won,
    Lost,
    Abandoned,
}

impl fmt::Display for HangmanFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            HangmanFeedback::Welcome { letters } => write!(f, "The word has {letters} letters."),
            HangmanFeedback::Malformed => f.write_str("Please enter a single letter (a-z)."),
            HangmanFeedback::Guess { letter, outcome } => match outcome {
                GuessOutcome::Hit => write!(f, "Good guess! '{letter}' is in the word."),
                GuessOutcome::Miss => write!(
                    f,
                    "Incorrect guess. '{letter}' is NOT in the word. You lose a try!"
                ),
                GuessOutcome::AlreadyGuessed => write!(
                    f,
                    "You already guessed the letter '{letter}'. Try another one!"
                ),
                GuessOutcome::InvalidCharacter => {
                    f.write_str("Invalid input. Please enter a letter (a-z).")
                }
                GuessOutcome::Finished => f.write_str("The game is already over."),
            },
            HangmanFeedback::Won => f.write_str("CONGRATULATIONS! YOU WON!"),
            HangmanFeedback::Lost => f.write_str("GAME OVER. You ran out of tries!"),
            HangmanFeedback::Abandoned => f.write_str("Game abandoned."),
        }
    }
}

/// Parse a guess: exactly one character after trimming whitespace.
pub fn parse_guess(line: &str) -> Result<char, MalformedInput> {
    let mut chars = line.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(MalformedInput::ExpectedOneCharacter(line.to_string())),
    }
}

/// Hangman game plus prompt state
#[derive(Debug, Clone)]
pub struct HangmanSession {
    game: Hangman,
    prompt: LineBuffer,
    feedback: HangmanFeedback,
    abandoned: bool,
}

impl HangmanSession {
    pub fn new(game: Hangman) -> Self {
        info!(letters = game.word_len(), tries = game.max_tries(), "hangman started");
        let feedback = HangmanFeedback::Welcome {
            letters: game.word_len(),
        };
        Self {
            game,
            prompt: LineBuffer::new(),
            feedback,
            abandoned: false,
        }
    }

    pub fn game(&self) -> &Hangman {
        &self.game
    }

    pub fn prompt(&self) -> &str {
        self.prompt.text()
    }

    pub fn feedback(&self) -> HangmanFeedback {
        self.feedback
    }

    pub fn is_over(&self) -> bool {
        self.abandoned || self.game.status().is_over()
    }

    /// Handle one submitted line. Only hits and misses consume a turn.
    pub fn submit_line(&mut self, line: &str) -> Option<HangmanOutcome> {
        let letter = match parse_guess(line) {
            Ok(c) => c,
            Err(err) => {
                debug!(%err, "malformed guess");
                self.feedback = HangmanFeedback::Malformed;
                return None;
            }
        };

        let outcome = self.game.submit_guess(letter);
        self.feedback = HangmanFeedback::Guess {
            letter: letter.to_ascii_lowercase(),
            outcome,
        };

        match self.game.status() {
            HangmanStatus::InProgress => None,
            HangmanStatus::Won => {
                info!(tries_left = self.game.tries_left(), "hangman won");
                self.feedback = HangmanFeedback::Won;
                Some(HangmanOutcome::Won)
            }
            HangmanStatus::Lost => {
                info!("hangman lost");
                self.feedback = HangmanFeedback::Lost;
                Some(HangmanOutcome::Lost)
            }
        }
    }
}

impl Session for HangmanSession {
    type Event = PromptKey;
    type Outcome = HangmanOutcome;

    fn handle(&mut self, key: PromptKey) -> Option<HangmanOutcome> {
        match self.prompt.handle(key) {
            PromptEvent::Edited | PromptEvent::Ignored => None,
            PromptEvent::Submitted(line) => self.submit_line(&line),
            PromptEvent::Quit => Some(self.abandon()),
        }
    }

    fn abandon(&mut self) -> HangmanOutcome {
        info!(tries_left = self.game.tries_left(), "hangman abandoned");
        self.abandoned = true;
        self.feedback = HangmanFeedback::Abandoned;
        HangmanOutcome::Abandoned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hangman::HangmanConfig;

    fn session(secret: &str) -> HangmanSession {
        HangmanSession::new(Hangman::with_secret(secret, HangmanConfig::default()).unwrap())
    }

    #[test]
    fn parse_guess_shapes() {
        assert_eq!(parse_guess("a"), Ok('a'));
        assert_eq!(parse_guess("  Q \t"), Ok('Q'));
        assert_eq!(parse_guess("7"), Ok('7'));
        assert!(parse_guess("").is_err());
        assert!(parse_guess("   ").is_err());
        assert!(parse_guess("ab").is_err());
    }

    #[test]
    fn welcome_mentions_length() {
        let s = session("console");
        assert_eq!(s.feedback().to_string(), "The word has 7 letters.");
    }

    #[test]
    fn feedback_follows_guesses() {
        let mut s = session("go");
        assert_eq!(s.submit_line("x"), None);
        assert_eq!(
            s.feedback(),
            HangmanFeedback::Guess { letter: 'x', outcome: GuessOutcome::Miss }
        );
        assert_eq!(s.submit_line("X"), None);
        assert_eq!(
            s.feedback().to_string(),
            "You already guessed the letter 'x'. Try another one!"
        );
        assert_eq!(s.submit_line("?"), None);
        assert_eq!(
            s.feedback().to_string(),
            "Invalid input. Please enter a letter (a-z)."
        );
        assert_eq!(s.submit_line("go"), None);
        assert_eq!(s.feedback(), HangmanFeedback::Malformed);
        assert_eq!(s.game().tries_left(), 5);

        assert_eq!(s.submit_line("g"), None);
        assert_eq!(s.submit_line("o"), Some(HangmanOutcome::Won));
        assert!(s.is_over());
    }

    #[test]
    fn typing_a_guess() {
        let mut s = session("go");
        assert_eq!(s.handle(PromptKey::Char('g')), None);
        assert_eq!(s.prompt(), "g");
        assert_eq!(s.handle(PromptKey::Enter), None);
        assert_eq!(s.prompt(), "");
        assert_eq!(s.game().mask(), "g_");
    }
}
