//! Hangman rules and sessions through the facade crate.

mod common;

use common::{typed_lines, Offscreen};
use console_games::core::hangman::{select_secret, GuessOutcome, Hangman, HangmanConfig, HangmanStatus};
use console_games::core::SimpleRng;
use console_games::engine::{run, HangmanOutcome, HangmanSession, ScriptedInput};
use console_games::term::HangmanView;
use console_games::types::{HANGMAN_MAX_TRIES, HANGMAN_VOCABULARY};
use proptest::prelude::*;

#[test]
fn test_go_scenario() {
    let mut game = Hangman::with_secret("go", HangmanConfig::default()).unwrap();
    assert_eq!(game.submit_guess('g'), GuessOutcome::Hit);
    assert_eq!(game.mask(), "g_");
    assert_eq!(game.submit_guess('o'), GuessOutcome::Hit);
    assert_eq!(game.mask(), "go");
    assert_eq!(game.status(), HangmanStatus::Won);
    assert_eq!(game.tries_left(), HANGMAN_MAX_TRIES);
}

#[test]
fn test_scripted_session_loses_after_six_misses() {
    let session_game = Hangman::with_secret("go", HangmanConfig::default()).unwrap();
    let mut session = HangmanSession::new(session_game);
    let mut input = ScriptedInput::new(typed_lines(&["a", "b", "b", "zz", "c", "d", "e", "f"]));
    let mut screen = Offscreen::new(HangmanView);

    let outcome = run(&mut session, &mut input, &mut screen).unwrap();
    assert_eq!(outcome, HangmanOutcome::Lost);
    assert_eq!(session.game().tries_left(), 0);
    assert_eq!(session.game().guessed(), &['a', 'b', 'c', 'd', 'e', 'f']);

    let last = screen.last_frame();
    assert!(last.contains("GAME OVER. You ran out of tries!"));
    assert!(last.contains("The word was: go"));
}

#[test]
fn test_drained_input_abandons() {
    let game = Hangman::with_secret("rust", HangmanConfig::default()).unwrap();
    let mut session = HangmanSession::new(game);
    let mut input = ScriptedInput::new(typed_lines(&["r"]));
    let mut screen = Offscreen::new(HangmanView);

    let outcome = run(&mut session, &mut input, &mut screen).unwrap();
    assert_eq!(outcome, HangmanOutcome::Abandoned);
    assert_eq!(session.game().mask(), "r___");
    assert!(screen.last_frame().contains("Game abandoned."));
}

#[test]
fn test_same_seed_same_secret() {
    let a = Hangman::random(&mut SimpleRng::new(99), HangmanConfig::default());
    let b = Hangman::random(&mut SimpleRng::new(99), HangmanConfig::default());
    assert_eq!(a.secret(), b.secret());
    assert!(HANGMAN_VOCABULARY.contains(&a.secret()));
}

#[test]
fn test_select_secret_from_empty_vocabulary() {
    assert_eq!(select_secret(&mut SimpleRng::new(1), &[]), None);
}

proptest! {
    #[test]
    fn every_letter_once_wins_without_losing_tries(idx in 0..HANGMAN_VOCABULARY.len()) {
        let word = HANGMAN_VOCABULARY[idx];
        let mut game = Hangman::with_secret(word, HangmanConfig::default()).unwrap();
        let mut letters: Vec<char> = word.chars().collect();
        letters.sort_unstable();
        letters.dedup();
        for letter in letters {
            prop_assert_eq!(game.submit_guess(letter), GuessOutcome::Hit);
        }
        prop_assert_eq!(game.status(), HangmanStatus::Won);
        prop_assert_eq!(game.tries_left(), HANGMAN_MAX_TRIES);
    }

    #[test]
    fn repeated_guess_never_costs_a_try(letter in proptest::char::range('a', 'z')) {
        let mut game = Hangman::with_secret("keyboard", HangmanConfig::default()).unwrap();
        let first = game.submit_guess(letter);
        let tries = game.tries_left();
        prop_assert!(matches!(first, GuessOutcome::Hit | GuessOutcome::Miss));
        prop_assert_eq!(game.submit_guess(letter), GuessOutcome::AlreadyGuessed);
        prop_assert_eq!(game.tries_left(), tries);
    }
}
