//! Runs a game session on the real terminal.

use anyhow::Result;
use crossterm::event::KeyEvent;

use crate::engine::{run, Session};
use crate::input::{wait_for_key, TerminalInput};
use crate::term::{Screen, View};

/// Play `session` to completion in the alternate screen.
///
/// `map` turns key presses into session events. After the game ends the
/// final frame stays up until a key is pressed. The terminal is restored
/// on every path, including errors.
pub fn play<S, V, F>(session: &mut S, view: V, map: F) -> Result<S::Outcome>
where
    S: Session,
    V: View<S>,
    F: FnMut(KeyEvent) -> Option<S::Event>,
{
    let mut screen = Screen::new(view);
    screen.enter()?;

    let result = play_on(&mut screen, session, map);

    // Always try to restore terminal state.
    let restored = screen.exit();
    let outcome = result?;
    restored?;
    Ok(outcome)
}

fn play_on<S, V, F>(screen: &mut Screen<V>, session: &mut S, map: F) -> Result<S::Outcome>
where
    S: Session,
    V: View<S>,
    F: FnMut(KeyEvent) -> Option<S::Event>,
{
    let mut input = TerminalInput::new(map);
    let outcome = run(session, &mut input, screen)?;
    // A closed input just skips the pause.
    let _ = wait_for_key();
    Ok(outcome)
}
