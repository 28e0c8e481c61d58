//! Blocking input source backed by crossterm's event queue.

use std::io;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tracing::debug;

use crate::engine::{EndOfInput, InputSource};

/// Reads key presses from the terminal and maps them with `map`.
///
/// Keys the mapping rejects, key releases, and non-key events (resize,
/// focus, mouse) are skipped; `read_event` keeps waiting for a usable key.
pub struct TerminalInput<F> {
    map: F,
}

impl<F, E> TerminalInput<F>
where
    F: FnMut(KeyEvent) -> Option<E>,
{
    pub fn new(map: F) -> Self {
        Self { map }
    }
}

impl<F, E> InputSource for TerminalInput<F>
where
    F: FnMut(KeyEvent) -> Option<E>,
{
    type Event = E;

    fn read_event(&mut self) -> Result<E, EndOfInput> {
        loop {
            if let Some(mapped) = filter_event(&mut self.map, event::read())? {
                return Ok(mapped);
            }
        }
    }
}

/// One raw terminal read: `Ok(None)` means keep waiting.
///
/// A failed read ends the input and is logged at debug level.
fn filter_event<E>(
    map: &mut impl FnMut(KeyEvent) -> Option<E>,
    read: io::Result<Event>,
) -> Result<Option<E>, EndOfInput> {
    let event = read.map_err(|err| {
        debug!(%err, "terminal read failed");
        EndOfInput
    })?;
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => Ok(map(key)),
        _ => Ok(None),
    }
}

/// Block until any key is pressed (used on the end screen).
pub fn wait_for_key() -> Result<(), EndOfInput> {
    TerminalInput::new(|_: KeyEvent| Some(())).read_event()
}
