//! Input side of the loop: where events come from and how lines are validated.

use std::collections::VecDeque;

use derive_more::{Display, Error};

/// The input source has nothing more to give (closed terminal, drained script).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("end of input")]
pub struct EndOfInput;

/// A submitted line that does not have the expected shape.
///
/// Recovered by re-prompting; never ends the game.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MalformedInput {
    #[display("expected two numbers, got {_0:?}")]
    ExpectedTwoNumbers(#[error(not(source))] String),
    #[display("expected a single letter, got {_0:?}")]
    ExpectedOneCharacter(#[error(not(source))] String),
}

/// Blocking source of input events.
///
/// `read_event` suspends until a complete event is available.
pub trait InputSource {
    type Event;

    fn read_event(&mut self) -> Result<Self::Event, EndOfInput>;
}

/// Input source replaying a fixed list of events, then reporting end of input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput<E> {
    events: VecDeque<E>,
}

impl<E> ScriptedInput<E> {
    pub fn new(events: impl IntoIterator<Item = E>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl<E> InputSource for ScriptedInput<E> {
    type Event = E;

    fn read_event(&mut self) -> Result<E, EndOfInput> {
        self.events.pop_front().ok_or(EndOfInput)
    }
}
