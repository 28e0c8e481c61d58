//! The turn loop shared by all three games.

use anyhow::Result;
use tracing::debug;

use crate::input::InputSource;

/// One running game as seen by the loop driver.
pub trait Session {
    /// Input event consumed per turn
    type Event;
    /// How the game ended
    type Outcome: Copy + std::fmt::Debug;

    /// Apply one event. Returns the outcome once the game reaches a terminal state.
    fn handle(&mut self, event: Self::Event) -> Option<Self::Outcome>;

    /// End the game because input ran out.
    fn abandon(&mut self) -> Self::Outcome;
}

/// Draws a session. Output is never read back by the engine.
pub trait Renderer<S: ?Sized> {
    fn render(&mut self, state: &S) -> Result<()>;
}

/// Run `session` until it ends.
///
/// Every iteration renders, then blocks on the next event. The final state is
/// rendered once more before returning, so the player sees how the game ended.
/// Only renderer failures surface as errors.
pub fn run<S, I, R>(session: &mut S, input: &mut I, renderer: &mut R) -> Result<S::Outcome>
where
    S: Session,
    I: InputSource<Event = S::Event>,
    R: Renderer<S>,
{
    loop {
        renderer.render(session)?;

        let outcome = match input.read_event() {
            Ok(event) => session.handle(event),
            Err(end) => {
                debug!(%end, "input closed");
                Some(session.abandon())
            }
        };

        if let Some(outcome) = outcome {
            renderer.render(session)?;
            debug!(?outcome, "session finished");
            return Ok(outcome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ScriptedInput;

    /// Counts events; ends when it sees 0.
    struct Countdown {
        seen: u32,
        abandoned: bool,
    }

    impl Session for Countdown {
        type Event = u32;
        type Outcome = u32;

        fn handle(&mut self, event: u32) -> Option<u32> {
            self.seen += 1;
            (event == 0).then_some(self.seen)
        }

        fn abandon(&mut self) -> u32 {
            self.abandoned = true;
            self.seen
        }
    }

    #[derive(Default)]
    struct Frames {
        count: u32,
        fail: bool,
    }

    impl Renderer<Countdown> for Frames {
        fn render(&mut self, _: &Countdown) -> Result<()> {
            if self.fail {
                anyhow::bail!("broken pipe");
            }
            self.count += 1;
            Ok(())
        }
    }

    #[test]
    fn renders_before_each_read_and_after_the_end() {
        let mut session = Countdown { seen: 0, abandoned: false };
        let mut input = ScriptedInput::new([3, 2, 0, 9]);
        let mut renderer = Frames::default();

        let outcome = run(&mut session, &mut input, &mut renderer).unwrap();
        assert_eq!(outcome, 3);
        assert_eq!(renderer.count, 4);
        assert_eq!(input.remaining(), 1);
        assert!(!session.abandoned);
    }

    #[test]
    fn end_of_input_abandons() {
        let mut session = Countdown { seen: 0, abandoned: false };
        let mut input = ScriptedInput::new([5]);
        let mut renderer = Frames::default();

        let outcome = run(&mut session, &mut input, &mut renderer).unwrap();
        assert_eq!(outcome, 1);
        assert!(session.abandoned);
    }

    #[test]
    fn renderer_errors_propagate() {
        let mut session = Countdown { seen: 0, abandoned: false };
        let mut input = ScriptedInput::new([0]);
        let mut renderer = Frames { count: 0, fail: true };

        let err = run(&mut session, &mut input, &mut renderer).unwrap_err();
        assert_eq!(err.to_string(), "broken pipe");
        assert_eq!(session.seen, 0);
    }
}
