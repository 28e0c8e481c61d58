//! Single-line text prompt used by tic-tac-toe and hangman.

use crate::types::{PromptKey, PROMPT_MAX_LEN};

/// What a key press did to the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptEvent {
    Edited,
    /// Key had no effect (full buffer, control character, empty backspace)
    Ignored,
    /// Enter pressed; carries the line and leaves the buffer empty
    Submitted(String),
    Quit,
}

/// Line being typed, bounded to `max_len` characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    text: String,
    max_len: usize,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::with_max_len(PROMPT_MAX_LEN)
    }

    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            text: String::with_capacity(max_len),
            max_len,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn handle(&mut self, key: PromptKey) -> PromptEvent {
        match key {
            PromptKey::Char(c) => {
                if c.is_control() || self.text.chars().count() >= self.max_len {
                    return PromptEvent::Ignored;
                }
                self.text.push(c);
                PromptEvent::Edited
            }
            PromptKey::Backspace => match self.text.pop() {
                Some(_) => PromptEvent::Edited,
                None => PromptEvent::Ignored,
            },
            PromptKey::Enter => PromptEvent::Submitted(std::mem::take(&mut self.text)),
            PromptKey::Quit => PromptEvent::Quit,
        }
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_and_submitting() {
        let mut line = LineBuffer::new();
        assert_eq!(line.handle(PromptKey::Char('0')), PromptEvent::Edited);
        assert_eq!(line.handle(PromptKey::Char(' ')), PromptEvent::Edited);
        assert_eq!(line.handle(PromptKey::Char('2')), PromptEvent::Edited);
        assert_eq!(line.text(), "0 2");
        assert_eq!(line.handle(PromptKey::Enter), PromptEvent::Submitted("0 2".into()));
        assert_eq!(line.text(), "");
    }

    #[test]
    fn backspace() {
        let mut line = LineBuffer::new();
        assert_eq!(line.handle(PromptKey::Backspace), PromptEvent::Ignored);
        line.handle(PromptKey::Char('a'));
        line.handle(PromptKey::Char('b'));
        assert_eq!(line.handle(PromptKey::Backspace), PromptEvent::Edited);
        assert_eq!(line.text(), "a");
    }

    #[test]
    fn bounded_length_and_controls() {
        let mut line = LineBuffer::with_max_len(2);
        line.handle(PromptKey::Char('a'));
        line.handle(PromptKey::Char('b'));
        assert_eq!(line.handle(PromptKey::Char('c')), PromptEvent::Ignored);
        assert_eq!(line.handle(PromptKey::Char('\t')), PromptEvent::Ignored);
        assert_eq!(line.text(), "ab");
        assert_eq!(line.handle(PromptKey::Quit), PromptEvent::Quit);
    }
}
