//! Key mapping from terminal events to game input.

use crate::types::{Direction, PromptKey, SnakeCommand};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Check if key should quit the game (Esc or Ctrl-C).
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Map keyboard input to line prompt keys.
pub fn prompt_key(key: KeyEvent) -> Option<PromptKey> {
    if should_quit(key) {
        return Some(PromptKey::Quit);
    }
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }
    match key.code {
        KeyCode::Enter => Some(PromptKey::Enter),
        KeyCode::Backspace => Some(PromptKey::Backspace),
        KeyCode::Char(c) => Some(PromptKey::Char(c)),
        _ => None,
    }
}

/// Map keyboard input to snake commands.
///
/// Any other character key still advances the snake one tick.
pub fn snake_command(key: KeyEvent) -> Option<SnakeCommand> {
    if should_quit(key) {
        return Some(SnakeCommand::Quit);
    }
    match key.code {
        KeyCode::Up => Some(SnakeCommand::Turn(Direction::Up)),
        KeyCode::Down => Some(SnakeCommand::Turn(Direction::Down)),
        KeyCode::Left => Some(SnakeCommand::Turn(Direction::Left)),
        KeyCode::Right => Some(SnakeCommand::Turn(Direction::Right)),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(SnakeCommand::Quit),
        KeyCode::Char(c) => Some(
            Direction::from_str(c.encode_utf8(&mut [0u8; 4]))
                .map(SnakeCommand::Turn)
                .unwrap_or(SnakeCommand::Step),
        ),
        KeyCode::Enter => Some(SnakeCommand::Step),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_snake_direction_keys() {
        assert_eq!(
            snake_command(KeyEvent::from(KeyCode::Up)),
            Some(SnakeCommand::Turn(Direction::Up))
        );
        assert_eq!(
            snake_command(KeyEvent::from(KeyCode::Char('a'))),
            Some(SnakeCommand::Turn(Direction::Left))
        );
        assert_eq!(
            snake_command(KeyEvent::from(KeyCode::Char('S'))),
            Some(SnakeCommand::Turn(Direction::Down))
        );
        assert_eq!(
            snake_command(KeyEvent::from(KeyCode::Char('d'))),
            Some(SnakeCommand::Turn(Direction::Right))
        );
    }

    #[test]
    fn test_snake_other_keys_step() {
        assert_eq!(
            snake_command(KeyEvent::from(KeyCode::Char('x'))),
            Some(SnakeCommand::Step)
        );
        assert_eq!(snake_command(KeyEvent::from(KeyCode::Enter)), Some(SnakeCommand::Step));
        assert_eq!(snake_command(KeyEvent::from(KeyCode::F(1))), None);
    }

    #[test]
    fn test_snake_quit_keys() {
        assert_eq!(
            snake_command(KeyEvent::from(KeyCode::Char('q'))),
            Some(SnakeCommand::Quit)
        );
        assert_eq!(snake_command(KeyEvent::from(KeyCode::Esc)), Some(SnakeCommand::Quit));
    }

    #[test]
    fn test_prompt_keys() {
        assert_eq!(
            prompt_key(KeyEvent::from(KeyCode::Char('q'))),
            Some(PromptKey::Char('q'))
        );
        assert_eq!(prompt_key(KeyEvent::from(KeyCode::Enter)), Some(PromptKey::Enter));
        assert_eq!(
            prompt_key(KeyEvent::from(KeyCode::Backspace)),
            Some(PromptKey::Backspace)
        );
        assert_eq!(prompt_key(KeyEvent::from(KeyCode::Tab)), None);
        assert_eq!(
            prompt_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT)),
            None
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert_eq!(
            prompt_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(PromptKey::Quit)
        );
    }
}
