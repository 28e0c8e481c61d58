//! Helpers shared by the integration tests.

#![allow(dead_code)]

use anyhow::Result;

use console_games::engine::Renderer;
use console_games::term::{View, Viewport};
use console_games::types::PromptKey;

/// Renders every frame through a view into an in-memory framebuffer.
pub struct Offscreen<V> {
    view: V,
    viewport: Viewport,
    pub frames: Vec<String>,
}

impl<V> Offscreen<V> {
    pub fn new(view: V) -> Self {
        Self {
            view,
            viewport: Viewport::new(80, 24),
            frames: Vec::new(),
        }
    }

    pub fn last_frame(&self) -> &str {
        self.frames.last().map(String::as_str).unwrap_or("")
    }
}

impl<S, V: View<S>> Renderer<S> for Offscreen<V> {
    fn render(&mut self, state: &S) -> Result<()> {
        self.frames.push(self.view.render(state, self.viewport).text());
        Ok(())
    }
}

/// Key presses that type `line` and submit it.
pub fn typed(line: &str) -> Vec<PromptKey> {
    line.chars()
        .map(PromptKey::Char)
        .chain(std::iter::once(PromptKey::Enter))
        .collect()
}

/// Key presses for several submitted lines.
pub fn typed_lines(lines: &[&str]) -> Vec<PromptKey> {
    lines.iter().flat_map(|line| typed(line)).collect()
}
