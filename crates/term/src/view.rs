//! Views map a game session into a terminal framebuffer.
//!
//! Views are pure (no I/O) and can be unit-tested by inspecting the
//! framebuffer they produce.

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Top-left corner that centres a `w` x `h` block, clamped to 0.
    pub fn centre(&self, w: u16, h: u16) -> (u16, u16) {
        (
            self.width.saturating_sub(w) / 2,
            self.height.saturating_sub(h) / 2,
        )
    }
}

/// Renders a state of type `S`.
pub trait View<S> {
    /// Render into an existing framebuffer, resizing it to the viewport.
    fn render_into(&self, state: &S, viewport: Viewport, fb: &mut FrameBuffer);

    /// Convenience helper that allocates a new framebuffer.
    fn render(&self, state: &S, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }
}

pub(crate) const TITLE: CellStyle = CellStyle::fg(Rgb::new(255, 255, 255)).bold();
pub(crate) const TEXT: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220));
pub(crate) const HINT: CellStyle = CellStyle::fg(Rgb::new(140, 140, 140)).dim();
pub(crate) const FRAME: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));
pub(crate) const GOOD: CellStyle = CellStyle::fg(Rgb::new(100, 220, 120)).bold();
pub(crate) const BAD: CellStyle = CellStyle::fg(Rgb::new(220, 80, 80)).bold();

/// Clear the framebuffer to the viewport size.
pub(crate) fn reset(fb: &mut FrameBuffer, viewport: Viewport) {
    fb.resize(viewport.width, viewport.height);
    fb.clear(CellStyle::default().into_cell(' '));
}

/// Prompt label followed by the typed text and a block cursor.
pub(crate) fn draw_prompt(fb: &mut FrameBuffer, x: u16, y: u16, label: &str, typed: &str) {
    fb.put_str(x, y, label, TEXT);
    let tx = x.saturating_add(label.chars().count() as u16);
    fb.put_str(tx, y, typed, TITLE);
    fb.put_char(tx.saturating_add(typed.chars().count() as u16), y, '▏', HINT);
}
