//! SnakeView: bordered playfield with score and status lines underneath.
//!
//! Each board cell is `cell_w` terminal columns wide so the field looks
//! roughly square; the glyph goes in the first column of the cell.

use crate::core::snake::{SnakeStatus, Tick};
use crate::engine::SnakeSession;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Point;
use crate::view::{reset, View, Viewport, BAD, FRAME, GOOD, HINT, TEXT, TITLE};

const HEAD: CellStyle = CellStyle::fg(Rgb::new(120, 230, 120)).bold();
const BODY: CellStyle = CellStyle::fg(Rgb::new(80, 180, 80));
const FOOD: CellStyle = CellStyle::fg(Rgb::new(240, 90, 90)).bold();

/// Lines below the playfield: score, status and controls.
const FOOTER_H: u16 = 4;
const MIN_BLOCK_W: u16 = 44;

#[derive(Debug, Clone, Copy)]
pub struct SnakeView {
    cell_w: u16,
}

impl Default for SnakeView {
    fn default() -> Self {
        Self { cell_w: 2 }
    }
}

impl SnakeView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    pub fn cell_w(&self) -> u16 {
        self.cell_w
    }

    /// Outer size of the bordered playfield for a `width` x `height` board.
    pub fn field_size(&self, width: u16, height: u16) -> (u16, u16) {
        (width * self.cell_w + 2, height + 2)
    }

    /// Screen position of board point `p`, given the playfield's top-left corner.
    fn cell_pos(&self, field_x: u16, field_y: u16, p: Point) -> Option<(u16, u16)> {
        let x = u16::try_from(p.x).ok()?;
        let y = u16::try_from(p.y).ok()?;
        Some((field_x + 1 + x * self.cell_w, field_y + 1 + y))
    }
}

impl View<SnakeSession> for SnakeView {
    fn render_into(&self, session: &SnakeSession, viewport: Viewport, fb: &mut FrameBuffer) {
        reset(fb, viewport);
        let game = session.game();
        let (field_w, field_h) = self.field_size(game.width(), game.height());
        let block_w = field_w.max(MIN_BLOCK_W);
        let (x0, y0) = viewport.centre(block_w, field_h + 1 + FOOTER_H);

        fb.put_str(x0, y0, "SNAKE", TITLE);
        let field_y = y0 + 1;
        fb.draw_box(x0, field_y, field_w, field_h, FRAME);

        if let Some((x, y)) = game.food().and_then(|p| self.cell_pos(x0, field_y, p)) {
            fb.put_char(x, y, 'F', FOOD);
        }
        for (i, p) in game.body().enumerate() {
            if let Some((x, y)) = self.cell_pos(x0, field_y, p) {
                let (ch, style) = if i == 0 { ('O', HEAD) } else { ('o', BODY) };
                fb.put_char(x, y, ch, style);
            }
        }

        let mut y = field_y + field_h;
        let score = format!("Score: {}   Length: {}", game.score(), game.len());
        fb.put_str(x0, y, &score, TEXT);
        y += 1;

        match game.status() {
            SnakeStatus::Running => {
                if session.last_tick() == Some(Tick::AteFood) {
                    fb.put_str(x0, y, "Yum!", GOOD);
                }
                fb.put_str(
                    x0,
                    y + 1,
                    "Arrows/WASD turn, any other key steps, q quits.",
                    HINT,
                );
            }
            SnakeStatus::Over(reason) => {
                let style = if reason.is_win() { GOOD } else { BAD };
                fb.put_str(x0, y, &format!("GAME OVER! {}", reason.message()), style);
                fb.put_str(x0, y + 1, "Press any key to exit.", HINT);
            }
        }
    }
}
