//! HangmanView: gallows, masked word, guessed letters and the guess prompt.

use crate::core::hangman::{Hangman, HangmanStatus};
use crate::engine::HangmanSession;
use crate::fb::FrameBuffer;
use crate::types::HANGMAN_FIGURE_PARTS;
use crate::view::{draw_prompt, reset, View, Viewport, BAD, FRAME, GOOD, HINT, TEXT, TITLE};

const BLOCK_W: u16 = 56;
const BLOCK_H: u16 = 18;

const GALLOWS_Y: u16 = 2;

/// Fixed gallows lines; the figure is drawn on top of them.
const GALLOWS: [&str; 7] = [
    "  +---+",
    "  |   |",
    "      |",
    "      |",
    "      |",
    "      |",
    "=========",
];

/// Body parts in the order they appear, as (dx, dy, char) relative to the gallows.
const FIGURE: [&[(u16, u16, char)]; HANGMAN_FIGURE_PARTS as usize] = [
    &[(2, 2, 'O')],
    &[(2, 3, '|'), (2, 4, '|')],
    &[(1, 3, '/')],
    &[(3, 3, '\\')],
    &[(1, 5, '/')],
    &[(3, 5, '\\')],
];

#[derive(Debug, Clone, Copy, Default)]
pub struct HangmanView;

fn draw_gallows(fb: &mut FrameBuffer, x: u16, y: u16, game: &Hangman) {
    for (dy, line) in GALLOWS.iter().enumerate() {
        fb.put_str(x, y + dy as u16, line, FRAME);
    }
    for part in FIGURE.iter().take(usize::from(game.stage())) {
        for &(dx, dy, ch) in part.iter() {
            fb.put_char(x + dx, y + dy, ch, BAD);
        }
    }
}

fn spaced(chars: impl Iterator<Item = char>) -> String {
    let mut out = String::new();
    for ch in chars {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

impl View<HangmanSession> for HangmanView {
    fn render_into(&self, session: &HangmanSession, viewport: Viewport, fb: &mut FrameBuffer) {
        reset(fb, viewport);
        let (x0, y0) = viewport.centre(BLOCK_W, BLOCK_H);
        let game = session.game();

        fb.put_str(x0, y0, "HANGMAN", TITLE);
        draw_gallows(fb, x0, y0 + GALLOWS_Y, game);

        let mut y = y0 + GALLOWS_Y + GALLOWS.len() as u16 + 1;
        fb.put_str(x0, y, "Word: ", TEXT);
        fb.put_str(x0 + 6, y, &spaced(game.mask().chars()), TITLE);
        y += 1;
        fb.put_str(x0, y, "Guessed Letters: ", TEXT);
        fb.put_str(x0 + 17, y, &spaced(game.guessed().iter().copied()), TEXT);
        y += 1;
        fb.put_str(x0, y, &format!("Tries Left: {}", game.tries_left()), TEXT);
        y += 2;

        let feedback_style = match game.status() {
            HangmanStatus::Won => GOOD,
            HangmanStatus::Lost => BAD,
            HangmanStatus::InProgress => TEXT,
        };
        fb.put_str(x0, y, &session.feedback().to_string(), feedback_style);
        y += 1;

        if session.is_over() {
            if !game.is_revealed() {
                fb.put_str(x0, y, &format!("The word was: {}", game.secret()), TEXT);
            }
            fb.put_str(x0, y + 1, "Press any key to exit.", HINT);
        } else {
            draw_prompt(
                fb,
                x0,
                y,
                "Enter your guess (a single letter): ",
                session.prompt(),
            );
            fb.put_str(x0, y + 1, "Esc quits.", HINT);
        }
    }
}
