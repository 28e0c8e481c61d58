//! TicTacToeView: labelled 3x3 grid, feedback line and `row col` prompt.

use crate::core::tictactoe::GameStatus;
use crate::engine::TicTacToeSession;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Player, TICTACTOE_SIZE};
use crate::view::{draw_prompt, reset, View, Viewport, FRAME, HINT, TEXT, TITLE};

const BLOCK_W: u16 = 44;
const BLOCK_H: u16 = 15;

/// Grid origin inside the block: row labels sit two columns to the left.
const GRID_X: u16 = 2;
const GRID_Y: u16 = 3;

#[derive(Debug, Clone, Copy, Default)]
pub struct TicTacToeView;

impl TicTacToeView {
    /// Block-relative position of the character for cell (row, col).
    pub fn cell_origin(row: usize, col: usize) -> (u16, u16) {
        (
            GRID_X + 2 + 4 * col as u16,
            GRID_Y + 1 + 2 * row as u16,
        )
    }
}

fn mark_style(player: Player, winning: bool) -> CellStyle {
    let fg = match player {
        Player::X => Rgb::new(240, 120, 100),
        Player::O => Rgb::new(100, 170, 240),
    };
    CellStyle {
        fg,
        bg: if winning { Rgb::new(60, 60, 20) } else { Rgb::new(0, 0, 0) },
        bold: true,
        dim: false,
    }
}

impl View<TicTacToeSession> for TicTacToeView {
    fn render_into(&self, session: &TicTacToeSession, viewport: Viewport, fb: &mut FrameBuffer) {
        reset(fb, viewport);
        let (x0, y0) = viewport.centre(BLOCK_W, BLOCK_H);
        let game = session.game();
        let board = game.board();

        fb.put_str(x0, y0, "TIC-TAC-TOE", TITLE);

        // Column labels, then separator / row pairs.
        for col in 0..TICTACTOE_SIZE {
            let (cx, _) = Self::cell_origin(0, col);
            fb.put_char(x0 + cx, y0 + GRID_Y - 1, char::from(b'0' + col as u8), HINT);
        }
        let separator = "+---+---+---+";
        for row in 0..TICTACTOE_SIZE {
            let sep_y = y0 + GRID_Y + 2 * row as u16;
            fb.put_str(x0 + GRID_X, sep_y, separator, FRAME);
            fb.put_char(x0, sep_y + 1, char::from(b'0' + row as u8), HINT);
            for col in 0..=TICTACTOE_SIZE {
                fb.put_char(x0 + GRID_X + 4 * col as u16, sep_y + 1, '|', FRAME);
            }
        }
        fb.put_str(
            x0 + GRID_X,
            y0 + GRID_Y + 2 * TICTACTOE_SIZE as u16,
            separator,
            FRAME,
        );

        let winning_line = match game.status() {
            GameStatus::Won(player) => board.winning_line(player),
            _ => None,
        };
        for (idx, cell) in board.cells().iter().enumerate() {
            let Some(player) = cell else {
                continue;
            };
            let winning = winning_line.is_some_and(|line| line.contains(&idx));
            let (cx, cy) = Self::cell_origin(idx / TICTACTOE_SIZE, idx % TICTACTOE_SIZE);
            fb.put_char(x0 + cx, y0 + cy, player.symbol(), mark_style(*player, winning));
        }

        let text_y = y0 + GRID_Y + 2 * TICTACTOE_SIZE as u16 + 2;
        fb.put_str(x0, text_y, &session.feedback().to_string(), TEXT);

        if session.is_over() {
            fb.put_str(x0, text_y + 2, "Press any key to exit.", HINT);
        } else {
            let turn = format!("Player {}'s turn.", game.current_player().symbol());
            fb.put_str(x0, text_y + 1, &turn, TITLE);
            draw_prompt(
                fb,
                x0,
                text_y + 2,
                "Enter row and column (e.g., 0 2): ",
                session.prompt(),
            );
        }
        fb.put_str(x0, text_y + 3, "Esc quits.", HINT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_land_inside_the_grid() {
        let mut session = TicTacToeSession::new();
        session.submit_line("0 0");
        session.submit_line("2 1");

        let fb = TicTacToeView.render(&session, Viewport::new(BLOCK_W, BLOCK_H));
        let (x, y) = TicTacToeView::cell_origin(0, 0);
        assert_eq!(fb.get(x, y).unwrap().ch, 'X');
        let (x, y) = TicTacToeView::cell_origin(2, 1);
        assert_eq!(fb.get(x, y).unwrap().ch, 'O');
        assert_eq!(fb.row_text(GRID_Y + 1), "0 | X |   |   |");
    }

    #[test]
    fn prompt_and_turn_are_shown_while_playing() {
        let session = TicTacToeSession::new();
        let fb = TicTacToeView.render(&session, Viewport::new(BLOCK_W, BLOCK_H));
        let text = fb.text();
        assert!(text.contains("Player X's turn."));
        assert!(text.contains("Enter row and column"));
    }

    #[test]
    fn winning_line_is_highlighted() {
        let mut session = TicTacToeSession::new();
        for line in ["0 0", "1 1", "0 1", "1 0", "0 2"] {
            session.submit_line(line);
        }
        let fb = TicTacToeView.render(&session, Viewport::new(BLOCK_W, BLOCK_H));
        let (x, y) = TicTacToeView::cell_origin(0, 2);
        let cell = fb.get(x, y).unwrap();
        assert_eq!(cell.ch, 'X');
        assert_eq!(cell.style.bg, Rgb::new(60, 60, 20));

        let (x, y) = TicTacToeView::cell_origin(1, 1);
        assert_eq!(fb.get(x, y).unwrap().style.bg, Rgb::new(0, 0, 0));

        let text = fb.text();
        assert!(text.contains("Player X WINS!"));
        assert!(text.contains("Press any key to exit."));
    }
}
