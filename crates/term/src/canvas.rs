//! BoardCanvas: a [`Renderer`] that paints board cells into a [`FrameBuffer`].
//!
//! Layout: a one-character border around the play area, each board cell
//! `cell_size` columns wide and one row tall, and a few status lines below the
//! border. The canvas is pure (no I/O) and can be unit-tested.

use melt_tetris_core::Renderer;

use crate::fb::{CellStyle, FrameBuffer};
use crate::types::{Rgb, DEFAULT_CELL_SIZE, GRID_COLOR, MAX_CELL_SIZE};

/// Rows reserved under the board for status text.
pub const STATUS_LINES: u16 = 3;

const BLOCK: char = '█';
const GRID_DOT: char = '·';

fn background() -> Rgb {
    Rgb::new(30, 30, 40)
}

pub struct BoardCanvas {
    fb: FrameBuffer,
    cols: u8,
    rows: u8,
    cell_size: u16,
}

impl BoardCanvas {
    /// `cell_size` is clamped to `1..=MAX_CELL_SIZE`.
    pub fn new(cols: u8, rows: u8, cell_size: u16) -> Self {
        let cell_size = cell_size.clamp(1, MAX_CELL_SIZE);
        let fb = FrameBuffer::new(
            cols as u16 * cell_size + 2,
            rows as u16 + 2 + STATUS_LINES,
        );
        Self {
            fb,
            cols,
            rows,
            cell_size,
        }
    }

    /// Canvas for a board of the given size at the default cell size.
    pub fn for_board(cols: u8, rows: u8) -> Self {
        Self::new(cols, rows, DEFAULT_CELL_SIZE)
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.fb
    }

    /// Framebuffer position of the left column of board cell `(x, y)`.
    pub fn cell_origin(&self, x: i8, y: i8) -> Option<(u16, u16)> {
        if x < 0 || y < 0 || x as u8 >= self.cols || y as u8 >= self.rows {
            return None;
        }
        Some((1 + x as u16 * self.cell_size, 1 + y as u16))
    }

    /// Whether board cell `(x, y)` is painted (not showing the empty grid).
    pub fn is_painted(&self, x: i8, y: i8) -> bool {
        self.cell_origin(x, y)
            .and_then(|(fx, fy)| self.fb.get(fx, fy))
            .is_some_and(|c| c.ch == BLOCK)
    }

    /// Colour of a painted board cell.
    pub fn color_at(&self, x: i8, y: i8) -> Option<Rgb> {
        let (fx, fy) = self.cell_origin(x, y)?;
        let cell = self.fb.get(fx, fy)?;
        (cell.ch == BLOCK).then_some(cell.style.fg)
    }

    /// Replace status line `line` (0-based) with `text`.
    pub fn set_status(&mut self, line: u16, text: &str) {
        if line >= STATUS_LINES {
            return;
        }
        let y = self.rows as u16 + 2 + line;
        let blank = CellStyle::default();
        for x in 0..self.fb.width() {
            self.fb.set(x, y, blank.into_cell(' '));
        }
        self.fb.put_str(0, y, text, blank);
    }

    fn draw_border(&mut self) {
        let style = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let w = self.fb.width();
        let h = self.rows as u16 + 2;
        for x in 1..w - 1 {
            self.fb.set(x, 0, style.into_cell('─'));
            self.fb.set(x, h - 1, style.into_cell('─'));
        }
        for y in 1..h - 1 {
            self.fb.set(0, y, style.into_cell('│'));
            self.fb.set(w - 1, y, style.into_cell('│'));
        }
        self.fb.set(0, 0, style.into_cell('┌'));
        self.fb.set(w - 1, 0, style.into_cell('┐'));
        self.fb.set(0, h - 1, style.into_cell('└'));
        self.fb.set(w - 1, h - 1, style.into_cell('┘'));
    }

    fn paint(&mut self, x: i8, y: i8, ch: char, style: CellStyle) {
        let Some((fx, fy)) = self.cell_origin(x, y) else {
            return;
        };
        for dx in 0..self.cell_size {
            let glyph = if ch == GRID_DOT && dx > 0 { ' ' } else { ch };
            self.fb.set(fx + dx, fy, style.into_cell(glyph));
        }
    }
}

impl Renderer for BoardCanvas {
    fn draw_grid(&mut self) {
        self.draw_border();
        for y in 0..self.rows as i8 {
            for x in 0..self.cols as i8 {
                self.fill_cell(x, y, GRID_COLOR, true);
            }
        }
    }

    fn fill_cell(&mut self, x: i8, y: i8, color: Rgb, clear: bool) {
        if clear {
            self.paint(x, y, GRID_DOT, CellStyle::new(GRID_COLOR, background()));
        } else {
            self.paint(x, y, BLOCK, CellStyle::new(color, background()));
        }
    }

    fn clear_surface(&mut self) {
        // Status lines survive a board redraw.
        let status_top = self.rows as u16 + 2;
        let keep: Vec<_> = (0..STATUS_LINES)
            .map(|i| {
                (0..self.fb.width())
                    .filter_map(|x| self.fb.get(x, status_top + i))
                    .collect::<Vec<_>>()
            })
            .collect();
        self.fb.clear();
        for (i, row) in keep.into_iter().enumerate() {
            for (x, cell) in row.into_iter().enumerate() {
                self.fb.set(x as u16, status_top + i as u16, cell);
            }
        }
    }
}
