//! Renderer collaborator.
//!
//! The model never draws. Whatever presents it only needs to paint or clear a
//! single board cell; shapes and full redraws are built on top of that.

use crate::board::Board;
use crate::pieces::ShapeMask;
use crate::types::{Rgb, LOCKED_COLOR};

pub trait Renderer {
    /// Draw the empty grid (lines or background) over the whole board.
    fn draw_grid(&mut self);

    /// Paint cell `(x, y)` in `color`, or restore it to empty when `clear` is set.
    /// Cells outside the board are ignored.
    fn fill_cell(&mut self, x: i8, y: i8, color: Rgb, clear: bool);

    /// Wipe everything drawn so far.
    fn clear_surface(&mut self);

    fn draw_shape(&mut self, x: i8, y: i8, shape: &ShapeMask, color: Rgb, clear: bool) {
        for (w, h) in shape.cells() {
            self.fill_cell(x + w as i8, y + h as i8, color, clear);
        }
    }

    /// Repaint the grid and every locked cell from scratch.
    fn redraw_all(&mut self, board: &Board) {
        self.clear_surface();
        self.draw_grid();
        for (y, &row) in board.rows().iter().enumerate() {
            for x in 0..board.width() {
                if (row >> x) & 1 == 1 {
                    self.fill_cell(x as i8, y as i8, LOCKED_COLOR, false);
                }
            }
        }
    }
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn draw_grid(&mut self) {
        (**self).draw_grid()
    }

    fn fill_cell(&mut self, x: i8, y: i8, color: Rgb, clear: bool) {
        (**self).fill_cell(x, y, color, clear)
    }

    fn clear_surface(&mut self) {
        (**self).clear_surface()
    }
}
