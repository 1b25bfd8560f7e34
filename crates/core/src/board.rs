//! Board module - manages the game grid
//!
//! The grid is stored as one bitmask per row: bit `x` of row `y` set means cell
//! `(x, y)` is occupied. Rows live in a fixed-capacity array, so the board never
//! allocates after construction.
//!
//! Coordinates: `(x, y)` where x grows left to right and y grows top to bottom.
//! Row values never exceed [`Board::full_row_mask`].

use arrayvec::ArrayVec;

use crate::config::GridSize;
use crate::pieces::ShapeMask;
use crate::types::MAX_GRID_HEIGHT;

/// Row indices removed by one [`Board::clear_full_rows`] pass, in discovery order.
pub type ClearedRows = ArrayVec<usize, MAX_GRID_HEIGHT>;

/// The game grid
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    width: u8,
    rows: ArrayVec<u32, MAX_GRID_HEIGHT>,
}

impl Board {
    /// Create a new empty board
    pub fn new(size: GridSize) -> Self {
        let mut rows = ArrayVec::new();
        for _ in 0..size.height() {
            rows.push(0);
        }
        Self {
            width: size.width(),
            rows,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.rows.len() as u8
    }

    /// Bitmask of a completely filled row (`2^width - 1`)
    #[inline(always)]
    pub fn full_row_mask(&self) -> u32 {
        u32::MAX >> (32 - self.width as u32)
    }

    /// Row bitmasks, top row first
    pub fn rows(&self) -> &[u32] {
        &self.rows
    }

    /// Row bitmask at `y`, `None` when out of bounds
    pub fn row(&self, y: usize) -> Option<u32> {
        self.rows.get(y).copied()
    }

    /// Replace row `y`; bits beyond the board width are dropped.
    /// Returns false if `y` is out of bounds.
    pub fn set_row(&mut self, y: usize, bits: u32) -> bool {
        let mask = self.full_row_mask();
        match self.rows.get_mut(y) {
            Some(row) => {
                *row = bits & mask;
                true
            }
            None => false,
        }
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        x < 0 || x >= self.width as i8 || y < 0 || y as usize >= self.rows.len()
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        if self.is_out_of_bounds(x, y) {
            return false;
        }
        (self.rows[y as usize] >> x) & 1 == 1
    }

    /// Set or clear a single cell. Returns false if out of bounds.
    pub fn set(&mut self, x: i8, y: i8, occupied: bool) -> bool {
        if self.is_out_of_bounds(x, y) {
            return false;
        }
        let bit = 1u32 << x;
        let row = &mut self.rows[y as usize];
        if occupied {
            *row |= bit;
        } else {
            *row &= !bit;
        }
        true
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y) == Some(self.full_row_mask())
    }

    /// Whether `shape` placed with its top-left corner at `(x, y)` would leave the
    /// grid or overlap an occupied cell.
    ///
    /// Rows above the grid (`y + h < 0`) are not checked.
    pub fn collides(&self, shape: &ShapeMask, x: i8, y: i8) -> bool {
        if x < 0 {
            return true;
        }
        if x as i16 > self.width as i16 - shape.width() as i16 {
            return true;
        }
        if y as i16 > self.height() as i16 - shape.height() as i16 {
            return true;
        }

        shape.rows().iter().enumerate().any(|(h, &bits)| {
            let gy = y as i16 + h as i16;
            gy >= 0 && (bits << x) & self.rows[gy as usize] != 0
        })
    }

    /// OR `shape` into the grid at `(x, y)`.
    ///
    /// Rows outside the grid and bits beyond the width are dropped.
    pub fn merge(&mut self, shape: &ShapeMask, x: i8, y: i8) {
        if x < 0 {
            return;
        }
        let mask = self.full_row_mask();
        for (h, &bits) in shape.rows().iter().enumerate() {
            let gy = y as i16 + h as i16;
            if gy < 0 {
                continue;
            }
            if let Some(row) = self.rows.get_mut(gy as usize) {
                *row |= bits.checked_shl(x as u32).unwrap_or(0) & mask;
            }
        }
    }

    /// Remove row `y` and shift every row above it down by one.
    /// A fresh empty row enters at the top. Returns false if out of bounds.
    pub fn remove_row(&mut self, y: usize) -> bool {
        if y >= self.rows.len() {
            return false;
        }
        self.rows.copy_within(0..y, 1);
        self.rows[0] = 0;
        true
    }

    /// Remove all full rows and return their indices in discovery order.
    ///
    /// Scans from the bottom row up to (but excluding) row 0. After a removal the
    /// same index is examined again, since the row above has moved into it, so
    /// two adjacent full rows at the bottom are reported as `[19, 19]` on a
    /// 20-row board.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut y = self.rows.len().saturating_sub(1);
        while y > 0 {
            if self.is_row_full(y) {
                cleared.push(y);
                self.remove_row(y);
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// Number of occupied cells on the board
    pub fn occupied_count(&self) -> u32 {
        self.rows.iter().map(|r| r.count_ones()).sum()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for row in &mut self.rows {
            *row = 0;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(GridSize::default())
    }
}
