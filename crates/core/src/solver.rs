//! Solver module - computer placement of the active piece
//!
//! Every rotation state of a kind is tried in every column. The shape is
//! dropped straight down from the top row to where it rests, merged into a copy
//! of the board, and the resulting board is scored with Pierre Dellacherie's six
//! features using the El-Tetris weights. The highest score wins; ties keep the
//! first candidate in rotation-then-column order.
//!
//! Candidates that cannot enter the board at row 0 are skipped, so a blocked
//! board has no solution.

use crate::board::Board;
use crate::model::Placement;
use crate::pieces::{rotations, ShapeMask};
use crate::types::{PieceKind, MAX_GRID_WIDTH};

pub const LANDING_HEIGHT_WEIGHT: f64 = -4.500158825082766;
pub const ROWS_ELIMINATED_WEIGHT: f64 = 3.4181268101392694;
pub const ROW_TRANSITIONS_WEIGHT: f64 = -3.2178882868487753;
pub const COLUMN_TRANSITIONS_WEIGHT: f64 = -9.348695305445199;
pub const HOLES_WEIGHT: f64 = -7.899265427351652;
pub const WELL_SUMS_WEIGHT: f64 = -3.3855972247263626;

/// Board features after one candidate placement (melted rows already removed).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Features {
    /// Rows between the floor and the piece's bottom edge, plus half the piece height
    pub landing_height: f64,
    pub rows_eliminated: u32,
    /// Filled/empty changes along each row; the side walls count as filled
    pub row_transitions: u32,
    /// Filled/empty changes down each column; the floor counts as filled
    pub column_transitions: u32,
    /// Empty cells with a filled cell somewhere above them
    pub holes: u32,
    /// Sum over wells of `1 + 2 + .. + depth`
    pub well_sums: u32,
}

impl Features {
    pub fn score(&self) -> f64 {
        LANDING_HEIGHT_WEIGHT * self.landing_height
            + ROWS_ELIMINATED_WEIGHT * self.rows_eliminated as f64
            + ROW_TRANSITIONS_WEIGHT * self.row_transitions as f64
            + COLUMN_TRANSITIONS_WEIGHT * self.column_transitions as f64
            + HOLES_WEIGHT * self.holes as f64
            + WELL_SUMS_WEIGHT * self.well_sums as f64
    }
}

/// Best placement found by [`solve`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Resting placement; `y` is the landing row.
    pub placement: Placement,
    pub features: Features,
    pub score: f64,
}

/// Pick the best resting placement for `kind` on `board`.
pub fn solve(board: &Board, kind: PieceKind) -> Option<Solution> {
    let mut best: Option<Solution> = None;
    for (rotation, shape) in rotations(kind).iter().enumerate() {
        let last_x = board.width() as i8 - shape.width() as i8;
        for x in 0..=last_x {
            let Some(y) = landing_row(board, shape, x) else {
                continue;
            };
            let features = evaluate(board, shape, x, y);
            let score = features.score();
            if best.map_or(true, |b| score > b.score) {
                best = Some(Solution {
                    placement: Placement { x, y, rotation },
                    features,
                    score,
                });
            }
        }
    }
    best
}

/// Row where `shape` comes to rest when dropped from row 0 at column `x`.
pub fn landing_row(board: &Board, shape: &ShapeMask, x: i8) -> Option<i8> {
    if board.collides(shape, x, 0) {
        return None;
    }
    let mut y = 0;
    while !board.collides(shape, x, y + 1) {
        y += 1;
    }
    Some(y)
}

/// Features of the board after locking `shape` at `(x, y)` and melting.
pub fn evaluate(board: &Board, shape: &ShapeMask, x: i8, y: i8) -> Features {
    let mut after = board.clone();
    after.merge(shape, x, y);
    let rows_eliminated = after.clear_full_rows().len() as u32;

    let height = shape.height() as f64;
    let above_floor = board.height() as f64 - (y as f64 + height);

    Features {
        landing_height: above_floor + (height - 1.0) / 2.0,
        rows_eliminated,
        row_transitions: row_transitions(&after),
        column_transitions: column_transitions(&after),
        holes: holes(&after),
        well_sums: well_sums(&after),
    }
}

/// Row bits shifted up one, with filled wall cells at bit 0 and bit `width + 1`.
#[inline]
fn walled(row: u32, width: u8) -> u64 {
    ((row as u64) << 1) | 1 | (1u64 << (width + 1))
}

fn row_transitions(board: &Board) -> u32 {
    let width = board.width();
    let pairs = (1u64 << (width + 1)) - 1;
    board
        .rows()
        .iter()
        .map(|&row| {
            let w = walled(row, width);
            ((w ^ (w >> 1)) & pairs).count_ones()
        })
        .sum()
}

fn column_transitions(board: &Board) -> u32 {
    let rows = board.rows();
    let Some(&bottom) = rows.last() else {
        return 0;
    };
    // Open ceiling above row 0, solid floor below the last row.
    let ceiling = rows.first().map_or(0, |r| r.count_ones());
    let floor = (!bottom & board.full_row_mask()).count_ones();
    let inner: u32 = rows.windows(2).map(|p| (p[0] ^ p[1]).count_ones()).sum();
    ceiling + inner + floor
}

fn holes(board: &Board) -> u32 {
    let mut covered = 0u32;
    let mut holes = 0;
    for &row in board.rows() {
        holes += (covered & !row).count_ones();
        covered |= row;
    }
    holes
}

fn well_sums(board: &Board) -> u32 {
    let width = board.width();
    let mut depth = [0u32; MAX_GRID_WIDTH as usize];
    let mut sum = 0;
    for &row in board.rows() {
        let w = walled(row, width);
        // Empty cell with filled neighbours (or walls) on both sides.
        let wells = !(w >> 1) & w & (w >> 2);
        for (x, d) in depth.iter_mut().enumerate().take(width as usize) {
            if (wells >> x) & 1 == 1 {
                *d += 1;
            } else {
                sum += *d * (*d + 1) / 2;
                *d = 0;
            }
        }
    }
    sum + depth.iter().map(|d| d * (d + 1) / 2).sum::<u32>()
}
