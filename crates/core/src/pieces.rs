//! Pieces module - the piece catalog
//!
//! A static, immutable table of shape masks for every piece kind and rotation
//! state. Masks are shared `'static` data; pieces only ever hold an index into
//! this table.
//!
//! A mask row is a bitmask where bit `w` set means cell `(w, h)` of the shape is
//! occupied. Rows are stored top to bottom.

use crate::types::PieceKind;

/// Bitmap of occupied cells for one rotation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMask {
    rows: &'static [u32],
    width: u8,
}

impl ShapeMask {
    const fn new(rows: &'static [u32], width: u8) -> Self {
        Self { rows, width }
    }

    /// Width in cells
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Height in cells
    pub fn height(&self) -> u8 {
        self.rows.len() as u8
    }

    /// Row bitmasks, top row first
    pub fn rows(&self) -> &'static [u32] {
        self.rows
    }

    /// Row bitmask `h`, or 0 outside the shape
    pub fn row(&self, h: u8) -> u32 {
        self.rows.get(h as usize).copied().unwrap_or(0)
    }

    pub fn is_occupied(&self, w: u8, h: u8) -> bool {
        w < self.width && (self.row(h) >> w) & 1 == 1
    }

    /// Iterate occupied `(w, h)` offsets, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        let width = self.width;
        (0..self.height()).flat_map(move |h| {
            (0..width)
                .filter(move |&w| self.is_occupied(w, h))
                .map(move |w| (w, h))
        })
    }
}

static I_SHAPES: [ShapeMask; 2] = [
    ShapeMask::new(&[1, 1, 1, 1], 1),
    ShapeMask::new(&[15], 4),
];

static T_SHAPES: [ShapeMask; 4] = [
    ShapeMask::new(&[2, 7], 3),
    ShapeMask::new(&[2, 3, 2], 2),
    ShapeMask::new(&[7, 2], 3),
    ShapeMask::new(&[1, 3, 1], 2),
];

static O_SHAPES: [ShapeMask; 1] = [ShapeMask::new(&[3, 3], 2)];

static L_SHAPES: [ShapeMask; 4] = [
    ShapeMask::new(&[2, 2, 3], 2),
    ShapeMask::new(&[7, 4], 3),
    ShapeMask::new(&[3, 1, 1], 2),
    ShapeMask::new(&[1, 7], 3),
];

static J_SHAPES: [ShapeMask; 4] = [
    ShapeMask::new(&[7, 1], 3),
    ShapeMask::new(&[1, 1, 3], 2),
    ShapeMask::new(&[4, 7], 3),
    ShapeMask::new(&[3, 2, 2], 2),
];

static Z_SHAPES: [ShapeMask; 2] = [
    ShapeMask::new(&[6, 3], 3),
    ShapeMask::new(&[1, 3, 2], 2),
];

static S_SHAPES: [ShapeMask; 2] = [
    ShapeMask::new(&[3, 6], 3),
    ShapeMask::new(&[2, 3, 1], 2),
];

/// All rotation states of a kind, in rotation order.
pub fn rotations(kind: PieceKind) -> &'static [ShapeMask] {
    match kind {
        PieceKind::I => &I_SHAPES,
        PieceKind::T => &T_SHAPES,
        PieceKind::O => &O_SHAPES,
        PieceKind::L => &L_SHAPES,
        PieceKind::J => &J_SHAPES,
        PieceKind::Z => &Z_SHAPES,
        PieceKind::S => &S_SHAPES,
    }
}

/// Number of rotation states for a kind (1, 2 or 4).
pub fn rotation_count(kind: PieceKind) -> usize {
    rotations(kind).len()
}

/// Shape mask for `kind` at `rotation`.
///
/// `rotation` wraps modulo the kind's rotation count, so any index is accepted.
pub fn shape_for(kind: PieceKind, rotation: usize) -> &'static ShapeMask {
    let states = rotations(kind);
    &states[rotation % states.len()]
}
