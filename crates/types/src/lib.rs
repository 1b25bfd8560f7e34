//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (model logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! Default playfield dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn anchor**: (3, 0), the top-left corner of the piece's shape mask
//!
//! Grids may be resized at construction time within
//! [`MIN_GRID_SIZE`]..=[`MAX_GRID_WIDTH`] columns and
//! [`MIN_GRID_SIZE`]..=[`MAX_GRID_HEIGHT`] rows.
//!
//! # Speed
//!
//! Gravity is driven by an external timer. Speed is an integer in
//! [`MIN_SPEED`]..=[`MAX_SPEED`]; the timer interval is `1000 / speed` milliseconds.
//!
//! | Speed | Interval |
//! |-------|----------|
//! | 1     | 1000ms   |
//! | 16    | 62ms     |
//! | 100   | 10ms     |
//!
//! # Examples
//!
//! ```
//! use melt_tetris_types::{Direction, GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//! assert_eq!(kind.index(), 1);
//!
//! assert_eq!(Direction::from_str("left"), Some(Direction::Left));
//! assert_eq!(Direction::from_str("up"), None);
//!
//! assert_eq!(GameAction::MoveLeft.direction(), Some(Direction::Left));
//! assert_eq!(GameAction::Rotate.direction(), None);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Default board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Default board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Smallest accepted width or height.
pub const MIN_GRID_SIZE: u8 = 8;

/// Widest accepted grid; each row is stored as a `u32` bitmask.
pub const MAX_GRID_WIDTH: u8 = 32;

/// Tallest accepted grid (fixed-capacity row storage).
pub const MAX_GRID_HEIGHT: usize = 64;

/// Spawn anchor column for new pieces.
pub const SPAWN_X: i8 = 3;

/// Spawn anchor row for new pieces.
pub const SPAWN_Y: i8 = 0;

/// Default speed (ticks per second).
pub const DEFAULT_SPEED: u32 = 16;

/// Slowest speed (1 tick per second).
pub const MIN_SPEED: u32 = 1;

/// Fastest speed (100 ticks per second).
pub const MAX_SPEED: u32 = 100;

/// Default on-screen cell size in terminal columns (2 compensates glyph aspect ratio).
pub const DEFAULT_CELL_SIZE: u16 = 2;

/// Widest accepted on-screen cell.
pub const MAX_CELL_SIZE: u16 = 8;

/// Active piece colour.
pub const ACTIVE_COLOR: Rgb = Rgb::new(0x00, 0xff, 0x00);

/// Locked cell colour.
pub const LOCKED_COLOR: Rgb = Rgb::new(0xff, 0x00, 0x00);

/// Grid line colour.
pub const GRID_COLOR: Rgb = Rgb::new(0xee, 0xee, 0xee);

/// Timer interval in milliseconds for a given speed.
///
/// The speed is clamped to [`MIN_SPEED`]..=[`MAX_SPEED`] first.
///
/// ```
/// use melt_tetris_types::interval_ms_for_speed;
///
/// assert_eq!(interval_ms_for_speed(1), 1000);
/// assert_eq!(interval_ms_for_speed(16), 62);
/// assert_eq!(interval_ms_for_speed(0), 1000);
/// assert_eq!(interval_ms_for_speed(500), 10);
/// ```
pub fn interval_ms_for_speed(speed: u32) -> u32 {
    1000 / speed.clamp(MIN_SPEED, MAX_SPEED)
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The seven tetromino piece kinds, in catalog order.
///
/// The discriminant is the catalog index: I=0, T=1, O=2, L=3, J=4, Z=5, S=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    T,
    O,
    L,
    J,
    Z,
    S,
}

impl PieceKind {
    /// Number of piece kinds.
    pub const COUNT: usize = 7;

    /// All kinds in catalog order.
    pub const ALL: [PieceKind; PieceKind::COUNT] = [
        PieceKind::I,
        PieceKind::T,
        PieceKind::O,
        PieceKind::L,
        PieceKind::J,
        PieceKind::Z,
        PieceKind::S,
    ];

    /// Catalog index of this kind.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Kind for a catalog index, `None` when out of range.
    ///
    /// ```
    /// use melt_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_index(0), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_index(6), Some(PieceKind::S));
    /// assert_eq!(PieceKind::from_index(7), None);
    /// ```
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "t" => Some(PieceKind::T),
            "o" => Some(PieceKind::O),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "z" => Some(PieceKind::Z),
            "s" => Some(PieceKind::S),
            _ => None,
        }
    }

    /// Uppercase single-letter name
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::T => "T",
            PieceKind::O => "O",
            PieceKind::L => "L",
            PieceKind::J => "J",
            PieceKind::Z => "Z",
            PieceKind::S => "S",
        }
    }
}

/// Directions a piece can be shifted in.
///
/// There is no `Up`: the up key is reserved for rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Down,
}

impl Direction {
    /// Anchor offset `(dx, dy)` for one step in this direction.
    pub fn offset(self) -> (i8, i8) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }

    /// Parse direction from string (case-insensitive).
    ///
    /// Anything else, including `"up"`, is rejected.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }
}

/// Model lifecycle.
///
/// `PieceLocking` is only observable from inside a tick, between the failed
/// downward move and the next spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Running,
    PieceLocking,
    GameOver,
}

/// Player actions produced by the input mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Shift piece one cell left
    MoveLeft,
    /// Shift piece one cell right
    MoveRight,
    /// Shift piece one cell down
    MoveDown,
    /// Advance to the next rotation state
    Rotate,
    /// Toggle pause
    Pause,
    /// Increase gravity speed by one step
    SpeedUp,
    /// Decrease gravity speed by one step
    SpeedDown,
    /// Drop the piece straight down as far as it goes
    HardDrop,
    /// Toggle computer placement of each new piece
    ToggleAuto,
    /// Stop the game (pauses and ends the session)
    Stop,
}

impl GameAction {
    /// The shift direction for movement actions.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameAction::MoveLeft => Some(Direction::Left),
            GameAction::MoveRight => Some(Direction::Right),
            GameAction::MoveDown => Some(Direction::Down),
            _ => None,
        }
    }
}
