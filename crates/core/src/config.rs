//! Grid size validation.

use std::fmt;

use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, MAX_GRID_HEIGHT, MAX_GRID_WIDTH, MIN_GRID_SIZE};

/// Validated board dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize {
    width: u8,
    height: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridSizeError {
    TooNarrow(u8),
    TooShort(u8),
    TooWide(u8),
    TooTall(u8),
}

impl GridSizeError {
    pub fn message(self) -> &'static str {
        match self {
            GridSizeError::TooNarrow(_) => "grid width is below the minimum",
            GridSizeError::TooShort(_) => "grid height is below the minimum",
            GridSizeError::TooWide(_) => "grid width does not fit a row bitmask",
            GridSizeError::TooTall(_) => "grid height exceeds row storage",
        }
    }
}

impl fmt::Display for GridSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            GridSizeError::TooNarrow(v) => write!(f, "{} ({} < {})", self.message(), v, MIN_GRID_SIZE),
            GridSizeError::TooShort(v) => write!(f, "{} ({} < {})", self.message(), v, MIN_GRID_SIZE),
            GridSizeError::TooWide(v) => write!(f, "{} ({} > {})", self.message(), v, MAX_GRID_WIDTH),
            GridSizeError::TooTall(v) => write!(f, "{} ({} > {})", self.message(), v, MAX_GRID_HEIGHT),
        }
    }
}

impl std::error::Error for GridSizeError {}

impl GridSize {
    pub fn new(width: u8, height: u8) -> Result<Self, GridSizeError> {
        if width < MIN_GRID_SIZE {
            return Err(GridSizeError::TooNarrow(width));
        }
        if width > MAX_GRID_WIDTH {
            return Err(GridSizeError::TooWide(width));
        }
        if height < MIN_GRID_SIZE {
            return Err(GridSizeError::TooShort(height));
        }
        if height as usize > MAX_GRID_HEIGHT {
            return Err(GridSizeError::TooTall(height));
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
        }
    }
}
