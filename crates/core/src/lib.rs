//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the falling-block game model. It has **zero dependencies**
//! on terminals, timers, or input devices:
//!
//! - **Deterministic**: seeded randomizers produce identical games
//! - **Total**: every operation returns a flag or a value, none of them fail
//! - **Allocation-free**: rows live in fixed-capacity storage
//!
//! # Module Structure
//!
//! - [`pieces`]: the piece catalog, one shape mask per kind and rotation state
//! - [`board`]: row-bitmask grid with collision, merge and row melting
//! - [`model`]: [`BoardModel`], the active piece, ticking, locking and spawning
//! - [`rng`]: next-kind randomizers (uniform and shuffled pool)
//! - [`config`]: grid size validation
//! - [`render`]: the [`Renderer`] collaborator the presentation layer implements
//! - [`solver`]: computer placement (El-Tetris board evaluation)
//!
//! # Game Rules
//!
//! - A piece spawns at anchor (3, 0) in rotation 0
//! - Each tick moves it down one row; when it cannot move it locks into the grid
//! - Full rows (except row 0) are removed and the rows above shift down
//! - Rotation cycles through the kind's states without wall kicks
//! - The game ends when a lock leaves anything in row 0
//!
//! # Example
//!
//! ```
//! use melt_tetris_core::{BoardModel, TickOutcome};
//! use melt_tetris_core::types::Direction;
//!
//! let mut model = BoardModel::seeded(12345);
//! model.move_piece(Direction::Left);
//! model.rotate();
//!
//! while let TickOutcome::Moved = model.tick() {}
//! assert!(model.board().occupied_count() > 0);
//! ```

pub mod board;
pub mod config;
pub mod model;
pub mod pieces;
pub mod render;
pub mod rng;
pub mod solver;

pub use melt_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows};
pub use config::{GridSize, GridSizeError};
pub use model::{ActivePiece, BoardModel, Placement, TickOutcome, INITIAL_NEXT_KIND};
pub use pieces::{rotation_count, rotations, shape_for, ShapeMask};
pub use render::Renderer;
pub use rng::{KindRandomizer, PoolRandomizer, SequenceRandomizer, UniformRandomizer};
pub use solver::{solve, Features, Solution};
