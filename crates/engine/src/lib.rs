//! Engine - the game loop around the model.
//!
//! - [`timer`]: gravity scheduling with adjustable speed and pause
//! - [`session`]: routes timer fires and player actions into the model and
//!   keeps a renderer up to date
//! - [`config`]: runtime configuration (grid, speed, seed, randomizer)

pub mod config;
pub mod session;
pub mod timer;

pub use melt_tetris_core as core;
pub use melt_tetris_types as types;

pub use config::{GameConfig, RandomizerKind};
pub use session::Session;
pub use timer::TickTimer;
