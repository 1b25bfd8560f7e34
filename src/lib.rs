//! melt-tetris (workspace facade crate).
//!
//! Re-exports the member crates under `crates/` as
//! `melt_tetris::{core, engine, input, term, types}`.

pub use melt_tetris_core as core;
pub use melt_tetris_engine as engine;
pub use melt_tetris_input as input;
pub use melt_tetris_term as term;
pub use melt_tetris_types as types;
