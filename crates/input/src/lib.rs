//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. The mapping is
//! stateless: every key press produces at most one action and holding a key
//! relies on the terminal's own auto-repeat.

pub mod map;

pub use melt_tetris_types as types;

pub use map::{handle_key_event, should_quit};
