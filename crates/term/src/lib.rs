//! Terminal presentation.
//!
//! The board is painted into an in-memory framebuffer through the core
//! [`Renderer`](melt_tetris_core::Renderer) trait, and the framebuffer is flushed
//! to the terminal with crossterm, sending only the cells that changed.
//!
//! - [`fb`]: framebuffer of styled character cells
//! - [`canvas`]: [`BoardCanvas`], a `Renderer` that draws board cells into a framebuffer
//! - [`renderer`]: [`TerminalRenderer`], raw-mode setup and diff flushing

pub mod canvas;
pub mod fb;
pub mod renderer;

pub use melt_tetris_core as core;
pub use melt_tetris_types as types;

pub use canvas::BoardCanvas;
pub use fb::{Cell, CellStyle, FrameBuffer};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
