//! Terminal input module (engine-facing).
//!
//! This crate is independent of the renderer. It maps `crossterm` key events
//! into [`crate::types::Move`] and reduces each tick's events to the single
//! move the session controller consumes.

pub mod map;
pub mod processor;

pub use blockfall_types as types;

pub use map::{is_close, map_key};
pub use processor::{resolve_moves, InputProcessor, TickInput};
