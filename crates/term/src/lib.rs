//! Terminal renderer.
//!
//! A small, game-oriented rendering layer: a [`GameSnapshot`](core::GameSnapshot)
//! is drawn into a framebuffer of styled cells, which is then flushed to the
//! terminal row by row.
//!
//! Board cells are two columns wide to compensate for the glyph aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_color, GameView, Viewport};
pub use renderer::{changed_rows, encode_changed_rows_into, encode_full_into, TerminalRenderer};
