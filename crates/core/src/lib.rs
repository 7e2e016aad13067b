//! Core rules engine - pure, deterministic, and testable
//!
//! This crate holds every rule of the game: the grid, the pieces and their
//! rotation tables, row destruction, scoring and the session controller. It
//! does no I/O; time and the shape sequence are injected through the
//! [`Clock`] and [`ShapeRng`] traits, so a seeded session replays exactly.
//!
//! # Module Structure
//!
//! - [`block`]: a single coloured cell and its arena id
//! - [`piece`]: the four block ids of the active piece plus its rotation state
//! - [`pieces`]: per-shape rotation offset tables
//! - [`board`]: the grid, atomic moves and rotations, row destruction
//! - [`game`]: the session controller (dispatch, automatic fall, lock, spawn)
//! - [`clock`] and [`rng`]: injected sources
//! - [`config`]: session parameters and their validation
//! - [`snapshot`]: read-only view for renderers
//!
//! # Game Rules
//!
//! - Pieces spawn at the top centre in the Normal state
//! - Rotation moves each block between table offsets around a fixed pivot,
//!   with no wall kicks
//! - A piece falls one row whenever more than the fall interval has passed
//! - A piece that cannot fall locks, full rows are destroyed and each one
//!   scores 20 points
//! - The game ends when a new piece cannot spawn
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Game, GameConfig, ManualClock, ScriptedShapes};
//! use blockfall_core::types::{Move, PieceKind};
//!
//! let clock = ManualClock::new();
//! let mut game = Game::with_sources(
//!     GameConfig::default(),
//!     clock.clone(),
//!     ScriptedShapes::repeat(PieceKind::O),
//! )
//! .unwrap();
//!
//! game.update(Move::MoveLeft);
//! clock.advance_ms(1001);
//! game.update(Move::NoMove);
//!
//! assert!(game.is_running());
//! assert_eq!(game.score(), 0);
//! ```

pub mod block;
pub mod board;
pub mod clock;
pub mod config;
pub mod game;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use block::{Block, BlockId, Coord};
pub use board::Board;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ConfigError, GameConfig};
pub use game::Game;
pub use piece::Piece;
pub use pieces::{offsets, ShapeOffsets};
pub use rng::{seed_from_time, ScriptedShapes, ShapeRng, SimpleRng};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
