//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! by the rules engine, the input layer and the terminal renderer alike.
//!
//! # Board Dimensions
//!
//! Default playfield dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, bottom to top)
//! - **Spawn pivot**: (`width / 2`, `height - 2`)
//!
//! Row 0 is the bottom row. Moving "down" decreases `y`.
//!
//! # Timing and Scoring
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Main loop poll interval (~60 FPS) |
//! | `FALL_INTERVAL_MS` | 1000 | Automatic fall gate |
//! | `SCORE_MULTIPLIER` | 20 | Points per destroyed row |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Move, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_index(5), Some(PieceKind::T));
//!
//! assert_eq!(Rotation::Normal.rotate_right(), Rotation::Right);
//! assert_eq!(Rotation::Normal.rotate_left(), Rotation::Left);
//!
//! assert!(Move::RotateLeft.is_piece_command());
//! assert!(!Move::Pause.is_piece_command());
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Default board width in cells (10 columns)
pub const BOARD_WIDTH: usize = 10;

/// Default board height in cells (20 rows)
pub const BOARD_HEIGHT: usize = 20;

/// Distance of the spawn pivot row below the top edge.
pub const SPAWN_ROW_OFFSET: usize = 2;

/// Number of blocks in every piece.
pub const PIECE_BLOCKS: usize = 4;

/// Main loop poll interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Automatic fall interval in milliseconds (one row per second)
pub const FALL_INTERVAL_MS: u32 = 1000;

/// Points awarded per destroyed row.
pub const SCORE_MULTIPLIER: u32 = 20;


/// The seven piece shapes
///
/// The tag is carried by every block for colour lookup and selects the
/// rotation offset table of the piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Every shape, in table order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Number of distinct shapes.
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this shape in [`PieceKind::ALL`]
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::J => 1,
            PieceKind::L => 2,
            PieceKind::O => 3,
            PieceKind::S => 4,
            PieceKind::T => 5,
            PieceKind::Z => 6,
        }
    }

    /// Inverse of [`PieceKind::index`].
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }
}

/// The four rotation states of a piece
///
/// - **Normal**: spawn orientation
/// - **Right**: one turn to the right
/// - **Inverted**: two turns
/// - **Left**: one turn to the left
///
/// The cycle goes: Normal → Right → Inverted → Left → Normal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    Normal,
    Right,
    Inverted,
    Left,
}

impl Rotation {
    /// Next state turning right, `(state + 1) mod 4`
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::Normal.rotate_right(), Rotation::Right);
    /// assert_eq!(Rotation::Left.rotate_right(), Rotation::Normal);
    /// ```
    pub fn rotate_right(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Next state turning left, `(state + 3) mod 4`
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::Normal.rotate_left(), Rotation::Left);
    /// assert_eq!(Rotation::Right.rotate_left(), Rotation::Normal);
    /// ```
    pub fn rotate_left(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Numeric state in `0..4`
    pub fn index(self) -> usize {
        match self {
            Rotation::Normal => 0,
            Rotation::Right => 1,
            Rotation::Inverted => 2,
            Rotation::Left => 3,
        }
    }

    /// State for `index mod 4`
    pub fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Rotation::Normal,
            1 => Rotation::Right,
            2 => Rotation::Inverted,
            _ => Rotation::Left,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::Normal => "normal",
            Rotation::Right => "right",
            Rotation::Inverted => "inverted",
            Rotation::Left => "left",
        }
    }
}

/// Commands delivered to the session controller once per tick
///
/// Produced by the input layer; `NoMove` means nothing was pressed and
/// `Closed` ends the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Move {
    /// Move piece one row toward row 0
    MoveDown,
    /// Move piece one column right
    MoveRight,
    /// Move piece one column left
    MoveLeft,
    /// Rotate piece one state left
    RotateLeft,
    /// Rotate piece one state right
    RotateRight,
    /// Toggle the paused state
    Pause,
    /// Nothing pressed this tick
    #[default]
    NoMove,
    /// The window or terminal was closed
    Closed,
}

impl Move {
    /// Whether this move changes the active piece.
    pub fn is_piece_command(&self) -> bool {
        matches!(
            self,
            Move::MoveDown | Move::MoveRight | Move::MoveLeft | Move::RotateLeft | Move::RotateRight
        )
    }
}

/// Lifecycle of a game session
///
/// `GameOver` and `Closed` are terminal: the first is reached when a new
/// piece cannot spawn, the second when the player closes the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Running,
    Paused,
    GameOver,
    Closed,
}

impl Status {
    /// Running or paused, i.e. not yet ended
    pub fn is_running(&self) -> bool {
        matches!(self, Status::Running | Status::Paused)
    }
}
