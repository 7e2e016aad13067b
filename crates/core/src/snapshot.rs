//! Read-only view of a game session for renderers.

use crate::block::Coord;
use crate::types::{PieceKind, Rotation, Status, PIECE_BLOCKS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub cells: [(Coord, Coord); PIECE_BLOCKS],
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    /// Row-major occupancy, row 0 (the bottom row) first. Includes the active
    /// piece, whose blocks sit on the grid like any other.
    pub cells: Vec<Option<PieceKind>>,
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub status: Status,
}

impl GameSnapshot {
    /// Empty snapshot of a `width x height` board
    pub fn empty(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
            active: None,
            score: 0,
            status: Status::Running,
        }
    }

    /// Shape at (x, y); out of bounds reads as empty
    pub fn get(&self, x: usize, y: usize) -> Option<PieceKind> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells[y * self.width + x]
    }

    pub fn set(&mut self, x: usize, y: usize, kind: Option<PieceKind>) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = kind;
        }
    }

    pub fn running(&self) -> bool {
        self.status.is_running()
    }

    pub fn paused(&self) -> bool {
        self.status == Status::Paused
    }

    pub fn game_over(&self) -> bool {
        self.status == Status::GameOver
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self::empty(crate::types::BOARD_WIDTH, crate::types::BOARD_HEIGHT)
    }
}
