//! Block module - a single occupied cell of a piece
//!
//! Blocks perform no validation. Bounds and collision checks belong to the
//! [`Board`](crate::Board), which owns every block in its arena and hands out
//! [`BlockId`]s to the grid and to the active [`Piece`](crate::Piece).

use crate::types::PieceKind;

/// Signed grid coordinate. Candidate positions may fall outside the grid
/// before the board rejects them.
pub type Coord = i32;

/// Stable handle to a block in the board's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(u32);

impl BlockId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index as u32)
    }

    /// Arena slot of this block
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A block of a piece: its current cell and the shape it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    x: Coord,
    y: Coord,
    kind: PieceKind,
}

impl Block {
    pub fn new(x: Coord, y: Coord, kind: PieceKind) -> Self {
        Self { x, y, kind }
    }

    pub fn x(&self) -> Coord {
        self.x
    }

    pub fn y(&self) -> Coord {
        self.y
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Move one row toward row 0
    pub fn move_down(&mut self) {
        self.y -= 1;
    }

    pub fn move_left(&mut self) {
        self.x -= 1;
    }

    pub fn move_right(&mut self) {
        self.x += 1;
    }

    pub fn set_x(&mut self, x: Coord) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: Coord) {
        self.y = y;
    }
}
