//! Piece module - the active group of four blocks

use crate::block::BlockId;
use crate::types::{Rotation, PIECE_BLOCKS};

/// Four blocks of one shape plus a rotation state.
///
/// Block order is significant: the rotation offset tables are indexed by
/// position. A piece has no grid knowledge; the board moves its blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    blocks: [BlockId; PIECE_BLOCKS],
    state: Rotation,
}

impl Piece {
    /// Create a piece in the `Normal` state
    pub fn new(blocks: [BlockId; PIECE_BLOCKS]) -> Self {
        Self {
            blocks,
            state: Rotation::Normal,
        }
    }

    pub fn blocks(&self) -> &[BlockId; PIECE_BLOCKS] {
        &self.blocks
    }

    pub fn state(&self) -> Rotation {
        self.state
    }

    pub fn set_state(&mut self, state: Rotation) {
        self.state = state;
    }
}
