//! Board module - manages the game grid
//!
//! The board is a `width x height` grid where each cell is empty or holds the
//! id of the block occupying it. Blocks live in an arena owned by the board;
//! the grid and the active piece refer to them by [`BlockId`].
//!
//! Coordinates: (x, y) where x grows left to right and y grows bottom to top.
//! Row 0 is the bottom row, so "down" decreases y.
//!
//! Movement and rotation are all-or-nothing: every destination is validated
//! before anything is touched, then all source cells are cleared and all
//! blocks written in two separate passes.

use arrayvec::ArrayVec;
use log::trace;

use crate::block::{Block, BlockId, Coord};
use crate::piece::Piece;
use crate::pieces::offsets;
use crate::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH, PIECE_BLOCKS};

/// Destination cells for one move, one per moving block
type Targets = ArrayVec<(Coord, Coord), PIECE_BLOCKS>;

/// The game board
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x), row 0 first
    cells: Vec<Option<BlockId>>,
    /// Block arena; `None` marks a released slot
    blocks: Vec<Option<Block>>,
    /// Released arena slots available for reuse
    free: Vec<BlockId>,
}

impl Board {
    /// Create a new empty 10x20 board
    pub fn new() -> Self {
        Self::with_dimensions(BOARD_WIDTH, BOARD_HEIGHT)
    }

    /// Create an empty board with custom dimensions
    pub fn with_dimensions(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "board dimensions must be non-zero");
        Self {
            width,
            height,
            cells: vec![None; width * height],
            blocks: Vec::new(),
            free: Vec::new(),
        }
    }

    #[inline(always)]
    fn index(&self, x: Coord, y: Coord) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if (x, y) lies inside the grid
    pub fn contains(&self, x: Coord, y: Coord) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Id of the block occupying (x, y), if any
    pub fn block_id_at(&self, x: Coord, y: Coord) -> Option<BlockId> {
        self.index(x, y).and_then(|idx| self.cells[idx])
    }

    /// Block occupying (x, y), if any. Out of bounds reads as empty.
    pub fn get(&self, x: Coord, y: Coord) -> Option<&Block> {
        self.block_id_at(x, y).map(|id| self.block_ref(id))
    }

    /// Shape tag of the block at (x, y), for renderers
    pub fn kind_at(&self, x: Coord, y: Coord) -> Option<PieceKind> {
        self.get(x, y).map(Block::kind)
    }

    pub fn is_occupied(&self, x: Coord, y: Coord) -> bool {
        self.block_id_at(x, y).is_some()
    }

    /// Look up a block by id. Released ids return `None`.
    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.get(id.index()).and_then(Option::as_ref)
    }

    fn block_ref(&self, id: BlockId) -> &Block {
        match self.block(id) {
            Some(block) => block,
            None => panic!("block {id:?} is not live on this board"),
        }
    }

    fn block_mut(&mut self, id: BlockId) -> &mut Block {
        match self.blocks.get_mut(id.index()).and_then(Option::as_mut) {
            Some(block) => block,
            None => panic!("block {id:?} is not live on this board"),
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height {
            return false;
        }
        let start = y * self.width;
        self.cells[start..start + self.width]
            .iter()
            .all(Option::is_some)
    }

    /// Every block currently referenced by the grid, bottom row first
    pub fn occupied(&self) -> impl Iterator<Item = &Block> + '_ {
        self.cells.iter().flatten().map(|id| self.block_ref(*id))
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Add a block to the arena without placing it on the grid
    pub fn create_block(&mut self, x: Coord, y: Coord, kind: PieceKind) -> BlockId {
        let block = Block::new(x, y, kind);
        match self.free.pop() {
            Some(id) => {
                self.blocks[id.index()] = Some(block);
                id
            }
            None => {
                self.blocks.push(Some(block));
                BlockId::new(self.blocks.len() - 1)
            }
        }
    }

    fn release_block(&mut self, id: BlockId) {
        if let Some(slot) = self.blocks.get_mut(id.index()) {
            if slot.take().is_some() {
                self.free.push(id);
            }
        }
    }

    /// Write each block into the cell matching its current coordinate.
    ///
    /// Target cells must be empty or already hold a block being repositioned.
    /// A coordinate outside the grid is a programming error and panics.
    pub fn set_squares(&mut self, ids: &[BlockId]) {
        for &id in ids {
            let block = *self.block_ref(id);
            let Some(idx) = self.index(block.x(), block.y()) else {
                panic!(
                    "block {id:?} at ({}, {}) is outside the {}x{} board",
                    block.x(),
                    block.y(),
                    self.width,
                    self.height
                );
            };
            self.cells[idx] = Some(id);
        }
    }

    /// Create four blocks for `kind` in `rotation` around pivot (px, py).
    ///
    /// Returns `None` without touching the board if any cell is outside the
    /// grid or already occupied.
    pub fn place_piece(
        &mut self,
        kind: PieceKind,
        rotation: Rotation,
        px: Coord,
        py: Coord,
    ) -> Option<Piece> {
        let cells = offsets(kind, rotation).cells(px, py);
        if cells
            .iter()
            .any(|&(x, y)| !self.contains(x, y) || self.is_occupied(x, y))
        {
            return None;
        }

        let ids = cells.map(|(x, y)| self.create_block(x, y, kind));
        self.set_squares(&ids);

        let mut piece = Piece::new(ids);
        piece.set_state(rotation);
        Some(piece)
    }

    /// Check that (x, y) is inside the grid and empty or held by one of `ids`
    fn can_occupy(&self, ids: &[BlockId], x: Coord, y: Coord) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        match self.block_id_at(x, y) {
            None => true,
            Some(occupant) => ids.contains(&occupant),
        }
    }

    /// Clear every source cell, then write every block at its target.
    fn relocate(&mut self, ids: &[BlockId], targets: &Targets) {
        for &id in ids {
            let block = self.block_ref(id);
            if let Some(idx) = self.index(block.x(), block.y()) {
                self.cells[idx] = None;
            }
        }

        for (&id, &(x, y)) in ids.iter().zip(targets) {
            let block = self.block_mut(id);
            block.set_x(x);
            block.set_y(y);
        }
        self.set_squares(ids);
    }

    /// Apply `step` to every block if all destinations are free.
    fn shift_blocks(&mut self, ids: &[BlockId], step: fn(&mut Block)) -> bool {
        assert!(
            ids.len() <= PIECE_BLOCKS,
            "at most {PIECE_BLOCKS} blocks move together"
        );

        let mut targets = Targets::new();
        for &id in ids {
            let mut moved = *self.block_ref(id);
            step(&mut moved);
            if !self.can_occupy(ids, moved.x(), moved.y()) {
                return false;
            }
            targets.push((moved.x(), moved.y()));
        }

        self.relocate(ids, &targets);
        true
    }

    /// Move blocks one row down. Returns false, changing nothing, if blocked.
    pub fn move_blocks_down(&mut self, ids: &[BlockId]) -> bool {
        self.shift_blocks(ids, Block::move_down)
    }

    /// Move blocks one column right. Returns false, changing nothing, if blocked.
    pub fn move_blocks_right(&mut self, ids: &[BlockId]) -> bool {
        self.shift_blocks(ids, Block::move_right)
    }

    /// Move blocks one column left. Returns false, changing nothing, if blocked.
    pub fn move_blocks_left(&mut self, ids: &[BlockId]) -> bool {
        self.shift_blocks(ids, Block::move_left)
    }

    /// Rotate a piece's blocks one state right.
    ///
    /// Returns the new state, or `state` unchanged if the rotation is blocked.
    pub fn rotate_blocks_right(&mut self, ids: &[BlockId], state: Rotation) -> Rotation {
        self.rotate(ids, state, state.rotate_right())
    }

    /// Rotate a piece's blocks one state left.
    ///
    /// Returns the new state, or `state` unchanged if the rotation is blocked.
    pub fn rotate_blocks_left(&mut self, ids: &[BlockId], state: Rotation) -> Rotation {
        self.rotate(ids, state, state.rotate_left())
    }

    fn rotate(&mut self, ids: &[BlockId], old: Rotation, new: Rotation) -> Rotation {
        assert_eq!(
            ids.len(),
            PIECE_BLOCKS,
            "rotation tables are indexed by block position"
        );

        let kind = self.block_ref(ids[0]).kind();
        let from = offsets(kind, old);
        let to = offsets(kind, new);

        let mut targets = Targets::new();
        for (i, &id) in ids.iter().enumerate() {
            let block = self.block_ref(id);
            let x = block.x() - (from.dx[i] - to.dx[i]);
            let y = block.y() - (from.dy[i] - to.dy[i]);
            if !self.can_occupy(ids, x, y) {
                trace!(
                    "rotation {} -> {} of {} blocked at ({x}, {y})",
                    old.as_str(),
                    new.as_str(),
                    kind.as_str()
                );
                return old;
            }
            targets.push((x, y));
        }

        self.relocate(ids, &targets);
        new
    }

    /// Remove every full row and compact the rows above.
    ///
    /// Sweeps upward from row 0 carrying the number of rows destroyed so far.
    /// A full row is emptied; any other row falls by that count, one row at a
    /// time. Returns the number of rows destroyed.
    pub fn destroy_full_rows(&mut self) -> usize {
        let mut fall = 0;

        for y in 0..self.height {
            if self.is_row_full(y) {
                self.clear_row(y);
                fall += 1;
            } else {
                for step in 0..fall {
                    self.drop_row(y - step);
                }
            }
        }

        fall
    }

    /// Empty a row and release its blocks
    fn clear_row(&mut self, y: usize) {
        let start = y * self.width;
        for idx in start..start + self.width {
            if let Some(id) = self.cells[idx].take() {
                self.release_block(id);
            }
        }
    }

    /// Move every block in row `y` one row down into an empty row `y - 1`
    fn drop_row(&mut self, y: usize) {
        debug_assert!(y > 0);
        for x in 0..self.width {
            let src = y * self.width + x;
            let dst = src - self.width;
            if let Some(id) = self.cells[src].take() {
                debug_assert!(self.cells[dst].is_none(), "row {} not empty", y - 1);
                self.block_mut(id).move_down();
                self.cells[dst] = Some(id);
            }
        }
    }

    /// Check the grid invariants: every referenced block is live, reports the
    /// cell that references it, and is referenced from exactly one cell.
    pub fn is_consistent(&self) -> bool {
        let mut seen = vec![false; self.blocks.len()];
        for (idx, cell) in self.cells.iter().enumerate() {
            let Some(id) = *cell else {
                continue;
            };
            let Some(block) = self.block(id) else {
                return false;
            };
            if self.index(block.x(), block.y()) != Some(idx) || seen[id.index()] {
                return false;
            }
            seen[id.index()] = true;
        }
        true
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
