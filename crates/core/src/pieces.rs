//! Pieces module - per-shape rotation offset tables
//!
//! Each shape has one entry per rotation state. An entry holds the x and y
//! offsets of the four blocks from the shape's pivot, indexed by block
//! position. Rotating moves every block from its old offset to its new one
//! while the pivot stays fixed. There are no wall kicks.

use crate::block::Coord;
use crate::types::{PieceKind, Rotation, PIECE_BLOCKS};

/// Block offsets from the pivot for one shape in one rotation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeOffsets {
    pub dx: [Coord; PIECE_BLOCKS],
    pub dy: [Coord; PIECE_BLOCKS],
}

impl ShapeOffsets {
    const fn new(dx: [Coord; PIECE_BLOCKS], dy: [Coord; PIECE_BLOCKS]) -> Self {
        Self { dx, dy }
    }

    /// Absolute cells of the four blocks around pivot `(px, py)`
    pub fn cells(&self, px: Coord, py: Coord) -> [(Coord, Coord); PIECE_BLOCKS] {
        let mut out = [(0, 0); PIECE_BLOCKS];
        for (i, cell) in out.iter_mut().enumerate() {
            *cell = (px + self.dx[i], py + self.dy[i]);
        }
        out
    }
}

/// Offsets for the four rotation states, indexed by [`Rotation::index`]
pub type RotationTable = [ShapeOffsets; 4];

const I_OFFSETS: RotationTable = [
    ShapeOffsets::new([-2, -1, 0, 1], [0, 0, 0, 0]),
    ShapeOffsets::new([0, 0, 0, 0], [1, 0, -1, -2]),
    ShapeOffsets::new([1, 0, -1, -2], [-1, -1, -1, -1]),
    ShapeOffsets::new([-1, -1, -1, -1], [-2, -1, 0, 1]),
];

const J_OFFSETS: RotationTable = [
    ShapeOffsets::new([-1, 0, 1, 1], [0, 0, 0, -1]),
    ShapeOffsets::new([0, 0, 0, -1], [1, 0, -1, -1]),
    ShapeOffsets::new([1, 0, -1, -1], [0, 0, 0, 1]),
    ShapeOffsets::new([0, 0, 0, 1], [-1, 0, 1, 1]),
];

const L_OFFSETS: RotationTable = [
    ShapeOffsets::new([-1, 0, 1, 1], [0, 0, 0, 1]),
    ShapeOffsets::new([0, 0, 0, 1], [1, 0, -1, -1]),
    ShapeOffsets::new([1, 0, -1, -1], [0, 0, 0, -1]),
    ShapeOffsets::new([0, 0, 0, -1], [-1, 0, 1, 1]),
];

/// O looks the same in every state, so rotating it never moves a block
const O_OFFSETS: RotationTable = [ShapeOffsets::new([-1, -1, 0, 0], [0, -1, 0, -1]); 4];

const S_OFFSETS: RotationTable = [
    ShapeOffsets::new([-2, -1, -1, 0], [-1, -1, 0, 0]),
    ShapeOffsets::new([-2, -2, -1, -1], [1, 0, 0, -1]),
    ShapeOffsets::new([0, -1, -1, -2], [1, 1, 0, 0]),
    ShapeOffsets::new([0, 0, -1, -1], [-1, 0, 0, 1]),
];

const T_OFFSETS: RotationTable = [
    ShapeOffsets::new([-1, 0, 1, 0], [0, 0, 0, -1]),
    ShapeOffsets::new([0, 0, 0, -1], [1, 0, -1, 0]),
    ShapeOffsets::new([1, 0, -1, 0], [0, 0, 0, 1]),
    ShapeOffsets::new([0, 0, 0, 1], [-1, 0, 1, 0]),
];

const Z_OFFSETS: RotationTable = [
    ShapeOffsets::new([-2, -1, -1, 0], [0, 0, -1, -1]),
    ShapeOffsets::new([-1, -1, -2, -2], [1, 0, 0, -1]),
    ShapeOffsets::new([0, -1, -1, -2], [0, 0, 1, 1]),
    ShapeOffsets::new([-1, -1, 0, 0], [-1, 0, 0, 1]),
];

/// Tables indexed by [`PieceKind::index`]
static OFFSETS: [RotationTable; PieceKind::COUNT] = [
    I_OFFSETS, J_OFFSETS, L_OFFSETS, O_OFFSETS, S_OFFSETS, T_OFFSETS, Z_OFFSETS,
];

/// Get the block offsets for a shape and rotation state
pub fn offsets(kind: PieceKind, rotation: Rotation) -> &'static ShapeOffsets {
    &OFFSETS[kind.index()][rotation.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distinct(cells: &[(Coord, Coord); PIECE_BLOCKS]) -> bool {
        (0..PIECE_BLOCKS).all(|i| (i + 1..PIECE_BLOCKS).all(|j| cells[i] != cells[j]))
    }

    #[test]
    fn test_every_state_has_four_distinct_cells() {
        for kind in PieceKind::ALL {
            for r in 0..4 {
                let cells = offsets(kind, Rotation::from_index(r)).cells(0, 0);
                assert!(distinct(&cells), "{kind:?} state {r} overlaps: {cells:?}");
            }
        }
    }

    #[test]
    fn test_every_state_is_connected() {
        for kind in PieceKind::ALL {
            for r in 0..4 {
                let cells = offsets(kind, Rotation::from_index(r)).cells(0, 0);
                // Each block touches at least one other block orthogonally.
                for &(x, y) in &cells {
                    let touching = cells
                        .iter()
                        .any(|&(ox, oy)| (ox - x).abs() + (oy - y).abs() == 1);
                    assert!(touching, "{kind:?} state {r} has a loose block");
                }
            }
        }
    }

    #[test]
    fn test_o_offsets_identical_in_every_state() {
        let base = offsets(PieceKind::O, Rotation::Normal);
        for r in 1..4 {
            assert_eq!(offsets(PieceKind::O, Rotation::from_index(r)), base);
        }
    }

    #[test]
    fn test_i_spawn_is_horizontal() {
        let cells = offsets(PieceKind::I, Rotation::Normal).cells(5, 18);
        assert_eq!(cells, [(3, 18), (4, 18), (5, 18), (6, 18)]);
    }
}
