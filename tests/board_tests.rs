//! Board tests - movement, collision and row destruction

use blockfall::core::{Board, BlockId};
use blockfall::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

/// Place single blocks at `cells`, returning their ids
fn fill(board: &mut Board, cells: &[(i32, i32)], kind: PieceKind) -> Vec<BlockId> {
    let ids: Vec<BlockId> = cells
        .iter()
        .map(|&(x, y)| board.create_block(x, y, kind))
        .collect();
    board.set_squares(&ids);
    ids
}

fn fill_row(board: &mut Board, y: i32, kind: PieceKind) {
    let cells: Vec<(i32, i32)> = (0..board.width() as i32).map(|x| (x, y)).collect();
    fill(board, &cells, kind);
}

fn coords(board: &Board, ids: &[BlockId]) -> Vec<(i32, i32)> {
    ids.iter()
        .map(|id| {
            let b = board.block(*id).unwrap();
            (b.x(), b.y())
        })
        .collect()
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i32 {
        for x in 0..BOARD_WIDTH as i32 {
            assert!(board.contains(x, y), "Cell ({}, {}) should be valid", x, y);
            assert!(board.get(x, y).is_none());
        }
    }
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_board_out_of_bounds_reads_empty() {
    let board = Board::new();

    assert!(!board.contains(-1, 0));
    assert!(!board.contains(0, -1));
    assert!(!board.contains(BOARD_WIDTH as i32, 0));
    assert!(!board.contains(0, BOARD_HEIGHT as i32));

    assert!(board.get(-1, 0).is_none());
    assert!(!board.is_occupied(0, BOARD_HEIGHT as i32));
}

#[test]
fn test_set_squares_links_cell_and_block() {
    let mut board = Board::new();
    let ids = fill(&mut board, &[(5, 10), (0, 0)], PieceKind::T);

    assert_eq!(board.block_id_at(5, 10), Some(ids[0]));
    assert_eq!(board.kind_at(0, 0), Some(PieceKind::T));
    assert_eq!(board.get(5, 10).unwrap().y(), 10);
    assert!(board.is_consistent());
}

#[test]
fn test_o_piece_falls_to_floor() {
    let mut board = Board::new();
    let piece = board
        .place_piece(PieceKind::O, Rotation::Normal, 5, 18)
        .unwrap();

    // Lowest block starts on row 17, so 17 moves reach the floor.
    let mut moves = 0;
    while board.move_blocks_down(piece.blocks()) {
        moves += 1;
    }
    assert_eq!(moves, 17);
    assert_eq!(coords(&board, piece.blocks()), vec![(4, 1), (4, 0), (5, 1), (5, 0)]);
    assert_eq!(board.occupied_count(), 4);
}

#[test]
fn test_move_blocked_by_walls() {
    let mut board = Board::new();
    let piece = board
        .place_piece(PieceKind::I, Rotation::Normal, 2, 10)
        .unwrap();

    // I spans x 0..=3 at pivot 2.
    assert!(!board.move_blocks_left(piece.blocks()));
    assert_eq!(coords(&board, piece.blocks())[0], (0, 10));

    for _ in 0..6 {
        assert!(board.move_blocks_right(piece.blocks()));
    }
    assert!(!board.move_blocks_right(piece.blocks()));
    assert_eq!(coords(&board, piece.blocks())[3], (9, 10));
}

#[test]
fn test_move_blocked_by_other_blocks_is_atomic() {
    let mut board = Board::new();
    let piece = board
        .place_piece(PieceKind::T, Rotation::Normal, 5, 10)
        .unwrap();
    // Only the stem at (5, 9) would hit this block.
    fill(&mut board, &[(5, 8)], PieceKind::Z);

    let before = board.clone();
    assert!(!board.move_blocks_down(piece.blocks()));
    assert_eq!(board, before);

    // Sideways is still free.
    assert!(board.move_blocks_left(piece.blocks()));
    assert!(board.move_blocks_down(piece.blocks()));
    assert!(board.is_consistent());
}

#[test]
fn test_moving_set_may_overlap_itself() {
    let mut board = Board::new();
    let ids = fill(&mut board, &[(3, 5), (4, 5), (5, 5)], PieceKind::L);

    assert!(board.move_blocks_right(&ids));
    assert_eq!(coords(&board, &ids), vec![(4, 5), (5, 5), (6, 5)]);
    assert!(!board.is_occupied(3, 5));
    assert_eq!(board.occupied_count(), 3);
}

#[test]
fn test_destroy_full_rows_noop_without_full_rows() {
    let mut board = Board::new();
    fill(&mut board, &[(0, 0), (1, 0), (9, 5)], PieceKind::S);

    let before = board.clone();
    assert_eq!(board.destroy_full_rows(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_destroy_bottom_row_drops_row_above() {
    let mut board = Board::new();
    fill_row(&mut board, 0, PieceKind::I);
    let above = fill(&mut board, &[(2, 1), (7, 1)], PieceKind::J);

    assert_eq!(board.destroy_full_rows(), 1);

    assert_eq!(coords(&board, &above), vec![(2, 0), (7, 0)]);
    assert_eq!(board.kind_at(2, 0), Some(PieceKind::J));
    assert_eq!(board.occupied_count(), 2);
    assert!(board.is_consistent());
}

#[test]
fn test_destroy_separated_full_rows_compacts_in_order() {
    let mut board = Board::new();
    // Row layout (bottom up): full, partial A, full, full, partial B
    fill_row(&mut board, 0, PieceKind::I);
    let a = fill(&mut board, &[(1, 1)], PieceKind::T);
    fill_row(&mut board, 2, PieceKind::I);
    fill_row(&mut board, 3, PieceKind::I);
    let b = fill(&mut board, &[(8, 4), (9, 4)], PieceKind::O);

    assert_eq!(board.destroy_full_rows(), 3);

    assert_eq!(coords(&board, &a), vec![(1, 0)]);
    assert_eq!(coords(&board, &b), vec![(8, 1), (9, 1)]);
    assert_eq!(board.occupied_count(), 3);
    for y in 0..BOARD_HEIGHT {
        assert!(!board.is_row_full(y));
    }
    assert!(board.is_consistent());
}

#[test]
fn test_destroy_top_row() {
    let mut board = Board::with_dimensions(4, 4);
    fill_row(&mut board, 3, PieceKind::L);
    fill(&mut board, &[(0, 0)], PieceKind::L);

    assert_eq!(board.destroy_full_rows(), 1);
    assert_eq!(board.occupied_count(), 1);
    assert!(board.is_occupied(0, 0));
}

#[test]
fn test_released_ids_are_no_longer_live() {
    let mut board = Board::with_dimensions(4, 4);
    let ids: Vec<BlockId> = (0..4).map(|x| board.create_block(x, 0, PieceKind::Z)).collect();
    board.set_squares(&ids);

    board.destroy_full_rows();
    for id in ids {
        assert!(board.block(id).is_none());
    }
}
