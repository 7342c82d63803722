//! Collision classification tests

use tui_tetromino::core::{classify, get_frame, Board, Collision};
use tui_tetromino::types::{Cell, ColorId, Rotation, TetrominoKind};

fn frame(kind: TetrominoKind) -> &'static tui_tetromino::core::Frame {
    get_frame(kind, Rotation::North)
}

#[test]
fn test_free_placement() {
    let board = Board::new();
    assert_eq!(classify(frame(TetrominoKind::T), 3, 5, &board), Collision::None);
}

#[test]
fn test_squares_above_board_pass() {
    let mut board = Board::new();
    for x in 0..10 {
        board.set(x, 0, Cell::Occupied(ColorId::Red));
    }
    // I north covers column 5, rows -5..=-2.
    assert_eq!(classify(frame(TetrominoKind::I), 4, -5, &board), Collision::None);
    // One lower reaches row -1; still clear. Two lower touches row 0.
    assert_eq!(classify(frame(TetrominoKind::I), 4, -4, &board), Collision::None);
    assert_eq!(
        classify(frame(TetrominoKind::I), 4, -3, &board),
        Collision::StackOverlap
    );
}

#[test]
fn test_floor() {
    let board = Board::new();
    // T north bottom row is frame row 2: y = 17 puts it on row 19.
    assert_eq!(classify(frame(TetrominoKind::T), 3, 17, &board), Collision::None);
    assert_eq!(
        classify(frame(TetrominoKind::T), 3, 18, &board),
        Collision::LowerBoundary
    );
}

#[test]
fn test_walls() {
    let board = Board::new();
    // T north spans frame columns 0..=2.
    assert_eq!(classify(frame(TetrominoKind::T), 0, 5, &board), Collision::None);
    assert_eq!(
        classify(frame(TetrominoKind::T), -1, 5, &board),
        Collision::SideBoundary
    );
    assert_eq!(classify(frame(TetrominoKind::T), 7, 5, &board), Collision::None);
    assert_eq!(
        classify(frame(TetrominoKind::T), 8, 5, &board),
        Collision::SideBoundary
    );
}

#[test]
fn test_side_boundary_above_the_board() {
    let board = Board::new();
    assert_eq!(
        classify(frame(TetrominoKind::T), -1, -2, &board),
        Collision::SideBoundary
    );
    // T north at (8, -4) sits wholly in rows -3 and -2, one column past the
    // right wall. The walls still apply there.
    assert_eq!(
        classify(frame(TetrominoKind::T), 8, -4, &board),
        Collision::SideBoundary
    );
    assert_eq!(classify(frame(TetrominoKind::T), 7, -4, &board), Collision::None);
}

#[test]
fn test_precedence() {
    let mut board = Board::new();
    board.set(1, 19, Cell::Occupied(ColorId::Blue));

    // T at (-1, 18): row 19 has a square outside the left wall and one on the
    // stack, and row 20 is below the floor. The floor wins.
    assert_eq!(
        classify(frame(TetrominoKind::T), -1, 18, &board),
        Collision::LowerBoundary
    );
    // One row up the wall beats the stack.
    board.set(0, 18, Cell::Occupied(ColorId::Blue));
    assert_eq!(
        classify(frame(TetrominoKind::T), -1, 17, &board),
        Collision::SideBoundary
    );
    assert_eq!(
        classify(frame(TetrominoKind::T), 0, 17, &board),
        Collision::StackOverlap
    );
}

#[test]
fn test_blocks_descent() {
    assert!(Collision::LowerBoundary.blocks_descent());
    assert!(Collision::StackOverlap.blocks_descent());
    assert!(!Collision::SideBoundary.blocks_descent());
    assert!(!Collision::None.blocks_descent());
}
