//! Collision detection - classifies a proposed frame placement
//!
//! Boundary checks always run before the board is consulted, so the board is
//! only ever queried for in-bounds squares. Squares above the board (`y < 0`)
//! always pass: pieces spawn there.

use crate::board::Board;
use crate::shapes::Frame;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Result of classifying a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collision {
    /// Placement is legal
    None,
    /// Some square is below the last row
    LowerBoundary,
    /// Some square is left of column 0 or right of the last column
    SideBoundary,
    /// Some square overlaps a locked square
    StackOverlap,
}

impl Collision {
    pub fn is_none(&self) -> bool {
        matches!(self, Collision::None)
    }

    /// Whether a rejected downward move means the piece has landed
    pub fn blocks_descent(&self) -> bool {
        matches!(self, Collision::LowerBoundary | Collision::StackOverlap)
    }
}

/// Classify placing `frame` with its anchor at `(x, y)`.
///
/// Precedence: `LowerBoundary` beats `SideBoundary`, which beats
/// `StackOverlap`, regardless of which square triggers each.
pub fn classify(frame: &Frame, x: i8, y: i8, board: &Board) -> Collision {
    let mut side = false;
    let mut stack = false;

    for (cx, cy) in frame.squares_at(x, y) {
        if cy >= i16::from(BOARD_HEIGHT) {
            return Collision::LowerBoundary;
        }
        if cx < 0 || cx >= i16::from(BOARD_WIDTH) {
            side = true;
            continue;
        }
        if cy < 0 {
            continue;
        }
        if !side && !stack && board.is_occupied(cx as i8, cy as i8) {
            stack = true;
        }
    }

    if side {
        Collision::SideBoundary
    } else if stack {
        Collision::StackOverlap
    } else {
        Collision::None
    }
}
