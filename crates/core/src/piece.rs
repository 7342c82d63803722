//! Active piece - the falling tetromino and its transitions
//!
//! Every transition builds a candidate placement, classifies it against the
//! board, and applies it only when the classification is [`Collision::None`].
//! A rejected transition leaves the piece untouched. The piece never locks
//! itself; it only reports that it could not descend.

use crate::board::Board;
use crate::collision::{classify, Collision};
use crate::shapes::{definition, Frame, SquarePos};
use crate::types::{ColorId, Rotation, TetrominoKind, SPAWN_X, SPAWN_Y};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: TetrominoKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
    pub color: ColorId,
}

impl Piece {
    /// Create a piece at the default spawn anchor
    pub fn new(kind: TetrominoKind) -> Self {
        Self::at(kind, SPAWN_X, SPAWN_Y)
    }

    /// Create a piece in its spawn frame with the anchor at `(x, y)`
    pub fn at(kind: TetrominoKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x,
            y,
            color: definition(kind).color,
        }
    }

    /// Frame for the current rotation
    pub fn frame(&self) -> &'static Frame {
        definition(self.kind).frame(self.rotation)
    }

    /// Absolute board positions of the occupied squares
    pub fn squares(&self) -> impl Iterator<Item = SquarePos> {
        self.frame().squares_at(self.x, self.y)
    }

    /// Classify the current placement
    pub fn collision(&self, board: &Board) -> Collision {
        classify(self.frame(), self.x, self.y, board)
    }

    /// Whether any square is still above row 0
    pub fn is_above_board(&self) -> bool {
        self.squares().any(|(_, y)| y < 0)
    }

    pub fn move_left(&mut self, board: &Board) -> Collision {
        self.try_transition(board, -1, 0, self.rotation)
    }

    pub fn move_right(&mut self, board: &Board) -> Collision {
        self.try_transition(board, 1, 0, self.rotation)
    }

    /// Move one row down. `LowerBoundary` or `StackOverlap` means the piece has
    /// landed.
    pub fn move_down(&mut self, board: &Board) -> Collision {
        self.try_transition(board, 0, 1, self.rotation)
    }

    /// Advance to the next frame at the same anchor. No wall kicks.
    pub fn rotate(&mut self, board: &Board) -> Collision {
        self.try_transition(board, 0, 0, self.rotation.rotate_cw())
    }

    fn try_transition(&mut self, board: &Board, dx: i8, dy: i8, rotation: Rotation) -> Collision {
        // An anchor at the edge of the i8 range is already far off the board.
        let Some(x) = self.x.checked_add(dx) else {
            return Collision::SideBoundary;
        };
        let Some(y) = self.y.checked_add(dy) else {
            return Collision::LowerBoundary;
        };
        let candidate = Piece {
            rotation,
            x,
            y,
            ..*self
        };
        let collision = candidate.collision(board);
        if collision.is_none() {
            *self = candidate;
        }
        collision
    }
}
