//! Shapes module - the seven tetrominoes and their rotation frames
//!
//! Every kind has exactly four frames. A frame is an N×N occupancy grid
//! (3×3 for J, L, S, T, Z and 4×4 for I and O) and keeps the same size across
//! rotations. Frames are anchored at their top-left corner, so a piece at
//! `(x, y)` covers `(x + col, y + row)` for every occupied `(row, col)`.
//!
//! There are no wall kicks: rotating just swaps in the next frame at the same
//! anchor.

use arrayvec::ArrayVec;

use crate::error::{CoreError, Result};
use crate::types::{ColorId, Rotation, TetrominoKind};

/// Largest frame edge (the I and O frames).
pub const MAX_FRAME_SIZE: usize = 4;

/// Offset of a single occupied square relative to the frame anchor: `(dx, dy)`.
pub type MinoOffset = (i8, i8);

/// Absolute square position. Wider than the anchor so that any `i8` anchor
/// plus a frame offset stays representable.
pub type SquarePos = (i16, i16);

/// One rotation state of a tetromino.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Frame {
    size: u8,
    cells: [[bool; MAX_FRAME_SIZE]; MAX_FRAME_SIZE],
}

impl Frame {
    const fn from_3x3(grid: [[u8; 3]; 3]) -> Self {
        let mut cells = [[false; MAX_FRAME_SIZE]; MAX_FRAME_SIZE];
        let mut row = 0;
        while row < 3 {
            let mut col = 0;
            while col < 3 {
                cells[row][col] = grid[row][col] == 1;
                col += 1;
            }
            row += 1;
        }
        Self { size: 3, cells }
    }

    const fn from_4x4(grid: [[u8; 4]; 4]) -> Self {
        let mut cells = [[false; MAX_FRAME_SIZE]; MAX_FRAME_SIZE];
        let mut row = 0;
        while row < 4 {
            let mut col = 0;
            while col < 4 {
                cells[row][col] = grid[row][col] == 1;
                col += 1;
            }
            row += 1;
        }
        Self { size: 4, cells }
    }

    /// Edge length of the grid (3 or 4)
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Whether `(row, col)` is occupied. Anything outside the grid is empty.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.size() && col < self.size() && self.cells[row][col]
    }

    /// Occupied squares as `(dx, dy)` offsets, in row-major scan order.
    pub fn minos(&self) -> ArrayVec<MinoOffset, 4> {
        let mut out = ArrayVec::new();
        for row in 0..self.size() {
            for col in 0..self.size() {
                if self.cells[row][col] && !out.is_full() {
                    out.push((col as i8, row as i8));
                }
            }
        }
        out
    }

    /// Absolute positions of the occupied squares with the anchor at `(x, y)`.
    pub fn squares_at(&self, x: i8, y: i8) -> impl Iterator<Item = SquarePos> {
        self.minos()
            .into_iter()
            .map(move |(dx, dy)| (i16::from(x) + i16::from(dx), i16::from(y) + i16::from(dy)))
    }
}

/// Immutable description of one tetromino kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeDefinition {
    pub kind: TetrominoKind,
    pub frames: [Frame; 4],
    pub color: ColorId,
}

impl ShapeDefinition {
    pub fn frame(&self, rotation: Rotation) -> &Frame {
        &self.frames[rotation.index()]
    }
}

const Z_SHAPE: ShapeDefinition = ShapeDefinition {
    kind: TetrominoKind::Z,
    frames: [
        Frame::from_3x3([[1, 1, 0], [0, 1, 1], [0, 0, 0]]),
        Frame::from_3x3([[0, 0, 1], [0, 1, 1], [0, 1, 0]]),
        Frame::from_3x3([[0, 0, 0], [1, 1, 0], [0, 1, 1]]),
        Frame::from_3x3([[0, 1, 0], [1, 1, 0], [1, 0, 0]]),
    ],
    color: ColorId::Red,
};

const S_SHAPE: ShapeDefinition = ShapeDefinition {
    kind: TetrominoKind::S,
    frames: [
        Frame::from_3x3([[0, 1, 1], [1, 1, 0], [0, 0, 0]]),
        Frame::from_3x3([[0, 1, 0], [0, 1, 1], [0, 0, 1]]),
        Frame::from_3x3([[0, 0, 0], [0, 1, 1], [1, 1, 0]]),
        Frame::from_3x3([[1, 0, 0], [1, 1, 0], [0, 1, 0]]),
    ],
    color: ColorId::Green,
};

const J_SHAPE: ShapeDefinition = ShapeDefinition {
    kind: TetrominoKind::J,
    frames: [
        Frame::from_3x3([[0, 1, 0], [0, 1, 0], [1, 1, 0]]),
        Frame::from_3x3([[1, 0, 0], [1, 1, 1], [0, 0, 0]]),
        Frame::from_3x3([[0, 1, 1], [0, 1, 0], [0, 1, 0]]),
        Frame::from_3x3([[0, 0, 0], [1, 1, 1], [0, 0, 1]]),
    ],
    color: ColorId::Blue,
};

const T_SHAPE: ShapeDefinition = ShapeDefinition {
    kind: TetrominoKind::T,
    frames: [
        Frame::from_3x3([[0, 0, 0], [1, 1, 1], [0, 1, 0]]),
        Frame::from_3x3([[0, 1, 0], [1, 1, 0], [0, 1, 0]]),
        Frame::from_3x3([[0, 1, 0], [1, 1, 1], [0, 0, 0]]),
        Frame::from_3x3([[0, 1, 0], [0, 1, 1], [0, 1, 0]]),
    ],
    color: ColorId::Purple,
};

const L_SHAPE: ShapeDefinition = ShapeDefinition {
    kind: TetrominoKind::L,
    frames: [
        Frame::from_3x3([[0, 1, 0], [0, 1, 0], [0, 1, 1]]),
        Frame::from_3x3([[0, 0, 0], [1, 1, 1], [1, 0, 0]]),
        Frame::from_3x3([[1, 1, 0], [0, 1, 0], [0, 1, 0]]),
        Frame::from_3x3([[0, 0, 1], [1, 1, 1], [0, 0, 0]]),
    ],
    color: ColorId::Orange,
};

const I_SHAPE: ShapeDefinition = ShapeDefinition {
    kind: TetrominoKind::I,
    frames: [
        Frame::from_4x4([[0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0]]),
        Frame::from_4x4([[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]]),
        Frame::from_4x4([[0, 0, 1, 0], [0, 0, 1, 0], [0, 0, 1, 0], [0, 0, 1, 0]]),
        Frame::from_4x4([[0, 0, 0, 0], [0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0]]),
    ],
    color: ColorId::Aqua,
};

// O never changes, but it still carries four frames so rotation is uniform.
const O_FRAME: Frame = Frame::from_4x4([[0, 0, 0, 0], [0, 1, 1, 0], [0, 1, 1, 0], [0, 0, 0, 0]]);

const O_SHAPE: ShapeDefinition = ShapeDefinition {
    kind: TetrominoKind::O,
    frames: [O_FRAME; 4],
    color: ColorId::Yellow,
};

/// Full definition (frames and color) for a kind
pub fn definition(kind: TetrominoKind) -> &'static ShapeDefinition {
    match kind {
        TetrominoKind::I => &I_SHAPE,
        TetrominoKind::O => &O_SHAPE,
        TetrominoKind::T => &T_SHAPE,
        TetrominoKind::S => &S_SHAPE,
        TetrominoKind::Z => &Z_SHAPE,
        TetrominoKind::J => &J_SHAPE,
        TetrominoKind::L => &L_SHAPE,
    }
}

/// The four rotation frames of a kind, in rotation order
pub fn frames_for(kind: TetrominoKind) -> &'static [Frame; 4] {
    &definition(kind).frames
}

/// Frame for a kind at a rotation
pub fn get_frame(kind: TetrominoKind, rotation: Rotation) -> &'static Frame {
    definition(kind).frame(rotation)
}

/// The fixed color of a kind
pub fn color_for(kind: TetrominoKind) -> ColorId {
    definition(kind).color
}

/// Resolve a kind from its letter, failing with `InvalidShape`.
pub fn parse_kind(name: &str) -> Result<TetrominoKind> {
    TetrominoKind::from_str(name).ok_or_else(|| CoreError::InvalidShape(name.to_string()))
}

/// Resolve a kind from its numeric id (1..=7), failing with `InvalidShape`.
pub fn kind_from_id(id: u8) -> Result<TetrominoKind> {
    TetrominoKind::from_id(id).ok_or_else(|| CoreError::InvalidShape(id.to_string()))
}

/// Parse a compact piece sequence such as `"OITSZJL"`.
///
/// Whitespace and commas are ignored; every other character must be a kind
/// letter.
pub fn parse_sequence(text: &str) -> Result<Vec<TetrominoKind>> {
    text.chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| parse_kind(c.encode_utf8(&mut [0u8; 4])))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_frame_has_four_minos_and_constant_size() {
        for kind in TetrominoKind::ALL {
            let frames = frames_for(kind);
            let size = frames[0].size();
            for frame in frames {
                assert_eq!(frame.minos().len(), 4, "{kind:?}");
                assert_eq!(frame.size(), size, "{kind:?}");
            }
        }
    }

    #[test]
    fn frame_sizes() {
        assert_eq!(frames_for(TetrominoKind::I)[0].size(), 4);
        assert_eq!(frames_for(TetrominoKind::O)[0].size(), 4);
        for kind in [TetrominoKind::T, TetrominoKind::S, TetrominoKind::Z, TetrominoKind::J, TetrominoKind::L] {
            assert_eq!(frames_for(kind)[0].size(), 3);
        }
    }

    #[test]
    fn minos_are_row_major() {
        let z = get_frame(TetrominoKind::Z, Rotation::North);
        assert_eq!(z.minos().as_slice(), &[(0, 0), (1, 0), (1, 1), (2, 1)]);
        let i = get_frame(TetrominoKind::I, Rotation::North);
        assert_eq!(i.minos().as_slice(), &[(1, 0), (1, 1), (1, 2), (1, 3)]);
    }

    #[test]
    fn is_filled_outside_grid_is_empty() {
        let t = get_frame(TetrominoKind::T, Rotation::North);
        assert!(t.is_filled(1, 0));
        assert!(!t.is_filled(0, 0));
        assert!(!t.is_filled(3, 3));
        assert!(!t.is_filled(9, 1));
    }

    #[test]
    fn parse_rejects_unknown_letters() {
        assert_eq!(parse_kind("j"), Ok(TetrominoKind::J));
        assert!(matches!(parse_kind("q"), Err(CoreError::InvalidShape(s)) if s == "q"));
        assert!(matches!(kind_from_id(0), Err(CoreError::InvalidShape(_))));
        assert_eq!(
            parse_sequence("O I, t").unwrap(),
            vec![TetrominoKind::O, TetrominoKind::I, TetrominoKind::T]
        );
        assert!(parse_sequence("OIX").is_err());
    }
}
