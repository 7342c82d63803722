//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds a color.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//!
//! The board only ever contains locked squares. The falling piece is never
//! written here until it locks.

use arrayvec::ArrayVec;

use crate::error::{CoreError, Result};
use crate::shapes::Frame;
use crate::types::{Cell, ColorId, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// A single piece can span at most four rows.
pub const MAX_CLEARED_ROWS: usize = 4;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= i16::from(BOARD_WIDTH) || y < 0 || y >= i16::from(BOARD_HEIGHT) {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Check if position lies outside the grid
    pub fn is_out_of_bounds(x: i8, y: i8) -> bool {
        x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8
    }

    /// Get cell at position (x, y)
    pub fn cell_at(&self, x: i8, y: i8) -> Result<Cell> {
        Self::index(x.into(), y.into())
            .map(|idx| self.cells[idx])
            .ok_or(CoreError::OutOfBounds {
                x,
                y,
                width: BOARD_WIDTH,
                height: BOARD_HEIGHT,
            })
    }

    /// Check if an in-bounds position is filled.
    ///
    /// Callers bounds-check first (see [`crate::collision::classify`]). Debug builds
    /// fail loudly on an out-of-range query; release builds report it as empty.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        debug_assert!(
            !Self::is_out_of_bounds(x, y),
            "is_occupied({x}, {y}) outside the board"
        );
        matches!(self.cell_at(x, y), Ok(Cell::Occupied(_)))
    }

    /// Lock a frame's occupied squares into the board with the given color.
    ///
    /// Every target square must be in bounds and empty; a successful collision
    /// check against this board guarantees that. Squares above row 0 are never
    /// valid targets.
    pub fn commit(&mut self, frame: &Frame, x: i8, y: i8, color: ColorId) {
        for (px, py) in frame.squares_at(x, y) {
            match Self::index(px, py) {
                Some(idx) => {
                    debug_assert!(
                        self.cells[idx].is_empty(),
                        "commit onto occupied cell ({px}, {py})"
                    );
                    self.cells[idx] = Cell::Occupied(color);
                }
                None => debug_assert!(false, "commit outside the board at ({px}, {py})"),
            }
        }
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(Cell::is_occupied)
    }

    /// Clear all full rows, shifting everything above them down.
    ///
    /// Returns the cleared row indices sorted bottom to top.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, MAX_CLEARED_ROWS> {
        let mut cleared = ArrayVec::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        // Two-pointer compaction, bottom to top.
        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) && !cleared.is_full() {
                cleared.push(read_y);
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                self.cells.copy_within(src..src + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(Cell::Empty);
        cleared
    }

    /// Flat row-major view of all cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(BOARD_WIDTH as usize)
    }

    /// Set cell directly. Returns false if out of bounds.
    ///
    /// Only used to stage positions in tests and benches; gameplay mutates the
    /// board through [`Board::commit`].
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x.into(), y.into()) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_occupied()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::get_frame;
    use crate::types::{Rotation, TetrominoKind};

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_cell_at_out_of_bounds() {
        let board = Board::new();
        assert_eq!(
            board.cell_at(10, 3),
            Err(CoreError::OutOfBounds {
                x: 10,
                y: 3,
                width: 10,
                height: 20
            })
        );
        assert!(board.cell_at(0, -1).is_err());
        assert_eq!(board.cell_at(9, 19), Ok(Cell::Empty));
    }

    #[test]
    fn test_commit_writes_frame_cells() {
        let mut board = Board::new();
        let t = get_frame(TetrominoKind::T, Rotation::North);
        board.commit(t, 2, 10, ColorId::Purple);

        // Row 11: x=2..=4, row 12: x=3
        for x in 2..=4 {
            assert_eq!(board.cells[11 * 10 + x], Cell::Occupied(ColorId::Purple));
        }
        assert_eq!(board.cells[12 * 10 + 3], Cell::Occupied(ColorId::Purple));
        assert_eq!(board.occupied_count(), 4);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn test_commit_overlap_panics_in_debug() {
        let mut board = Board::new();
        let o = get_frame(TetrominoKind::O, Rotation::North);
        board.commit(o, 0, 0, ColorId::Yellow);
        board.commit(o, 0, 0, ColorId::Yellow);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn test_is_occupied_out_of_bounds_panics_in_debug() {
        let board = Board::new();
        board.is_occupied(-1, 0);
    }

    #[test]
    fn test_clear_full_rows_shifts_down() {
        let mut board = Board::new();
        for x in 0..10 {
            board.set(x, 19, Cell::Occupied(ColorId::Red));
        }
        board.set(0, 18, Cell::Occupied(ColorId::Blue));

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[19]);
        assert_eq!(board.cell_at(0, 19), Ok(Cell::Occupied(ColorId::Blue)));
        assert_eq!(board.cell_at(0, 18), Ok(Cell::Empty));
        assert_eq!(board.occupied_count(), 1);
    }
}
