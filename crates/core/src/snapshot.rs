use crate::game::GameStatus;
use crate::piece::Piece;
use crate::shapes::{get_frame, Frame};
use crate::types::{Cell, ColorId, Rotation, TetrominoKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: TetrominoKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
    pub color: ColorId,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
            color: value.color,
        }
    }
}

impl ActiveSnapshot {
    pub fn frame(&self) -> &'static Frame {
        get_frame(self.kind, self.rotation)
    }

    /// Absolute squares that fall inside the visible board
    pub fn visible_squares(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.frame()
            .squares_at(self.x, self.y)
            .filter(|&(x, y)| {
                (0..i16::from(BOARD_WIDTH)).contains(&x) && (0..i16::from(BOARD_HEIGHT)).contains(&y)
            })
            .map(|(x, y)| (x as u8, y as u8))
    }
}

/// Copy of everything a renderer needs: locked cells plus the falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub status: GameStatus,
    pub pieces_locked: u32,
    pub rows_cleared: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[Cell::Empty; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.active = None;
        self.status = GameStatus::Playing;
        self.pieces_locked = 0;
        self.rows_cleared = 0;
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[Cell::Empty; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            status: GameStatus::Playing,
            pieces_locked: 0,
            rows_cleared: 0,
        }
    }
}
