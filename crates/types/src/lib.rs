//! Core types module - shared data structures and constants
//!
//! Pure data types with no external dependencies, usable by the game core,
//! the input layer, and the terminal renderer alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//! - **Spawn anchor**: (4, -2), rotation 0. The anchor is the top-left corner of
//!   the piece frame, so a fresh piece enters from above the visible board.
//!
//! # Colors
//!
//! | Kind | Color |
//! |------|-------|
//! | Z | red |
//! | S | green |
//! | J | blue |
//! | T | purple |
//! | L | orange |
//! | I | aqua |
//! | O | yellow |
//!
//! Vacant squares paint white and every square is outlined in black.
//!
//! # Examples
//!
//! ```
//! use tui_tetromino_types::{Command, Rotation, TetrominoKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let kind = TetrominoKind::from_str("t").unwrap();
//! assert_eq!(kind, TetrominoKind::T);
//!
//! assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
//! assert_eq!(Command::from_str("moveDown"), Some(Command::MoveDown));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Spawn anchor column
pub const SPAWN_X: i8 = 4;

/// Spawn anchor row (negative: the piece enters from above the board)
pub const SPAWN_Y: i8 = -2;

/// Default gravity interval in milliseconds (one `Tick` per second)
pub const DEFAULT_TICK_MS: u32 = 1000;

/// The seven tetromino kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TetrominoKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl TetrominoKind {
    /// All kinds, in a fixed order.
    pub const ALL: [TetrominoKind; 7] = [
        TetrominoKind::I,
        TetrominoKind::O,
        TetrominoKind::T,
        TetrominoKind::S,
        TetrominoKind::Z,
        TetrominoKind::J,
        TetrominoKind::L,
    ];

    /// Parse a kind from its letter (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_tetromino_types::TetrominoKind;
    ///
    /// assert_eq!(TetrominoKind::from_str("i"), Some(TetrominoKind::I));
    /// assert_eq!(TetrominoKind::from_str("O"), Some(TetrominoKind::O));
    /// assert_eq!(TetrominoKind::from_str("x"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "i" => Some(TetrominoKind::I),
            "o" => Some(TetrominoKind::O),
            "t" => Some(TetrominoKind::T),
            "s" => Some(TetrominoKind::S),
            "z" => Some(TetrominoKind::Z),
            "j" => Some(TetrominoKind::J),
            "l" => Some(TetrominoKind::L),
            _ => None,
        }
    }

    /// Lowercase letter
    pub fn as_str(&self) -> &'static str {
        match self {
            TetrominoKind::I => "i",
            TetrominoKind::O => "o",
            TetrominoKind::T => "t",
            TetrominoKind::S => "s",
            TetrominoKind::Z => "z",
            TetrominoKind::J => "j",
            TetrominoKind::L => "l",
        }
    }

    /// Uppercase letter for display
    pub fn letter(&self) -> char {
        match self {
            TetrominoKind::I => 'I',
            TetrominoKind::O => 'O',
            TetrominoKind::T => 'T',
            TetrominoKind::S => 'S',
            TetrominoKind::Z => 'Z',
            TetrominoKind::J => 'J',
            TetrominoKind::L => 'L',
        }
    }

    /// Strict 1..=7 id (0 is reserved for "no piece").
    pub fn id(self) -> u8 {
        match self {
            TetrominoKind::I => 1,
            TetrominoKind::O => 2,
            TetrominoKind::T => 3,
            TetrominoKind::S => 4,
            TetrominoKind::Z => 5,
            TetrominoKind::J => 6,
            TetrominoKind::L => 7,
        }
    }

    /// Inverse of [`TetrominoKind::id`]. Returns None for anything outside 1..=7.
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(TetrominoKind::I),
            2 => Some(TetrominoKind::O),
            3 => Some(TetrominoKind::T),
            4 => Some(TetrominoKind::S),
            5 => Some(TetrominoKind::Z),
            6 => Some(TetrominoKind::J),
            7 => Some(TetrominoKind::L),
            _ => None,
        }
    }
}

/// Fill color of a locked or falling square.
///
/// Each tetromino kind owns exactly one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorId {
    Red,
    Green,
    Blue,
    Purple,
    Orange,
    Aqua,
    Yellow,
}

impl ColorId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorId::Red => "red",
            ColorId::Green => "green",
            ColorId::Blue => "blue",
            ColorId::Purple => "purple",
            ColorId::Orange => "orange",
            ColorId::Aqua => "aqua",
            ColorId::Yellow => "yellow",
        }
    }
}

/// A cell on the game board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(ColorId),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self, Cell::Occupied(_))
    }

    /// Color of an occupied cell
    pub fn color(&self) -> Option<ColorId> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(color) => Some(*color),
        }
    }
}

/// Rotation states, in the order the frames are stored.
///
/// - **North**: spawn frame (index 0)
/// - **East**: frame 1
/// - **South**: frame 2
/// - **West**: frame 3
///
/// Rotation only ever advances: North → East → South → West → North.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Advance to the next frame, wrapping after West
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_tetromino_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Frame index in [0, 4)
    pub fn index(&self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Rotation for a frame index, taken modulo 4
    pub fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }
}

/// Discrete commands accepted by the game dispatcher
///
/// Human input and the gravity clock both produce these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down; locks the piece when it cannot descend
    MoveDown,
    /// Advance to the next rotation frame (no wall kicks)
    Rotate,
    /// Gravity step, same rules as `MoveDown`
    Tick,
    /// Clear the board and start over
    Restart,
}

impl Command {
    /// Parse a command from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_tetromino_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("ROTATE"), Some(Command::Rotate));
    /// assert_eq!(Command::from_str("hardDrop"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "movedown" => Some(Command::MoveDown),
            "rotate" => Some(Command::Rotate),
            "tick" => Some(Command::Tick),
            "restart" => Some(Command::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::MoveDown => "moveDown",
            Command::Rotate => "rotate",
            Command::Tick => "tick",
            Command::Restart => "restart",
        }
    }
}

/// What a single drawn square is filled or outlined with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paint {
    /// Empty square (white)
    Vacant,
    /// Square border (black)
    Outline,
    /// A piece color
    Block(ColorId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_ids_roundtrip_and_reject_unknown() {
        for kind in TetrominoKind::ALL {
            assert_eq!(TetrominoKind::from_id(kind.id()), Some(kind));
            assert_eq!(TetrominoKind::from_str(kind.as_str()), Some(kind));
            assert_eq!(kind.letter().to_string(), kind.as_str().to_ascii_uppercase());
        }
        assert_eq!(TetrominoKind::from_id(0), None);
        assert_eq!(TetrominoKind::from_id(8), None);
    }

    #[test]
    fn rotation_index_wraps() {
        assert_eq!(Rotation::from_index(4), Rotation::North);
        assert_eq!(Rotation::from_index(7).index(), 3);
        let mut r = Rotation::North;
        for _ in 0..4 {
            r = r.rotate_cw();
        }
        assert_eq!(r, Rotation::North);
    }

    #[test]
    fn cell_color() {
        assert_eq!(Cell::default(), Cell::Empty);
        assert_eq!(Cell::Occupied(ColorId::Aqua).color(), Some(ColorId::Aqua));
        assert!(Cell::Empty.color().is_none());
    }

    #[test]
    fn spawn_defaults_match_entry_above_board() {
        assert_eq!((SPAWN_X, SPAWN_Y), (4, -2));
        assert_eq!(DEFAULT_TICK_MS, 1000);
    }
}
