//! Error kinds raised by the core.
//!
//! Both variants signal a programming mistake rather than a game event:
//! blocked moves are reported through [`crate::Collision`] and
//! [`crate::Outcome`], and game over is a [`crate::GameStatus`].

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// An identifier that does not name one of the seven tetrominoes.
    #[error("shape {0:?} is not a valid shape")]
    InvalidShape(String),

    /// A board query outside the grid.
    #[error("cell ({x}, {y}) is outside the {width}x{height} board")]
    OutOfBounds { x: i8, y: i8, width: u8, height: u8 },
}

pub type Result<T> = std::result::Result<T, CoreError>;
