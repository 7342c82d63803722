//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the rules of the game and nothing else: no terminal, no
//! keyboard, no clock. It consumes discrete [`types::Command`]s and exposes
//! board and piece state for whoever draws it.
//!
//! # Module Structure
//!
//! - [`shapes`]: the seven tetrominoes, four rotation frames each, and their colors
//! - [`board`]: 10x20 grid of locked squares
//! - [`collision`]: placement classification (floor, walls, stack)
//! - [`piece`]: the falling piece and its move/rotate transitions
//! - [`game`]: command dispatcher, lock and respawn, game over
//! - [`rng`]: shape providers (seeded uniform, scripted)
//! - [`snapshot`] and [`render`]: the read-only view handed to renderers
//!
//! # Game Rules
//!
//! - **Rotation**: next frame at the same anchor, no wall kicks; blocked rotations are dropped
//! - **Spawn**: anchor (4, -2); squares above the board never collide
//! - **Lock**: a downward move that hits the floor or the stack commits the piece
//! - **Game over**: the next piece collides at spawn, or a piece locks above row 0
//!
//! # Example
//!
//! ```
//! use tui_tetromino_core::{Game, Outcome, ScriptedShapes};
//! use tui_tetromino_types::Command;
//!
//! let mut game = Game::new(ScriptedShapes::parse("O").unwrap());
//!
//! game.apply(Command::MoveLeft);
//! game.apply(Command::Rotate);
//!
//! let mut outcome = game.apply(Command::Tick);
//! while outcome == Outcome::Moved {
//!     outcome = game.apply(Command::Tick);
//! }
//! assert!(outcome.locked());
//! assert_eq!(game.board().occupied_count(), 4);
//! ```

pub mod board;
pub mod collision;
pub mod error;
pub mod game;
pub mod piece;
pub mod render;
pub mod rng;
pub mod shapes;
pub mod snapshot;

pub use tui_tetromino_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::{classify, Collision};
pub use error::CoreError;
pub use game::{Game, GameOptions, GameOverReason, GameStatus, Outcome};
pub use piece::Piece;
pub use render::{paint_snapshot, Renderer, SquarePainter};
pub use rng::{ScriptedShapes, ShapeSource, SimpleRng, UniformShapes};
pub use shapes::{color_for, frames_for, get_frame, parse_kind, Frame, ShapeDefinition};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
