//! Terminal tetromino game (workspace facade crate).
//!
//! Game rules live in `tui_tetromino_core`, key handling and gravity timing in
//! `tui_tetromino_input`, terminal drawing in `tui_tetromino_term`. This
//! package re-exports them and adds runtime configuration and logging.

pub mod config;
pub mod logging;

pub use tui_tetromino_core as core;
pub use tui_tetromino_input as input;
pub use tui_tetromino_term as term;
pub use tui_tetromino_types as types;

pub use config::{ConfigError, GameConfig};
