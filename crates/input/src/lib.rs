//! Terminal input module (engine-facing).
//!
//! Independent of any UI framework. Maps key codes to
//! [`crate::types::Command`]s through a configurable [`KeyMap`], produces
//! gravity ticks on a fixed interval with [`GravityClock`], and serializes both
//! streams through a FIFO [`CommandQueue`] so the game sees one command at a time.

pub mod bindings;
pub mod gravity;
pub mod map;
pub mod queue;

pub use tui_tetromino_types as types;

pub use bindings::KeyBindings;
pub use gravity::GravityClock;
pub use map::{parse_key_name, Controls, InputError, KeyMap};
pub use queue::CommandQueue;
