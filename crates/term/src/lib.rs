//! Terminal front end for the tetromino game.
//!
//! Renders into a plain framebuffer rather than a widget toolkit, so every
//! board square maps to a fixed block of terminal cells and redraws can be
//! diffed glyph by glyph.

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use tui_tetromino_core as core;
pub use tui_tetromino_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use palette::{color_rgb, paint_rgb};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, TerminalRenderer};
