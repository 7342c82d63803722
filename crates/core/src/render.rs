//! Render contract between the dispatcher and whatever draws the game.
//!
//! [`Renderer`] receives a full snapshot after every state-changing command.
//! Hosts that can only draw single squares implement [`SquarePainter`] and let
//! [`paint_snapshot`] walk the snapshot for them.

use std::convert::Infallible;

use crate::snapshot::GameSnapshot;
use crate::types::{Cell, Paint, BOARD_HEIGHT, BOARD_WIDTH};

/// Consumer of game snapshots.
pub trait Renderer {
    type Error;

    fn render(&mut self, snapshot: &GameSnapshot) -> Result<(), Self::Error>;
}

/// Collects every snapshot it is handed; useful for replays and tests.
impl Renderer for Vec<GameSnapshot> {
    type Error = Infallible;

    fn render(&mut self, snapshot: &GameSnapshot) -> Result<(), Infallible> {
        self.push(*snapshot);
        Ok(())
    }
}

/// Draws one board square at a time.
pub trait SquarePainter {
    type Error;

    /// Draw the square at column `x`, row `y`.
    fn draw_square(&mut self, x: u8, y: u8, fill: Paint, outline: Paint) -> Result<(), Self::Error>;
}

/// Paint every board square, then the visible squares of the active piece.
pub fn paint_snapshot<P: SquarePainter + ?Sized>(
    snapshot: &GameSnapshot,
    painter: &mut P,
) -> Result<(), P::Error> {
    for y in 0..BOARD_HEIGHT {
        for x in 0..BOARD_WIDTH {
            let fill = match snapshot.board[y as usize][x as usize] {
                Cell::Empty => Paint::Vacant,
                Cell::Occupied(color) => Paint::Block(color),
            };
            painter.draw_square(x, y, fill, Paint::Outline)?;
        }
    }

    if let Some(active) = snapshot.active {
        for (x, y) in active.visible_squares() {
            painter.draw_square(x, y, Paint::Block(active.color), Paint::Outline)?;
        }
    }

    Ok(())
}
