//! GameView: lays a [`GameSnapshot`] out on a terminal framebuffer.
//!
//! Pure, no I/O. Board squares go through [`paint_snapshot`] so the terminal
//! draws exactly what any other square painter would.

use std::convert::Infallible;

use crate::core::{paint_snapshot, GameSnapshot, SquarePainter};
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::palette::paint_rgb;
use crate::types::{Paint, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const BACKDROP: Style = Style::new(Rgb::new(160, 160, 160), Rgb::new(24, 24, 32));
const BORDER: Style = Style::new(Rgb::new(200, 200, 200), Rgb::new(24, 24, 32));
const LABEL: Style = Style::new(Rgb::new(230, 230, 230), Rgb::new(24, 24, 32)).bold();
const BANNER: Style = Style::new(Rgb::WHITE, Rgb::BLACK).bold();

const HELP: &str = "arrows/wasd move  up/w rotate  r restart  q quit";

pub struct GameView {
    /// Terminal columns per board square (2 keeps squares roughly square).
    square_w: u16,
    show_help: bool,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            square_w: 2,
            show_help: true,
        }
    }
}

impl GameView {
    pub fn new(square_w: u16) -> Self {
        Self {
            square_w: square_w.max(1),
            ..Self::default()
        }
    }

    pub fn without_help(mut self) -> Self {
        self.show_help = false;
        self
    }

    /// Outer size of the bordered board.
    pub fn board_extent(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.square_w + 2,
            BOARD_HEIGHT as u16 + 2,
        )
    }

    /// Top-left corner of the bordered board inside `viewport`.
    pub fn board_origin(&self, viewport: Viewport) -> (u16, u16) {
        let (w, h) = self.board_extent();
        (
            viewport.width.saturating_sub(w) / 2,
            viewport.height.saturating_sub(h) / 2,
        )
    }

    /// Redraw everything into `fb`, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Glyph::new(' ', BACKDROP));

        let (left, top) = self.board_origin(viewport);
        let (w, h) = self.board_extent();
        draw_border(fb, left, top, w, h);

        let mut painter = FramePainter {
            fb,
            left: left + 1,
            top: top + 1,
            square_w: self.square_w,
        };
        match paint_snapshot(snap, &mut painter) {
            Ok(()) => {}
            Err(never) => match never {},
        }

        self.draw_stats(fb, snap, viewport, left + w + 2, top);

        if snap.game_over() {
            let mid = top + h / 2;
            center_text(fb, left, w, mid, " GAME OVER ");
            center_text(fb, left, w, mid + 1, " r to restart ");
        }

        if self.show_help && viewport.height > 0 {
            let y = viewport.height - 1;
            let x = viewport.width.saturating_sub(HELP.len() as u16) / 2;
            fb.put_str(x, y, HELP, BACKDROP);
        }
    }

    /// Allocate a framebuffer and render into it.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_stats(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, x: u16, top: u16) {
        // No room to the right of the board: skip the panel.
        if x.saturating_add(8) > viewport.width {
            return;
        }
        let rows = [
            ("PIECES", snap.pieces_locked.to_string()),
            ("ROWS", snap.rows_cleared.to_string()),
            (
                "PIECE",
                snap.active
                    .map_or_else(|| "-".to_string(), |a| a.kind.letter().to_string()),
            ),
        ];
        for (i, (label, value)) in rows.iter().enumerate() {
            let y = top + i as u16 * 3;
            fb.put_str(x, y, label, LABEL);
            fb.put_str(x, y + 1, value, BACKDROP);
        }
    }
}

struct FramePainter<'a> {
    fb: &'a mut FrameBuffer,
    left: u16,
    top: u16,
    square_w: u16,
}

impl SquarePainter for FramePainter<'_> {
    type Error = Infallible;

    /// A square is `[` .. `]` in the outline color over the fill color.
    fn draw_square(&mut self, x: u8, y: u8, fill: Paint, outline: Paint) -> Result<(), Infallible> {
        let style = Style::new(paint_rgb(outline), paint_rgb(fill));
        let px = self.left + x as u16 * self.square_w;
        let py = self.top + y as u16;
        if self.square_w == 1 {
            self.fb.put_char(px, py, ' ', style);
            return Ok(());
        }
        self.fb.fill_rect(px, py, self.square_w, 1, ' ', style);
        self.fb.put_char(px, py, '[', style);
        self.fb.put_char(px + self.square_w - 1, py, ']', style);
        Ok(())
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    let (right, bottom) = (x + w - 1, y + h - 1);
    for cx in x + 1..right {
        fb.put_char(cx, y, '─', BORDER);
        fb.put_char(cx, bottom, '─', BORDER);
    }
    for cy in y + 1..bottom {
        fb.put_char(x, cy, '│', BORDER);
        fb.put_char(right, cy, '│', BORDER);
    }
    fb.put_char(x, y, '┌', BORDER);
    fb.put_char(right, y, '┐', BORDER);
    fb.put_char(x, bottom, '└', BORDER);
    fb.put_char(right, bottom, '┘', BORDER);
}

fn center_text(fb: &mut FrameBuffer, left: u16, width: u16, y: u16, text: &str) {
    let len = text.chars().count() as u16;
    fb.put_str(left + width.saturating_sub(len) / 2, y, text, BANNER);
}
