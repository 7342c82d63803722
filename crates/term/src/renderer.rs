//! TerminalRenderer: pushes framebuffers to the real terminal.
//!
//! The first frame (and any frame after a resize) is a full redraw. After
//! that only runs of changed glyphs are sent.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::core::{GameSnapshot, Renderer};
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::game_view::{GameView, Viewport};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    view: GameView,
    /// What the terminal currently shows
    shown: Option<FrameBuffer>,
    /// Scratch frame the view draws into
    scratch: FrameBuffer,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new(view: GameView) -> Self {
        Self {
            stdout: io::stdout(),
            view,
            shown: None,
            scratch: FrameBuffer::default(),
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush()
    }

    /// Undo [`enter`](Self::enter). Safe to call after a failed frame.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Forget the shown frame so the next draw repaints everything.
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Send `frame` to the terminal and keep it as the shown frame.
    ///
    /// `frame` gets the previously shown buffer back so the caller can reuse
    /// its allocation.
    pub fn present(&mut self, frame: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        match self.shown.as_mut() {
            Some(shown) if shown.same_size(frame) => {
                encode_diff_into(shown, frame, &mut self.buf)?;
                std::mem::swap(shown, frame);
            }
            _ => {
                encode_full_into(frame, &mut self.buf)?;
                let previous = self.shown.replace(std::mem::take(frame));
                *frame = previous.unwrap_or_default();
            }
        }
        self.flush()
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Renderer for TerminalRenderer {
    type Error = anyhow::Error;

    fn render(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        let (width, height) = terminal::size()?;
        let mut frame = std::mem::take(&mut self.scratch);
        self.view
            .render_into(snapshot, Viewport::new(width, height), &mut frame);
        let result = self.present(&mut frame);
        self.scratch = frame;
        result
    }
}

/// Encode a full repaint of `fb` into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut style = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        encode_run(fb.row(y), &mut style, out)?;
    }
    out.queue(ResetColor)?;
    Ok(())
}

/// Encode only the runs of glyphs that differ between `prev` and `next`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut style = None;
    for (x, y, len) in changed_runs(prev, next) {
        out.queue(cursor::MoveTo(x, y))?;
        let row = next.row(y);
        encode_run(&row[x as usize..(x + len) as usize], &mut style, out)?;
    }
    out.queue(ResetColor)?;
    Ok(())
}

/// `(x, y, len)` for every horizontal run of changed glyphs.
pub fn changed_runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<(u16, u16, u16)> {
    let mut runs = Vec::new();
    if !prev.same_size(next) {
        runs.extend((0..next.height()).map(|y| (0, y, next.width())));
        return runs;
    }

    for y in 0..next.height() {
        let pairs = prev.row(y).iter().zip(next.row(y));
        let mut start: Option<u16> = None;
        for (x, (a, b)) in pairs.enumerate() {
            let x = x as u16;
            match (a != b, start) {
                (true, None) => start = Some(x),
                (false, Some(s)) => {
                    runs.push((s, y, x - s));
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            runs.push((s, y, next.width() - s));
        }
    }
    runs
}

fn encode_run(glyphs: &[Glyph], current: &mut Option<Style>, out: &mut Vec<u8>) -> Result<()> {
    for glyph in glyphs {
        if *current != Some(glyph.style) {
            queue_style(out, glyph.style)?;
            *current = Some(glyph.style);
        }
        out.queue(Print(glyph.ch))?;
    }
    Ok(())
}

fn queue_style(out: &mut Vec<u8>, style: Style) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(to_color(style.fg)))?;
    out.queue(SetBackgroundColor(to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marked(width: u16, marks: &[(u16, u16)]) -> FrameBuffer {
        let mut fb = FrameBuffer::new(width, 2);
        for &(x, y) in marks {
            fb.put_char(x, y, 'X', Style::default());
        }
        fb
    }

    #[test]
    fn test_changed_runs_coalesce() {
        let prev = marked(6, &[]);
        let next = marked(6, &[(1, 0), (2, 0), (3, 0), (5, 1)]);
        assert_eq!(changed_runs(&prev, &next), vec![(1, 0, 3), (5, 1, 1)]);
        assert!(changed_runs(&next, &next).is_empty());
    }

    #[test]
    fn test_size_change_repaints_all_rows() {
        let prev = marked(4, &[]);
        let next = marked(6, &[]);
        assert_eq!(changed_runs(&prev, &next), vec![(0, 0, 6), (0, 1, 6)]);
    }

    #[test]
    fn test_diff_is_smaller_than_full() {
        let prev = marked(40, &[]);
        let next = marked(40, &[(7, 1)]);
        let mut full = Vec::new();
        let mut diff = Vec::new();
        encode_full_into(&next, &mut full).unwrap();
        encode_diff_into(&prev, &next, &mut diff).unwrap();
        assert!(!diff.is_empty());
        assert!(diff.len() < full.len());
        assert!(String::from_utf8_lossy(&diff).contains('X'));
    }

    #[test]
    fn test_to_color() {
        assert_eq!(
            to_color(Rgb::new(1, 2, 3)),
            Color::Rgb { r: 1, g: 2, b: 3 }
        );
    }
}
