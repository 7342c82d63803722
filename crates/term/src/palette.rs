//! Paint to terminal color mapping.

use crate::fb::Rgb;
use crate::types::{ColorId, Paint};

pub const fn color_rgb(color: ColorId) -> Rgb {
    match color {
        ColorId::Red => Rgb::new(255, 0, 0),
        ColorId::Green => Rgb::new(0, 128, 0),
        ColorId::Blue => Rgb::new(0, 0, 255),
        ColorId::Purple => Rgb::new(128, 0, 128),
        ColorId::Orange => Rgb::new(255, 165, 0),
        ColorId::Aqua => Rgb::new(0, 255, 255),
        ColorId::Yellow => Rgb::new(255, 255, 0),
    }
}

/// Vacant squares are white and outlines black.
pub const fn paint_rgb(paint: Paint) -> Rgb {
    match paint {
        Paint::Vacant => Rgb::WHITE,
        Paint::Outline => Rgb::BLACK,
        Paint::Block(color) => color_rgb(color),
    }
}
