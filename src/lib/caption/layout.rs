//! Placement of captions within the image.

use model::{Position, MIN_OUTLINE_WIDTH, OUTLINE_WIDTH_DIVISOR, TEXT_MARGIN};
use super::text::TextBounds;


/// Compute the origin (top-left corner) where text of given bounds should be drawn.
///
/// Text is always centered horizontally. The result isn't clamped to the image,
/// so text larger than the image gets negative coordinates.
/// Halving rounds towards negative infinity.
pub fn placement(image_dims: (u32, u32), text: TextBounds, position: Position) -> (i32, i32) {
    let (width, height) = (image_dims.0 as i64, image_dims.1 as i64);
    let (text_width, text_height) = (text.width as i64, text.height as i64);

    let x = (width - text_width).div_euclid(2);
    let y = match position {
        Position::Top => TEXT_MARGIN as i64,
        Position::Bottom => height - text_height - TEXT_MARGIN as i64,
        Position::Middle => (height - text_height).div_euclid(2),
    };
    (clamp_i32(x), clamp_i32(y))
}

fn clamp_i32(v: i64) -> i32 {
    v.max(i32::min_value() as i64).min(i32::max_value() as i64) as i32
}

/// Width of the text outline, in pixels, for given font size.
#[inline]
pub fn outline_width(font_size: u32) -> u32 {
    (font_size / OUTLINE_WIDTH_DIVISOR).max(MIN_OUTLINE_WIDTH)
}

/// Offsets of the four outline copies of the text, in the order they are drawn.
pub fn outline_offsets(font_size: u32) -> Vec<(i32, i32)> {
    let w = outline_width(font_size) as i32;
    iproduct!([-w, w].iter().cloned(), [-w, w].iter().cloned()).collect()
}
