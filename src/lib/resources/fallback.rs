//! Built-in bitmap typeface, used when no font file is available.

use std::fmt;


/// Width of a glyph cell, in font pixels.
pub const GLYPH_WIDTH: u32 = 5;
/// Height of a glyph cell, in font pixels.
pub const GLYPH_HEIGHT: u32 = 7;
/// Horizontal distance between the origins of consecutive glyphs, in font pixels.
pub const GLYPH_ADVANCE: u32 = GLYPH_WIDTH + 1;

/// Nominal point size covered by a single font pixel.
const POINTS_PER_PIXEL: u32 = 8;

/// Glyph drawn for characters outside of printable ASCII.
const MISSING_GLYPH: [u8; 5] = [0x7f, 0x41, 0x41, 0x41, 0x7f];

/// Glyphs for printable ASCII (0x20 to 0x7e), column by column.
/// Bit 0 of each column is the top row.
const ASCII_GLYPHS: [[u8; 5]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00],  // ' '
    [0x00, 0x00, 0x5f, 0x00, 0x00],  // !
    [0x00, 0x07, 0x00, 0x07, 0x00],  // "
    [0x14, 0x7f, 0x14, 0x7f, 0x14],  // #
    [0x24, 0x2a, 0x7f, 0x2a, 0x12],  // $
    [0x23, 0x13, 0x08, 0x64, 0x62],  // %
    [0x36, 0x49, 0x55, 0x22, 0x50],  // &
    [0x00, 0x05, 0x03, 0x00, 0x00],  // '
    [0x00, 0x1c, 0x22, 0x41, 0x00],  // (
    [0x00, 0x41, 0x22, 0x1c, 0x00],  // )
    [0x08, 0x2a, 0x1c, 0x2a, 0x08],  // *
    [0x08, 0x08, 0x3e, 0x08, 0x08],  // +
    [0x00, 0x50, 0x30, 0x00, 0x00],  // ,
    [0x08, 0x08, 0x08, 0x08, 0x08],  // -
    [0x00, 0x60, 0x60, 0x00, 0x00],  // .
    [0x20, 0x10, 0x08, 0x04, 0x02],  // /
    [0x3e, 0x51, 0x49, 0x45, 0x3e],  // 0
    [0x00, 0x42, 0x7f, 0x40, 0x00],  // 1
    [0x42, 0x61, 0x51, 0x49, 0x46],  // 2
    [0x21, 0x41, 0x45, 0x4b, 0x31],  // 3
    [0x18, 0x14, 0x12, 0x7f, 0x10],  // 4
    [0x27, 0x45, 0x45, 0x45, 0x39],  // 5
    [0x3c, 0x4a, 0x49, 0x49, 0x30],  // 6
    [0x01, 0x71, 0x09, 0x05, 0x03],  // 7
    [0x36, 0x49, 0x49, 0x49, 0x36],  // 8
    [0x06, 0x49, 0x49, 0x29, 0x1e],  // 9
    [0x00, 0x36, 0x36, 0x00, 0x00],  // :
    [0x00, 0x56, 0x36, 0x00, 0x00],  // ;
    [0x08, 0x14, 0x22, 0x41, 0x00],  // <
    [0x14, 0x14, 0x14, 0x14, 0x14],  // =
    [0x00, 0x41, 0x22, 0x14, 0x08],  // >
    [0x02, 0x01, 0x51, 0x09, 0x06],  // ?
    [0x32, 0x49, 0x79, 0x41, 0x3e],  // @
    [0x7e, 0x11, 0x11, 0x11, 0x7e],  // A
    [0x7f, 0x49, 0x49, 0x49, 0x36],  // B
    [0x3e, 0x41, 0x41, 0x41, 0x22],  // C
    [0x7f, 0x41, 0x41, 0x22, 0x1c],  // D
    [0x7f, 0x49, 0x49, 0x49, 0x41],  // E
    [0x7f, 0x09, 0x09, 0x01, 0x01],  // F
    [0x3e, 0x41, 0x41, 0x51, 0x32],  // G
    [0x7f, 0x08, 0x08, 0x08, 0x7f],  // H
    [0x00, 0x41, 0x7f, 0x41, 0x00],  // I
    [0x20, 0x40, 0x41, 0x3f, 0x01],  // J
    [0x7f, 0x08, 0x14, 0x22, 0x41],  // K
    [0x7f, 0x40, 0x40, 0x40, 0x40],  // L
    [0x7f, 0x02, 0x04, 0x02, 0x7f],  // M
    [0x7f, 0x04, 0x08, 0x10, 0x7f],  // N
    [0x3e, 0x41, 0x41, 0x41, 0x3e],  // O
    [0x7f, 0x09, 0x09, 0x09, 0x06],  // P
    [0x3e, 0x41, 0x51, 0x21, 0x5e],  // Q
    [0x7f, 0x09, 0x19, 0x29, 0x46],  // R
    [0x46, 0x49, 0x49, 0x49, 0x31],  // S
    [0x01, 0x01, 0x7f, 0x01, 0x01],  // T
    [0x3f, 0x40, 0x40, 0x40, 0x3f],  // U
    [0x1f, 0x20, 0x40, 0x20, 0x1f],  // V
    [0x7f, 0x20, 0x18, 0x20, 0x7f],  // W
    [0x63, 0x14, 0x08, 0x14, 0x63],  // X
    [0x03, 0x04, 0x78, 0x04, 0x03],  // Y
    [0x61, 0x51, 0x49, 0x45, 0x43],  // Z
    [0x00, 0x7f, 0x41, 0x41, 0x00],  // [
    [0x02, 0x04, 0x08, 0x10, 0x20],  // \
    [0x00, 0x41, 0x41, 0x7f, 0x00],  // ]
    [0x04, 0x02, 0x01, 0x02, 0x04],  // ^
    [0x40, 0x40, 0x40, 0x40, 0x40],  // _
    [0x00, 0x01, 0x02, 0x04, 0x00],  // `
    [0x20, 0x54, 0x54, 0x54, 0x78],  // a
    [0x7f, 0x48, 0x44, 0x44, 0x38],  // b
    [0x38, 0x44, 0x44, 0x44, 0x20],  // c
    [0x38, 0x44, 0x44, 0x48, 0x7f],  // d
    [0x38, 0x54, 0x54, 0x54, 0x18],  // e
    [0x08, 0x7e, 0x09, 0x01, 0x02],  // f
    [0x08, 0x54, 0x54, 0x54, 0x3c],  // g
    [0x7f, 0x08, 0x04, 0x04, 0x78],  // h
    [0x00, 0x44, 0x7d, 0x40, 0x00],  // i
    [0x20, 0x40, 0x44, 0x3d, 0x00],  // j
    [0x7f, 0x10, 0x28, 0x44, 0x00],  // k
    [0x00, 0x41, 0x7f, 0x40, 0x00],  // l
    [0x7c, 0x04, 0x18, 0x04, 0x78],  // m
    [0x7c, 0x08, 0x04, 0x04, 0x78],  // n
    [0x38, 0x44, 0x44, 0x44, 0x38],  // o
    [0x7c, 0x14, 0x14, 0x14, 0x08],  // p
    [0x08, 0x14, 0x14, 0x18, 0x7c],  // q
    [0x7c, 0x08, 0x04, 0x04, 0x08],  // r
    [0x48, 0x54, 0x54, 0x54, 0x20],  // s
    [0x04, 0x3f, 0x44, 0x40, 0x20],  // t
    [0x3c, 0x40, 0x40, 0x20, 0x7c],  // u
    [0x1c, 0x20, 0x40, 0x20, 0x1c],  // v
    [0x3c, 0x40, 0x30, 0x40, 0x3c],  // w
    [0x44, 0x28, 0x10, 0x28, 0x44],  // x
    [0x0c, 0x50, 0x50, 0x50, 0x3c],  // y
    [0x44, 0x64, 0x54, 0x4c, 0x44],  // z
    [0x00, 0x08, 0x36, 0x41, 0x00],  // {
    [0x00, 0x00, 0x7f, 0x00, 0x00],  // |
    [0x00, 0x41, 0x36, 0x08, 0x00],  // }
    [0x02, 0x01, 0x02, 0x04, 0x02],  // ~
];


/// Fixed-width 5x7 bitmap typeface compiled into the crate.
///
/// It covers printable ASCII only; every other character
/// is drawn as a hollow box, so any text has visible, measurable extent.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct FallbackFont;

impl FallbackFont {
    /// Columns of the glyph for given character. Bit 0 is the top row.
    pub fn glyph(&self, c: char) -> [u8; 5] {
        let code = c as u32;
        if code >= 0x20 && code <= 0x7e {
            ASCII_GLYPHS[(code - 0x20) as usize]
        } else {
            MISSING_GLYPH
        }
    }

    /// Whether the character has a proper glyph in this typeface.
    #[inline]
    pub fn has_glyph(&self, c: char) -> bool {
        c == ' ' || self.glyph(c) != MISSING_GLYPH
    }

    /// Number of screen pixels per font pixel for given point size.
    #[inline]
    pub fn pixel_size(&self, font_size: u32) -> u32 {
        (font_size / POINTS_PER_PIXEL).max(1)
    }

    /// Iterate over the font pixels that are set for given text,
    /// as (x, y) coordinates in font pixels relative to the text origin.
    pub fn pixels<'t>(&self, text: &'t str) -> Box<dyn Iterator<Item=(u32, u32)> + 't> {
        let font = *self;
        Box::new(text.chars().enumerate().flat_map(move |(i, c)| {
            let glyph = font.glyph(c);
            let origin = i as u32 * GLYPH_ADVANCE;
            (0..GLYPH_WIDTH).flat_map(move |col| {
                (0..GLYPH_HEIGHT)
                    .filter(move |&row| glyph[col as usize] & (1 << row) != 0)
                    .map(move |row| (origin + col, row))
            })
        }))
    }
}

impl fmt::Debug for FallbackFont {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "FallbackFont({}x{})", GLYPH_WIDTH, GLYPH_HEIGHT)
    }
}


#[cfg(test)]
mod tests {
    use super::{FallbackFont, GLYPH_ADVANCE};

    #[test]
    fn glyph_coverage() {
        let font = FallbackFont;
        assert!(font.has_glyph('A'));
        assert!(font.has_glyph(' '));
        assert!(!font.has_glyph('Ж'));
    }

    #[test]
    fn pixel_size_never_zero() {
        let font = FallbackFont;
        assert_eq!(1, font.pixel_size(1));
        assert_eq!(4, font.pixel_size(36));
        assert_eq!(15, font.pixel_size(120));
    }

    #[test]
    fn pixels_of_bar() {
        let pixels: Vec<_> = FallbackFont.pixels("|").collect();
        assert_eq!((0..7).map(|row| (2, row)).collect::<Vec<_>>(), pixels);
    }

    #[test]
    fn pixels_advance() {
        let pixels: Vec<_> = FallbackFont.pixels("||").collect();
        assert_eq!(14, pixels.len());
        assert!(pixels.contains(&(GLYPH_ADVANCE + 2, 0)));
    }

    #[test]
    fn missing_glyph_is_drawn() {
        assert_eq!(20, FallbackFont.pixels("ї").count());
    }
}
