//! Module defining constants relevant to the data model.

use super::types::Color;


/// Name of the default font.
pub const DEFAULT_FONT: &'static str = "Arial";

/// Font size (in points) of captions drawn by the template generator.
pub const DEFAULT_FONT_SIZE: u32 = 36;
/// Font size (in points) of plain top/bottom captions.
pub const DEFAULT_CAPTION_SIZE: u32 = 120;

/// Default color of the text.
pub const DEFAULT_COLOR: Color = Color(0xff, 0xff, 0xff);
/// Color of the text outline.
pub const OUTLINE_COLOR: Color = Color(0x0, 0x0, 0x0);

/// Distance (in pixels) between a top/bottom caption and the image edge.
pub const TEXT_MARGIN: i32 = 10;
/// Smallest width of the text outline, in pixels.
pub const MIN_OUTLINE_WIDTH: u32 = 2;
/// Font size is divided by this to obtain the outline width.
pub const OUTLINE_WIDTH_DIVISOR: u32 = 30;

/// Maximum length (in Unicode codepoints) of a single caption text.
pub const MAX_CAPTION_LENGTH: usize = 256;
/// Maximum font size (in points) of a caption.
pub const MAX_CAPTION_SIZE: u32 = 1024;

/// Display names of the fonts that can be chosen for captions.
pub const FONT_NAMES: &'static [&'static str] = &[
    "Arial",
    "Impact",
    "Comic Sans MS",
    "Times New Roman",
    "Courier New",
];

/// Named text colors, in display order.
pub const PALETTE: &'static [(&'static str, Color)] = &[
    ("Білий", Color(0xff, 0xff, 0xff)),
    ("Чорний", Color(0x0, 0x0, 0x0)),
    ("Червоний", Color(0xff, 0x0, 0x0)),
    ("Синій", Color(0x0, 0x0, 0xff)),
    ("Зелений", Color(0x0, 0xff, 0x0)),
    ("Жовтий", Color(0xff, 0xff, 0x0)),
];

/// Width & height of the blank image returned as preview when nothing is loaded.
pub const PREVIEW_PLACEHOLDER_SIZE: u32 = 100;
