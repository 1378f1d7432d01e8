//! Module responsible for measuring and rendering a line of text.

use std::collections::BTreeSet;

use image::{Rgb, RgbImage};
use rusttype::{point, GlyphId, PositionedGlyph, Scale};

use model::Color;
use resources::{FallbackFont, Font, Typeface};


/// Size of the tight bounding box of rendered text, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TextBounds {
    pub width: u32,
    pub height: u32,
}

/// Box covering the "ink" of rendered text,
/// relative to the origin the text is drawn at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Extent {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

impl Extent {
    fn union(self, other: Extent) -> Extent {
        Extent{
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

impl From<Extent> for TextBounds {
    fn from(e: Extent) -> Self {
        TextBounds{
            width: (e.right - e.left).max(0) as u32,
            height: (e.bottom - e.top).max(0) as u32,
        }
    }
}


/// Check if given typeface has all the glyphs for given text.
/// Missing ones are only reported, rendering carries on with placeholder glyphs.
pub fn check(typeface: &Typeface, text: &str) {
    let missing: BTreeSet<u32> = text.chars()
        .filter(|&c| !c.is_whitespace() && !has_glyph(typeface, c))
        .map(|c| c as u32)
        .collect();
    if !missing.is_empty() {
        warn!("Missing glyphs for {} codepoint(s): {}", missing.len(),
            missing.into_iter().map(|c| format!("{:#x}", c)).collect::<Vec<_>>().join(", "));
    }
}

fn has_glyph(typeface: &Typeface, c: char) -> bool {
    match *typeface {
        Typeface::Outline(ref font) => font.glyph(c).id() != GlyphId(0),
        Typeface::Bitmap(ref font) => font.has_glyph(c),
    }
}


/// Measure the tight bounding box of text rendered at given font size.
pub fn measure(typeface: &Typeface, text: &str, size: u32) -> TextBounds {
    extent(typeface, text, size).map(TextBounds::from).unwrap_or_default()
}

/// Ink extent of the text, or None if it wouldn't leave any marks.
fn extent(typeface: &Typeface, text: &str, size: u32) -> Option<Extent> {
    match *typeface {
        Typeface::Outline(ref font) => layout(font, text, size).into_iter()
            .filter_map(|g| g.pixel_bounding_box())
            .map(|bb| Extent{left: bb.min.x, top: bb.min.y, right: bb.max.x, bottom: bb.max.y})
            .fold(None, |acc: Option<Extent>, e| Some(acc.map_or(e, |a| a.union(e)))),
        Typeface::Bitmap(ref font) => {
            let scale = font.pixel_size(size).min(i32::max_value() as u32) as i32;
            font.pixels(text)
                .map(|(x, y)| {
                    let (x, y) = (scaled(x, scale), scaled(y, scale));
                    Extent{
                        left: x,
                        top: y,
                        right: x.saturating_add(scale),
                        bottom: y.saturating_add(scale),
                    }
                })
                .fold(None, |acc: Option<Extent>, e| Some(acc.map_or(e, |a| a.union(e))))
        }
    }
}

/// Font pixel coordinate converted to image pixels, saturating at the `i32` range.
fn scaled(coord: u32, scale: i32) -> i32 {
    (coord as i64 * scale as i64).max(i32::min_value() as i64).min(i32::max_value() as i64) as i32
}

/// Lay out the glyphs of a line of text with the baseline at the font's ascent,
/// so that (0, 0) is the top-left corner of the line.
fn layout(font: &Font, text: &str, size: u32) -> Vec<PositionedGlyph<'static>> {
    let scale = Scale::uniform(size as f32);
    let v_metrics = font.v_metrics(scale);
    font.layout(text, scale, point(0.0, v_metrics.ascent)).collect()
}


/// Render a line of text onto given image, with the line's top-left corner at `origin`.
///
/// Parts of the text which fall outside of the image are silently clipped.
pub fn render(img: &mut RgbImage, typeface: &Typeface, text: &str, size: u32,
              origin: (i32, i32), color: Color) {
    trace!("render(..., <length: {}>, size={}, origin={:?}, color={})",
        text.len(), size, origin, color);
    match *typeface {
        Typeface::Outline(ref font) => render_outline(img, font, text, size, origin, color),
        Typeface::Bitmap(ref font) => render_bitmap(img, font, text, size, origin, color),
    }
}

fn render_outline(img: &mut RgbImage, font: &Font, text: &str, size: u32,
                  origin: (i32, i32), color: Color) {
    let (width, height) = img.dimensions();
    let (ox, oy) = origin;
    for glyph in layout(font, text, size) {
        if let Some(bbox) = glyph.pixel_bounding_box() {
            glyph.draw(|x, y, v| {
                let x = ox + bbox.min.x + x as i32;
                let y = oy + bbox.min.y + y as i32;
                if x >= 0 && y >= 0 && (x as u32) < width && (y as u32) < height {
                    let pixel = img.get_pixel_mut(x as u32, y as u32);
                    *pixel = blend(*pixel, color, v);
                }
            });
        }
    }
}

fn render_bitmap(img: &mut RgbImage, font: &FallbackFont, text: &str, size: u32,
                 origin: (i32, i32), color: Color) {
    let (width, height) = (img.width() as i32, img.height() as i32);
    let scale = font.pixel_size(size).min(i32::max_value() as u32) as i32;
    let (ox, oy) = origin;
    let rgb = color.to_rgb();
    for (fx, fy) in font.pixels(text) {
        let (left, top) = (ox.saturating_add(scaled(fx, scale)), oy.saturating_add(scaled(fy, scale)));
        for y in top.max(0)..top.saturating_add(scale).min(height) {
            for x in left.max(0)..left.saturating_add(scale).min(width) {
                img.put_pixel(x as u32, y as u32, rgb);
            }
        }
    }
}

/// Blend the color over a pixel with given coverage (0.0 to 1.0).
fn blend(pixel: Rgb<u8>, color: Color, coverage: f32) -> Rgb<u8> {
    let alpha = coverage.max(0.0).min(1.0);
    let Color(r, g, b) = color;
    let mix = |under: u8, over: u8| {
        (over as f32 * alpha + under as f32 * (1.0 - alpha)).round() as u8
    };
    Rgb([mix(pixel[0], r), mix(pixel[1], g), mix(pixel[2], b)])
}


#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};

    use model::Color;
    use resources::{FallbackFont, Typeface};
    use super::{blend, measure, render, scaled, TextBounds};

    fn bitmap() -> Typeface {
        Typeface::Bitmap(FallbackFont)
    }

    #[test]
    fn measure_bitmap_text() {
        assert_eq!(TextBounds{width: 1, height: 7}, measure(&bitmap(), "|", 8));
        assert_eq!(TextBounds{width: 4, height: 28}, measure(&bitmap(), "|", 36));
        // Two boxes of 5 columns each, 1 column apart.
        assert_eq!(TextBounds{width: 11, height: 7}, measure(&bitmap(), "жж", 8));
    }

    #[test]
    fn measure_blank_text() {
        assert_eq!(TextBounds::default(), measure(&bitmap(), "", 36));
        assert_eq!(TextBounds::default(), measure(&bitmap(), "   ", 36));
    }

    #[test]
    fn render_bitmap_at_origin() {
        let mut img = RgbImage::new(10, 10);
        render(&mut img, &bitmap(), "|", 8, (0, 1), Color::white());
        let lit: Vec<_> = img.enumerate_pixels()
            .filter(|&(_, _, p)| *p == Rgb([0xff, 0xff, 0xff]))
            .map(|(x, y, _)| (x, y))
            .collect();
        assert_eq!((1..8).map(|y| (2, y)).collect::<Vec<_>>(), lit);
    }

    #[test]
    fn render_clips_off_canvas() {
        let mut img = RgbImage::new(4, 4);
        render(&mut img, &bitmap(), "||", 16, (-4, -10), Color::white());
        // Only the bottom two rows of the left bar remain, as 2x2 blocks.
        assert_eq!(8, img.pixels().filter(|p| p[0] == 0xff).count());

        let mut img = RgbImage::new(4, 4);
        render(&mut img, &bitmap(), "|", 8, (-100, -100), Color::white());
        assert!(img.pixels().all(|p| p[0] == 0));
    }

    #[test]
    fn huge_sizes_saturate() {
        assert_eq!(i32::max_value(), scaled(7, i32::max_value()));
        let bounds = measure(&bitmap(), "ab", u32::max_value());
        assert!(bounds.width > 0 && bounds.height > 0);

        // The bar is in the third column of its glyph.
        let scale = FallbackFont.pixel_size(u32::max_value()) as i32;
        let mut img = RgbImage::new(4, 4);
        render(&mut img, &bitmap(), "|", u32::max_value(), (-2 * scale, 0), Color::white());
        assert!(img.pixels().all(|p| p[0] == 0xff));
    }

    #[test]
    fn blend_coverage() {
        assert_eq!(Rgb([0xff, 0, 0]), blend(Rgb([0, 0, 0]), Color(0xff, 0, 0), 1.0));
        assert_eq!(Rgb([10, 20, 30]), blend(Rgb([10, 20, 30]), Color::white(), 0.0));
        assert_eq!(Rgb([128, 128, 128]), blend(Rgb([0, 0, 0]), Color::white(), 0.5));
    }
}
