//! Module implementing the text compositor.

use std::fmt;

use image::RgbImage;
use unicode_normalization::UnicodeNormalization;

use model::{Caption, OUTLINE_COLOR};
use resources::{FontLoader, FontRef, FontResolver, Platform, Typeface};
use super::error::RenderError;
use super::layout::{outline_offsets, placement};
use super::text;


/// Draws outlined captions onto images.
///
/// Font names are resolved to font files on every draw,
/// while the parsed fonts themselves are kept in the loader's cache.
pub struct Compositor {
    resolver: FontResolver,
    loader: FontLoader,
}

impl Compositor {
    /// Create a compositor which looks for fonts the way the current platform does.
    #[inline]
    pub fn new() -> Self {
        Self::with_resolver(FontResolver::for_platform(Platform::current()))
    }

    #[inline]
    pub fn with_resolver(resolver: FontResolver) -> Self {
        Compositor{resolver, loader: FontLoader::new()}
    }

    #[inline]
    pub fn resolver(&self) -> &FontResolver {
        &self.resolver
    }
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new()
    }
}

impl Compositor {
    /// Draw the caption onto a copy of given image.
    ///
    /// The caption is drawn four times in the outline color, shifted diagonally,
    /// and then once more in its own color on top.
    pub fn draw(&self, img: &RgbImage, caption: &Caption) -> Result<RgbImage, RenderError> {
        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyImage);
        }
        caption.validate()?;

        let text: String = caption.text.nfc().collect();
        if text.is_empty() {
            debug!("Empty caption text, skipping.");
            return Ok(img.clone());
        }
        debug!("Rendering {} text: {:?}", caption.position, text);

        let typeface = self.typeface(&caption.font)?;
        trace!("Checking if font `{}` has all glyphs for caption: {}", caption.font, text);
        text::check(&typeface, &text);

        let bounds = text::measure(&typeface, &text, caption.size);
        let (x, y) = placement((width, height), bounds, caption.position);
        trace!("Text of {}x{} placed at ({}, {})", bounds.width, bounds.height, x, y);

        let mut result = img.clone();
        for (dx, dy) in outline_offsets(caption.size) {
            text::render(&mut result, &typeface, &text, caption.size,
                (x + dx, y + dy), OUTLINE_COLOR);
        }
        text::render(&mut result, &typeface, &text, caption.size, (x, y), caption.color);
        Ok(result)
    }

    fn typeface(&self, font: &str) -> Result<Typeface, RenderError> {
        let font_ref = self.resolver.resolve(font);
        self.loader.load(&font_ref).map_err(|e| {
            error!("Failed to load font `{}`: {}", font, e);
            let path = match font_ref {
                FontRef::File(ref p) => format!("{}", p.display()),
                FontRef::Fallback => font.to_owned(),
            };
            RenderError::Font(path, e)
        })
    }
}

impl fmt::Debug for Compositor {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("Compositor")
            .field("resolver", &self.resolver)
            .field("loader", &self.loader)
            .finish()
    }
}
