//! Module implementing the image editing session.

mod builder;
mod config;
mod error;
#[cfg(test)]
mod tests;

pub use self::builder::{Builder as SessionBuilder, Error as SessionBuildError};
pub use self::config::{Config as SessionConfig, DEFAULT_JPEG_QUALITY};
pub use self::error::Error;


use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Cursor};
use std::path::Path;

use image::{imageops, ColorType, DynamicImage, ImageError, ImageFormat,
            ImageOutputFormat, RgbImage};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::io::Reader as ImageReader;
use rand::{self, Rng};

use caption::Compositor;
use filter::{self, Filter};
use model::{Caption, Color, Position, PREVIEW_PLACEHOLDER_SIZE};
use self::config::Config;


/// Editing session of a single image.
///
/// The session holds the working image, which all the edits are applied to,
/// and a snapshot of the image as it was loaded, so that the edits can be reverted.
pub struct ImageSession {
    image: Option<RgbImage>,
    original: Option<RgbImage>,
    compositor: Compositor,
    config: Config,
}

impl ImageSession {
    /// Create an empty session with default configuration.
    #[inline]
    pub fn new() -> Self {
        Self::with_parts(Compositor::new(), Config::default())
    }

    #[inline]
    pub(crate) fn with_parts(compositor: Compositor, config: Config) -> Self {
        ImageSession{image: None, original: None, compositor, config}
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for ImageSession {
    fn default() -> Self {
        Self::new()
    }
}

// Accessors.
impl ImageSession {
    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.image.is_some()
    }

    /// The working image, with all the edits applied.
    #[inline]
    pub fn image(&self) -> Option<&RgbImage> {
        self.image.as_ref()
    }

    /// The image as it was when loaded.
    #[inline]
    pub fn original(&self) -> Option<&RgbImage> {
        self.original.as_ref()
    }

    #[inline]
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.image.as_ref().map(|img| img.dimensions())
    }
}

// Loading & saving.
impl ImageSession {
    /// Load the image from given file, replacing the one being edited (if any).
    ///
    /// If the file cannot be read or decoded, the session is left empty.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        self.image = None;
        self.original = None;

        trace!("Opening image {}", path.display());
        let decoded = ImageReader::open(path).map_err(ImageError::IoError)
            .and_then(|r| r.with_guessed_format().map_err(ImageError::IoError))
            .and_then(|r| r.decode());
        let img = decoded.map_err(|e| {
            warn!("Failed to load image {}: {}", path.display(), e);
            Error::Load(path.to_owned(), e)
        })?;

        let img = img.to_rgb8();
        debug!("Loaded {}x{} image from {}", img.width(), img.height(), path.display());
        self.load_image(img);
        Ok(())
    }

    /// Start editing an image that's already in memory.
    pub fn load_image(&mut self, img: RgbImage) {
        self.original = Some(img.clone());
        self.image = Some(img);
    }

    /// Revert all the edits made since the image was loaded.
    pub fn reset(&mut self) {
        if let Some(ref original) = self.original {
            trace!("Reverting to the original image");
            self.image = Some(original.clone());
        }
    }

    /// Save the working image to given file.
    /// The image format is decided by the file extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        let img = self.image.as_ref().ok_or(Error::EmptyImage)?;

        let is_jpeg = path.extension().and_then(|e| e.to_str())
            .map(|e| { let e = e.to_lowercase(); e == "jpg" || e == "jpeg" })
            .unwrap_or(false);
        let result = if is_jpeg {
            self.save_jpeg(img, path)
        } else {
            img.save(path)
        };

        match result {
            Ok(()) => {
                debug!("Image saved to {}", path.display());
                Ok(())
            }
            Err(e) => {
                error!("Failed to save image to {}: {}", path.display(), e);
                Err(Error::Save(Some(path.to_owned()), e))
            }
        }
    }

    fn save_jpeg(&self, img: &RgbImage, path: &Path) -> Result<(), ImageError> {
        let file = File::create(path).map_err(ImageError::IoError)?;
        let mut writer = BufWriter::new(file);
        let mut encoder = JpegEncoder::new_with_quality(&mut writer, self.config.jpeg_quality);
        encoder.encode(img.as_raw(), img.width(), img.height(), ColorType::Rgb8)
    }

    /// Encode the working image as bytes of given format.
    pub fn encode(&self, format: ImageFormat) -> Result<Vec<u8>, Error> {
        let img = self.image.as_ref().ok_or(Error::EmptyImage)?;
        let output_format = match format {
            ImageFormat::Jpeg => ImageOutputFormat::Jpeg(self.config.jpeg_quality),
            f => ImageOutputFormat::from(f),
        };
        trace!("Encoding image as {:?}", output_format);

        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(img.clone())
            .write_to(&mut Cursor::new(&mut bytes), output_format)
            .map_err(|e| Error::Save(None, e))?;
        Ok(bytes)
    }
}

// Editing.
impl ImageSession {
    /// Draw a caption onto the image.
    pub fn draw_text(&mut self, caption: &Caption) -> Result<(), Error> {
        let result = {
            let img = self.image.as_ref().ok_or(Error::EmptyImage)?;
            self.compositor.draw(img, caption)?
        };
        self.image = Some(result);
        Ok(())
    }

    /// Draw the classic top & bottom captions, skipping those which are empty.
    pub fn add_caption(&mut self, top: &str, bottom: &str,
                       font: &str, size: u32, color: Color) -> Result<(), Error> {
        if !self.is_loaded() {
            return Err(Error::EmptyImage);
        }
        for &(text, position) in [(top, Position::Top), (bottom, Position::Bottom)].iter() {
            if text.is_empty() {
                continue;
            }
            let caption = Caption::text_at(position, text)
                .with_font(font).with_size(size).with_color(color);
            self.draw_text(&caption)?;
        }
        Ok(())
    }

    /// Apply a filter, given by its name or label, to the image.
    pub fn apply_filter(&mut self, name: &str) -> Result<(), Error> {
        if !self.is_loaded() {
            return Err(Error::EmptyImage);
        }
        let filter = name.parse::<Filter>().map_err(|e| {
            warn!("Unrecognized filter `{}`", name);
            Error::from(e)
        })?;
        self.apply(filter)
    }

    /// Apply a filter to the image.
    #[inline]
    pub fn apply(&mut self, filter: Filter) -> Result<(), Error> {
        self.apply_with_rng(filter, &mut rand::thread_rng())
    }

    /// Apply a filter to the image using given source of randomness.
    pub fn apply_with_rng<R: Rng + ?Sized>(&mut self, filter: Filter,
                                           rng: &mut R) -> Result<(), Error> {
        let result = {
            let img = self.image.as_ref().ok_or(Error::EmptyImage)?;
            filter::apply_with_rng(img, filter, rng)?
        };
        self.image = Some(result);
        Ok(())
    }
}

// Display.
impl ImageSession {
    /// Copy of the working image scaled down to fit within given bounds,
    /// keeping its aspect ratio. Images are never scaled up.
    ///
    /// If there is no image, the result is a blank placeholder.
    pub fn preview_resize(&self, max_width: u32, max_height: u32) -> RgbImage {
        let img = match self.image {
            Some(ref img) => img,
            None => return RgbImage::new(PREVIEW_PLACEHOLDER_SIZE, PREVIEW_PLACEHOLDER_SIZE),
        };

        let (width, height) = img.dimensions();
        if width <= max_width && height <= max_height {
            return img.clone();
        }

        let ratio = (max_width as f64 / width as f64).min(max_height as f64 / height as f64);
        let new_width = ((width as f64 * ratio).round() as u32).max(1).min(width);
        let new_height = ((height as f64 * ratio).round() as u32).max(1).min(height);
        trace!("Preview of {}x{} image resized to {}x{}", width, height, new_width, new_height);
        imageops::resize(img, new_width, new_height, FilterType::Triangle)
    }
}

impl fmt::Debug for ImageSession {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("ImageSession")
            .field("dimensions", &self.dimensions())
            .field("compositor", &self.compositor)
            .field("config", &self.config)
            .finish()
    }
}
