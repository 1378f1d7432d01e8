//! Text rendering error.

use std::error::Error;
use std::fmt;

use model::CaptionError;
use resources::FontError;


/// Error that may occur while drawing a caption.
///
/// The image the caption was being drawn on is never modified
/// when this error is returned.
#[derive(Debug)]
pub enum RenderError {
    /// Image has no pixels to draw on.
    EmptyImage,
    /// Caption parameters are invalid.
    Caption(CaptionError),
    /// Font file couldn't be loaded.
    Font(String, FontError),
}

impl Error for RenderError {
    fn description(&self) -> &str { "text rendering error" }
    fn cause(&self) -> Option<&dyn Error> {
        match *self {
            RenderError::EmptyImage => None,
            RenderError::Caption(ref e) => Some(e),
            RenderError::Font(_, ref e) => Some(e),
        }
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RenderError::EmptyImage => write!(fmt, "cannot draw text on an empty image"),
            RenderError::Caption(ref e) => write!(fmt, "invalid caption: {}", e),
            RenderError::Font(ref f, ref e) => write!(fmt, "cannot load font `{}`: {}", f, e),
        }
    }
}

impl From<CaptionError> for RenderError {
    fn from(e: CaptionError) -> Self {
        RenderError::Caption(e)
    }
}
