//! Image session error.

use std::error;
use std::fmt;
use std::path::PathBuf;

use image::ImageError;

use caption::RenderError;
use filter::FilterError;
use templates::TemplateError;


/// Error that may occur while operating on an `ImageSession`.
///
/// Apart from a failing `load`, which leaves the session empty,
/// an operation that fails doesn't modify the session's image.
#[derive(Debug)]
pub enum Error {
    /// Image file is missing, unreadable or undecodable.
    Load(PathBuf, ImageError),
    /// Operation needs an image but none is loaded.
    EmptyImage,
    /// Caption couldn't be drawn.
    Render(RenderError),
    /// Filter name isn't recognized.
    UnknownFilter(String),
    /// Image couldn't be encoded or written (to given path, if any).
    Save(Option<PathBuf>, ImageError),
    /// Meme template couldn't be used.
    Template(TemplateError),
}

impl error::Error for Error {
    fn description(&self) -> &str { "image session error" }
    fn cause(&self) -> Option<&dyn error::Error> {
        match *self {
            Error::Load(_, ref e) => Some(e),
            Error::Render(ref e) => Some(e),
            Error::Save(_, ref e) => Some(e),
            Error::Template(ref e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Load(ref p, ref e) => write!(fmt, "cannot load image {}: {}", p.display(), e),
            Error::EmptyImage => write!(fmt, "no image loaded"),
            Error::Render(ref e) => write!(fmt, "cannot draw text: {}", e),
            Error::UnknownFilter(ref f) => write!(fmt, "unknown filter `{}`", f),
            Error::Save(Some(ref p), ref e) => write!(fmt, "cannot save image to {}: {}", p.display(), e),
            Error::Save(None, ref e) => write!(fmt, "cannot encode image: {}", e),
            Error::Template(ref e) => write!(fmt, "{}", e),
        }
    }
}

impl From<RenderError> for Error {
    fn from(e: RenderError) -> Self {
        match e {
            RenderError::EmptyImage => Error::EmptyImage,
            e => Error::Render(e),
        }
    }
}

impl From<FilterError> for Error {
    fn from(e: FilterError) -> Self {
        match e {
            FilterError::Unknown(f) => Error::UnknownFilter(f),
            FilterError::EmptyImage => Error::EmptyImage,
        }
    }
}

impl From<TemplateError> for Error {
    fn from(e: TemplateError) -> Self {
        Error::Template(e)
    }
}
