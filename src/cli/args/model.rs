//! Data structures for command-line arguments.

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use clap;
use meme::{Color, ColorParseError};


/// Structure to hold options received from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Verbosity of the logging output.
    ///
    /// Corresponds to the number of times the -v flag has been passed.
    /// If -q has been used instead, this will be negative.
    pub verbosity: isize,

    /// Where the edited image comes from.
    pub source: Source,
    /// Custom caption texts for the template (empty means template's defaults).
    pub texts: Vec<String>,

    /// Caption to draw at the top of the image.
    pub top: Option<String>,
    /// Caption to draw in the middle of the image.
    pub middle: Option<String>,
    /// Caption to draw at the bottom of the image.
    pub bottom: Option<String>,
    /// Name of the font for the captions.
    pub font: String,
    /// Size of the captions' text, in points.
    pub size: u32,
    pub color: Color,

    /// Names of the filters to apply, in order.
    pub filters: Vec<String>,

    /// Directory with the template images.
    pub template_directory: PathBuf,
    /// Bounds to shrink the final image into.
    pub preview: Option<(u32, u32)>,
    /// Path to write the finished image to.
    ///
    /// If absent, it shall be written to standard output (as PNG).
    pub output_path: Option<PathBuf>,
}

#[allow(dead_code)]
impl Options {
    #[inline]
    pub fn verbose(&self) -> bool { self.verbosity > 0 }
    #[inline]
    pub fn quiet(&self) -> bool { self.verbosity < 0 }

    /// Whether any caption has been requested.
    #[inline]
    pub fn has_captions(&self) -> bool {
        self.top.is_some() || self.middle.is_some() || self.bottom.is_some()
    }
}


/// Source of the image to edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    /// Image file given by path.
    Image(PathBuf),
    /// Meme template of given name.
    Template(String),
    /// Meme template picked at random.
    RandomTemplate,
}


macro_attr! {
    /// Error that can occur while parsing of command line arguments.
    #[derive(Debug, EnumFromInner!)]
    pub enum ArgsError {
        /// General when parsing the arguments.
        Parse(clap::Error),
        /// Invalid caption color.
        Color(ColorParseError),
        /// Malformed preview bounds.
        Preview(String),
    }
}

impl Error for ArgsError {
    fn description(&self) -> &str { "command line argument error" }
    fn cause(&self) -> Option<&dyn Error> {
        match *self {
            ArgsError::Parse(ref e) => Some(e),
            ArgsError::Color(ref e) => Some(e),
            ArgsError::Preview(_) => None,
        }
    }
}

impl fmt::Display for ArgsError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ArgsError::Parse(ref e) => write!(fmt, "invalid arguments: {}", e),
            ArgsError::Color(ref e) => write!(fmt, "invalid caption color: {}", e),
            ArgsError::Preview(ref p) => {
                write!(fmt, "invalid preview size `{}` (expected WIDTHxHEIGHT)", p)
            }
        }
    }
}
