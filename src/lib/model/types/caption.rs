//! Module implementing the `Caption` type.

use std::error;
use std::fmt;

use model::constants::{DEFAULT_CAPTION_SIZE, DEFAULT_COLOR, DEFAULT_FONT,
                       MAX_CAPTION_LENGTH, MAX_CAPTION_SIZE};
use super::color::Color;
use super::position::Position;


/// Describes a single piece of text to be drawn on the image.
///
/// Use the provided `Caption::text_at` method to create it
/// with most of the fields set to default values.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Caption {
    /// Text to render.
    pub text: String,
    /// Vertical position of the caption. It is always centered horizontally.
    pub position: Position,
    /// Name of the font to render the caption with. Defaults to `"Arial"`.
    pub font: String,
    /// Font size in points. Defaults to 120.
    pub size: u32,
    /// Text color, defaults to white.
    pub color: Color,
}

impl Caption {
    /// Create a Caption, checking that it can be rendered at all.
    pub fn new<S: Into<String>>(position: Position, text: S) -> Result<Self, Error> {
        let caption = Self::text_at(position, text);
        caption.validate()?;
        Ok(caption)
    }

    /// Create a Caption with a text at the particular position.
    #[inline]
    pub fn text_at<S: Into<String>>(position: Position, s: S) -> Self {
        Caption{
            text: s.into(),
            position: position,
            font: DEFAULT_FONT.into(),
            size: DEFAULT_CAPTION_SIZE,
            color: DEFAULT_COLOR,
        }
    }
}

impl Caption {
    #[inline]
    pub fn with_font<S: Into<String>>(mut self, font: S) -> Self {
        self.font = font.into();
        self
    }

    #[inline]
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    #[inline]
    pub fn with_color<C: Into<Color>>(mut self, color: C) -> Self {
        self.color = color.into();
        self
    }
}

impl Caption {
    /// Check whether the caption has sane parameters.
    pub fn validate(&self) -> Result<(), Error> {
        let length = self.text.chars().count();
        if length > MAX_CAPTION_LENGTH {
            return Err(Error::TooLong(length));
        }
        if self.size == 0 {
            return Err(Error::ZeroSize);
        }
        if self.size > MAX_CAPTION_SIZE {
            return Err(Error::TooLarge(self.size));
        }
        Ok(())
    }
}

impl fmt::Debug for Caption {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{position:?}{{{font:?} {size}pt [{color}]}}({text:?})",
            text = self.text,
            position = self.position,
            font = self.font,
            size = self.size,
            color = self.color)
    }
}


/// Error while creating a `Caption`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Caption text too long.
    TooLong(usize),
    /// Font size of zero points.
    ZeroSize,
    /// Font size above the limit.
    TooLarge(u32),
}

impl error::Error for Error {
    fn description(&self) -> &str { "Caption creation error" }
    fn cause(&self) -> Option<&dyn error::Error> { None }
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::TooLong(l) => write!(fmt, "caption text too long: {} > {}",
                l, MAX_CAPTION_LENGTH),
            Error::ZeroSize => write!(fmt, "caption font size must be positive"),
            Error::TooLarge(s) => write!(fmt, "caption font size too large: {} > {}",
                s, MAX_CAPTION_SIZE),
        }
    }
}


#[cfg(test)]
mod tests {
    use std::iter;

    use spectral::prelude::*;
    use model::{Color, DEFAULT_COLOR, DEFAULT_FONT, MAX_CAPTION_SIZE, Position};
    use super::{Caption, Error};

    #[test]
    fn text_at() {
        let cap = Caption::text_at(Position::Top, "Test");
        assert_eq!(Position::Top, cap.position);
        assert_eq!("Test", cap.text);
        assert_eq!(DEFAULT_FONT, cap.font);
        assert_eq!(DEFAULT_COLOR, cap.color);
    }

    #[test]
    fn builder_methods() {
        let cap = Caption::text_at(Position::Bottom, "Test")
            .with_font("Impact").with_size(48).with_color((255, 0, 0));
        assert_eq!("Impact", cap.font);
        assert_eq!(48, cap.size);
        assert_eq!(Color(255, 0, 0), cap.color);
    }

    #[test]
    fn too_long() {
        let text: String = iter::repeat('ї').take(257).collect();
        assert_that!(Caption::new(Position::Middle, text))
            .is_err().is_equal_to(Error::TooLong(257));
    }

    #[test]
    fn zero_size() {
        let cap = Caption::text_at(Position::Middle, "x").with_size(0);
        assert_that!(cap.validate()).is_err().is_equal_to(Error::ZeroSize);
    }

    #[test]
    fn size_limit() {
        let cap = Caption::text_at(Position::Top, "x").with_size(MAX_CAPTION_SIZE);
        assert_that!(cap.validate()).is_ok();
        let cap = cap.with_size(u32::max_value());
        assert_that!(cap.validate()).is_err().is_equal_to(Error::TooLarge(u32::max_value()));
    }
}
