//! Module defining the caption position enum.

#![allow(missing_docs)]  // Because IterVariants! produces undocumented methods.

use std::fmt;
use std::str::FromStr;


macro_attr! {
    /// Vertical position of a caption within the image.
    ///
    /// Captions are always centered horizontally,
    /// so this is all there is to their placement.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash,
             Deserialize, IterVariants!(Positions))]
    #[serde(rename_all = "lowercase")]
    pub enum Position {
        /// Just below the top edge.
        Top,
        /// Just above the bottom edge.
        Bottom,
        /// Vertical centering.
        Middle,
    }
}

impl Position {
    /// Lowercase name of the position.
    pub fn name(&self) -> &'static str {
        match *self {
            Position::Top => "top",
            Position::Bottom => "bottom",
            Position::Middle => "middle",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.name())
    }
}

impl FromStr for Position {
    type Err = PositionParseError;

    /// Parse the position from its name (in any letter case)
    /// or one of the shorthand symbols: `^` (top), `-` (middle), `_` (bottom).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "top" | "^" => Ok(Position::Top),
            "bottom" | "_" => Ok(Position::Bottom),
            "middle" | "center" | "-" => Ok(Position::Middle),
            _ => Err(PositionParseError::Unknown(s.to_owned())),
        }
    }
}


/// Error while parsing a `Position` from string.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PositionParseError {
    /// Unrecognized caption position.
    #[error(no_from, non_std, msg = "unknown caption position")]
    Unknown(String),
}
