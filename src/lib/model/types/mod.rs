//! Module defining the model types.

mod caption;
mod color;
mod position;

pub use self::caption::{Caption, Error as CaptionError};
pub use self::color::Color;
pub use self::position::{Position, Positions, PositionParseError};
