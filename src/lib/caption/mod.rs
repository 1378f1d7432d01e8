//! Module implementing the drawing of captions onto images.

mod compositor;
mod error;
mod layout;
mod text;


pub use self::compositor::Compositor;
pub use self::error::RenderError;
pub use self::layout::{outline_offsets, outline_width, placement};
pub use self::text::{check, measure, TextBounds};
