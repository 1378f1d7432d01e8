//!
//! meme  -- Image macro editing core
//!
//! The crate holds everything needed to turn an ordinary picture into a meme:
//! an `ImageSession` owning the edited image (and a snapshot to revert to),
//! the text compositor drawing outlined captions, the filter bank,
//! and the template `Generator` which replays preset captions over stock images.

             extern crate antidote;
             extern crate css_color_parser;
#[macro_use] extern crate derive_error;
#[macro_use] extern crate enum_derive;
             extern crate glob;
             extern crate image;
             extern crate imageproc;
#[macro_use] extern crate itertools;
#[macro_use] extern crate lazy_static;
#[macro_use] extern crate log;
             extern crate lru_cache;
#[macro_use] extern crate macro_attr;
#[macro_use] extern crate maplit;
#[macro_use] extern crate newtype_derive;
             extern crate rand;
             extern crate rusttype;
             extern crate serde;
#[macro_use] extern crate serde_derive;
             extern crate serde_json;
             extern crate unicode_normalization;


#[cfg(test)]              extern crate serde_test;
#[cfg(test)] #[macro_use] extern crate spectral;
#[cfg(test)]              extern crate tempfile;


mod caption;
mod filter;
mod model;
mod resources;
mod session;
mod templates;
mod util;


pub use caption::*;
pub use filter::*;
pub use model::*;
pub use resources::*;
pub use session::*;
pub use templates::*;
pub use util::cache::*;
