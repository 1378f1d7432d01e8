//! Deserializers & parsers for data model types.

mod color;

pub use self::color::ColorParseError;

#[cfg(test)]
mod tests;
