//! Module with image session configuration.


/// Default quality of saved JPEG images (in %).
pub const DEFAULT_JPEG_QUALITY: u8 = 85;


/// Structure holding configuration for the `ImageSession`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Quality of the saved JPEG images (in %).
    pub jpeg_quality: u8,
}

impl Default for Config {
    /// Initialize Config with default values.
    fn default() -> Self {
        Config {
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}
