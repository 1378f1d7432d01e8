//! Module implementing the builder for `ImageSession`.

use std::path::{Path, PathBuf};

use caption::Compositor;
use resources::{FontResolver, Platform};
use templates::{Generator, TemplateRegistry};
use super::config::Config;
use super::ImageSession;


/// Builder for `ImageSession`, and the template `Generator` driving one.
#[derive(Debug, Default)]
#[must_use = "unused builder which must be used"]
pub struct Builder {
    font_resolver: Option<FontResolver>,
    jpeg_quality: Option<u8>,
    template_directory: Option<PathBuf>,
    template_registry: Option<TemplateRegistry>,
}

impl Builder {
    /// Create a new `Builder`.
    #[inline]
    pub fn new() -> Self {
        Builder::default()
    }
}

// Setters.
impl Builder {
    /// Set the resolver used to find font files for captions.
    #[inline]
    pub fn font_resolver(mut self, resolver: FontResolver) -> Self {
        self.font_resolver = Some(resolver); self
    }

    /// Set the quality percentage of JPEG images saved by the session.
    #[inline]
    pub fn jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = Some(quality); self
    }

    /// Set the directory where the template images are kept.
    #[inline]
    pub fn template_directory<P: AsRef<Path>>(mut self, directory: P) -> Self {
        self.template_directory = Some(directory.as_ref().to_owned()); self
    }

    /// Set the template definitions used instead of the built-in ones.
    #[inline]
    pub fn template_registry(mut self, registry: TemplateRegistry) -> Self {
        self.template_registry = Some(registry); self
    }
}

// Validation & building.
impl Builder {
    /// Build the `ImageSession`.
    pub fn build(self) -> Result<ImageSession, Error> {
        let config = self.build_config()?;
        let resolver = self.font_resolver
            .unwrap_or_else(|| FontResolver::for_platform(Platform::current()));
        Ok(ImageSession::with_parts(Compositor::with_resolver(resolver), config))
    }

    /// Build the template `Generator` together with the session it drives.
    ///
    /// The template directory is created if it doesn't exist.
    pub fn build_generator(mut self) -> Result<Generator, Error> {
        let directory = self.template_directory.take()
            .ok_or_else(|| Error::NoTemplateDirectory("template directory not set".into()))?;
        let registry = self.template_registry.take().unwrap_or_default();
        let session = self.build()?;
        Generator::with_session(&directory, session, registry).map_err(|e| {
            Error::TemplateDirectory(format!(
                "cannot use template directory {}: {}", directory.display(), e))
        })
    }

    #[doc(hidden)]
    fn build_config(&self) -> Result<Config, Error> {
        let mut config = Config::default();
        if let Some(quality) = self.jpeg_quality {
            if quality == 0 || quality > 100 {
                return Err(Error::InvalidConfig(format!(
                    "JPEG quality must be between 1 and 100, got {}", quality)));
            }
            config.jpeg_quality = quality;
        }
        Ok(config)
    }
}


/// Error that resulted from misconfiguration of the `ImageSession` via its `Builder`.
#[derive(Clone, Debug, Error)]
pub enum Error {
    /// Invalid configuration value.
    #[error(msg_embedded, non_std, no_from)]
    InvalidConfig(String),

    /// Generator requested without a template directory.
    #[error(msg_embedded, non_std, no_from)]
    NoTemplateDirectory(String),

    /// Template directory couldn't be created.
    #[error(msg_embedded, non_std, no_from)]
    TemplateDirectory(String),
}
