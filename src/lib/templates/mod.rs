//! Module implementing meme generation from templates.

mod error;
mod registry;


pub use self::error::TemplateError;
pub use self::registry::{TemplateDefinition, TemplateRegistry};


use std::fs;
use std::io;
use std::path::Path;

use rand::{self, Rng};

use model::{Caption, DEFAULT_COLOR, DEFAULT_FONT, DEFAULT_FONT_SIZE};
use resources::{Loader, TemplateLoader};
use session::{Error, ImageSession};


/// Generator of memes which replays template captions over the template images.
///
/// Every generated meme is left in the generator's `ImageSession`,
/// where it can be edited further or saved.
#[derive(Debug)]
pub struct Generator {
    session: ImageSession,
    loader: TemplateLoader,
    registry: TemplateRegistry,
}

impl Generator {
    /// Create a generator for the built-in templates with images in given directory.
    ///
    /// The directory is created if it doesn't exist yet.
    #[inline]
    pub fn new<D: AsRef<Path>>(directory: D) -> io::Result<Self> {
        Self::with_session(directory, ImageSession::new(), TemplateRegistry::builtin())
    }

    /// Create a generator which drives given session.
    pub fn with_session<D: AsRef<Path>>(directory: D,
                                        session: ImageSession,
                                        registry: TemplateRegistry) -> io::Result<Self> {
        let directory = directory.as_ref();
        if !directory.exists() {
            debug!("Creating template directory {}", directory.display());
            fs::create_dir_all(directory)?;
        }
        Ok(Generator{session, loader: TemplateLoader::new(directory), registry})
    }
}

// Accessors.
impl Generator {
    #[inline]
    pub fn session(&self) -> &ImageSession {
        &self.session
    }

    #[inline]
    pub fn session_mut(&mut self) -> &mut ImageSession {
        &mut self.session
    }

    #[inline]
    pub fn into_session(self) -> ImageSession {
        self.session
    }

    #[inline]
    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    #[inline]
    pub fn directory(&self) -> &Path {
        self.loader.directory()
    }

    /// Names of the defined templates which have an image in the template directory.
    pub fn available(&self) -> io::Result<Vec<String>> {
        let on_disk = self.loader.list()?;
        Ok(self.registry.names().into_iter()
            .filter(|name| on_disk.iter().any(|f| f.as_str() == *name))
            .map(|name| name.to_owned())
            .collect())
    }
}

// Generation.
impl Generator {
    /// Make a meme from the named template.
    ///
    /// If `texts` are given (and not empty), they are drawn instead of the template's
    /// default captions. Drawing stops at the first caption that fails,
    /// leaving the captions drawn so far in the session.
    pub fn generate(&mut self, name: &str, texts: Option<&[String]>) -> Result<(), Error> {
        let definition = self.registry.get(name)
            .ok_or_else(|| TemplateError::Unknown(name.to_owned()))?;
        let path = self.loader.load(name).map_err(|e| {
            warn!("No image for template `{}` in {}", name, self.loader.directory().display());
            TemplateError::MissingImage(name.to_owned(), e)
        })?;

        let texts: Vec<&str> = match texts {
            Some(texts) if !texts.is_empty() => texts.iter().map(|t| t.as_str()).collect(),
            _ => definition.captions.iter().map(|t| t.as_str()).collect(),
        };
        definition.check_count(texts.len())?;

        debug!("Generating meme from template {}", definition);
        self.session.load(&path)?;
        for (text, &position) in texts.into_iter().zip(&definition.positions) {
            let caption = Caption::text_at(position, text)
                .with_font(DEFAULT_FONT)
                .with_size(DEFAULT_FONT_SIZE)
                .with_color(DEFAULT_COLOR);
            self.session.draw_text(&caption)?;
        }
        Ok(())
    }

    /// Make a meme from a template chosen at random.
    /// Returns the name of that template.
    #[inline]
    pub fn generate_random(&mut self, texts: Option<&[String]>) -> Result<String, Error> {
        self.generate_random_with_rng(texts, &mut rand::thread_rng())
    }

    /// Make a meme from a template chosen at random using given source of randomness.
    pub fn generate_random_with_rng<R: Rng + ?Sized>(&mut self, texts: Option<&[String]>,
                                                     rng: &mut R) -> Result<String, Error> {
        let name = self.registry.choose(rng)
            .map(|t| t.name.clone())
            .ok_or(TemplateError::NoTemplates)?;
        debug!("Randomly chosen template: {}", name);
        self.generate(&name, texts)?;
        Ok(name)
    }
}
