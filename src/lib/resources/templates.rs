//! Module for locating template base images.

use std::io;
use std::path::{Path, PathBuf};

use super::Loader;
use super::filesystem::PathLoader;


/// Extensions of template images, in the order they are probed.
pub const FILE_EXTENSIONS: &'static [&'static str] = &["jpg", "jpeg", "png"];


/// Loader finding the base image file of a template by its name.
#[derive(Debug)]
pub struct TemplateLoader {
    inner: PathLoader,
}

impl TemplateLoader {
    pub fn new<D: AsRef<Path>>(directory: D) -> Self {
        TemplateLoader{
            inner: PathLoader::for_extensions(directory, FILE_EXTENSIONS),
        }
    }

    #[inline]
    pub fn directory(&self) -> &Path {
        self.inner.directory()
    }

    /// Names of all templates which have an image in the directory.
    #[inline]
    pub fn list(&self) -> io::Result<Vec<String>> {
        self.inner.list()
    }
}

impl Loader for TemplateLoader {
    type Key = str;
    type Item = PathBuf;
    type Err = io::Error;

    fn load(&self, name: &str) -> Result<PathBuf, Self::Err> {
        let path = self.inner.load(name)?;
        debug!("Template `{}` has its image at {}", name, path.display());
        Ok(path)
    }
}


#[cfg(test)]
mod tests {
    use std::fs::File;

    use spectral::prelude::*;
    use tempfile::TempDir;
    use resources::Loader;
    use super::TemplateLoader;

    #[test]
    fn jpg_probed_first() {
        let dir = TempDir::new().unwrap();
        for file in &["Drake.png", "Drake.jpg"] {
            File::create(dir.path().join(file)).unwrap();
        }
        let loader = TemplateLoader::new(dir.path());
        assert_that!(loader.load("Drake")).is_ok().is_equal_to(dir.path().join("Drake.jpg"));
    }

    #[test]
    fn other_formats_ignored() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("Drake.bmp")).unwrap();
        let loader = TemplateLoader::new(dir.path());
        assert_that!(loader.load("Drake")).is_err();
        assert_that!(loader.list()).is_ok().is_equal_to(Vec::<String>::new());
    }
}
