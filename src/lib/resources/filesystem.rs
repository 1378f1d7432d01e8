//! Module defining and implementing the file path loader.

use std::collections::BTreeSet;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use glob;

use super::Loader;


/// Loader for file paths from given directory.
///
/// The resources here are just file *paths* (std::path::PathBuf),
/// and no substantial "loading" is performing (only path resolution).
/// A resource called `foo` is looked up as `foo.<ext>` for each of the loader's
/// extensions, in the order they were given, and the first existing file wins.
pub struct PathLoader {
    directory: PathBuf,
    extensions: Vec<String>,
}

impl PathLoader {
    /// Create a loader which only gives out paths to files
    /// that have one of the extensions given.
    pub fn for_extensions<D: AsRef<Path>, I, S>(directory: D, extensions: I) -> Self
        where I: IntoIterator<Item=S>, S: ToString
    {
        PathLoader{
            directory: directory.as_ref().to_owned(),
            extensions: extensions.into_iter()
                .map(|e| e.to_string().trim().trim_start_matches('.').to_lowercase())
                .collect(),
        }
    }

    #[inline]
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl PathLoader {
    /// List the names of all resources available in the directory, sorted.
    pub fn list(&self) -> io::Result<Vec<String>> {
        let mut names = BTreeSet::new();
        for ext in &self.extensions {
            let pattern = format!("{}", self.directory.join(format!("*.{}", ext)).display());
            trace!("Globbing with {}", pattern);

            let glob_iter = glob::glob(&pattern).map_err(|e| {
                error!("Failed to glob over files with {}: {}", pattern, e);
                io::Error::new(io::ErrorKind::Other, e)
            })?;
            for entry in glob_iter {
                match entry {
                    Ok(path) => if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                        names.insert(stem.to_owned());
                    },
                    Err(e) => warn!("Unreadable path while listing {}: {}",
                        self.directory.display(), e),
                }
            }
        }
        Ok(names.into_iter().collect())
    }
}

impl Loader for PathLoader {
    type Key = str;
    type Item = PathBuf;
    type Err = io::Error;

    /// "Load" a path "resource" from the loader's directory.
    fn load(&self, name: &str) -> Result<Self::Item, Self::Err> {
        for ext in &self.extensions {
            let path = self.directory.join(format!("{}.{}", name, ext));
            trace!("Probing for resource `{}` at {}", name, path.display());
            if path.is_file() {
                return Ok(path);
            }
        }
        Err(io::Error::new(io::ErrorKind::NotFound,
            format!("resource `{}` not found in {}", name, self.directory.display())))
    }
}

impl fmt::Debug for PathLoader {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("PathLoader")
            .field("directory", &self.directory)
            .field("extensions", &self.extensions)
            .finish()
    }
}
