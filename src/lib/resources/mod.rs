//! Module handling the resources used for making memes.

mod fallback;
mod filesystem;
mod fonts;
mod templates;


pub use self::fallback::FallbackFont;
pub use self::filesystem::PathLoader;
pub use self::fonts::{Font, FontError, FontLoader, FontRef, FontResolver, Platform, Typeface,
                      FILE_EXTENSIONS as FONT_FILE_EXTENSIONS};
pub use self::templates::{TemplateLoader, FILE_EXTENSIONS as TEMPLATE_FILE_EXTENSIONS};


use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use util::cache::SharedCache;


/// Loader of resources from some external source.
pub trait Loader {
    /// Type of the key identifying the resource, e.g. its name or path.
    type Key: ?Sized + ToOwned + Eq + Hash;
    /// Type of resources that this loader can load.
    type Item;
    /// Error that may occur while loading the resource.
    type Err;

    /// Load a resource identified by given key.
    fn load(&self, key: &Self::Key) -> Result<Self::Item, Self::Err>;
}


/// A loader that keeps a cache of resources previously loaded.
pub struct CachingLoader<L: Loader>
    where <L::Key as ToOwned>::Owned: Eq + Hash
{
    inner: L,
    cache: SharedCache<<L::Key as ToOwned>::Owned, L::Item>,
}

impl<L: Loader> CachingLoader<L>
    where <L::Key as ToOwned>::Owned: Eq + Hash
{
    #[inline]
    pub fn new(inner: L, capacity: usize) -> Self {
        CachingLoader{
            inner,
            cache: SharedCache::new(capacity),
        }
    }

    #[inline]
    pub fn cache(&self) -> &SharedCache<<L::Key as ToOwned>::Owned, L::Item> {
        &self.cache
    }
}

impl<L: Loader> Loader for CachingLoader<L>
    where <L::Key as ToOwned>::Owned: Eq + Hash
{
    type Key = L::Key;
    type Item = Arc<L::Item>;
    type Err = L::Err;

    /// Load the resource from cache, or through the wrapped loader on a miss.
    fn load(&self, key: &Self::Key) -> Result<Self::Item, Self::Err> {
        let inner = &self.inner;
        self.cache.get_or_try_load(key, |k| inner.load(k))
    }
}

impl<L: Loader> fmt::Debug for CachingLoader<L>
    where <L::Key as ToOwned>::Owned: Eq + Hash
{
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("CachingLoader")
            .field("inner", &"...")
            .field("cache", &self.cache)
            .finish()
    }
}
