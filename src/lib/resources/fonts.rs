//! Module for finding and loading fonts used to render captions.

use std::collections::HashMap;
use std::env;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rusttype;

use super::{CachingLoader, Loader};
use super::fallback::FallbackFont;


/// Extensions of font files that can be loaded.
pub const FILE_EXTENSIONS: &'static [&'static str] = &["ttf", "ttc", "otf"];

/// How many parsed fonts are kept in memory.
const DEFAULT_FONT_CAPACITY: usize = 16;


/// Platform whose conventions are used when looking for font files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    Linux,
    MacOs,
}

impl Platform {
    /// The platform this program was compiled for.
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Linux
        }
    }
}


/// Reference to a font that captions can be rendered with.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontRef {
    /// Font file at given path.
    File(PathBuf),
    /// No font file has been found, the built-in bitmap font shall be used.
    Fallback,
}

impl FontRef {
    #[inline]
    pub fn is_fallback(&self) -> bool {
        match *self { FontRef::Fallback => true, _ => false }
    }

    #[inline]
    pub fn path(&self) -> Option<&Path> {
        match *self {
            FontRef::File(ref p) => Some(p),
            FontRef::Fallback => None,
        }
    }
}


lazy_static! {
    /// Font files of the recognized font names, for every platform.
    /// Names are lowercase; paths are relative to the platform's font directory.
    static ref NAMED_FONT_FILES: HashMap<Platform, HashMap<&'static str, &'static str>> = hashmap!{
        Platform::Windows => hashmap!{
            "arial" => "arial.ttf",
            "times new roman" => "times.ttf",
            "comic sans ms" => "comic.ttf",
            "courier new" => "cour.ttf",
            "impact" => "impact.ttf",
        },
        Platform::Linux => hashmap!{
            "arial" => "msttcorefonts/Arial.ttf",
            "times new roman" => "msttcorefonts/Times_New_Roman.ttf",
            "comic sans ms" => "msttcorefonts/Comic_Sans_MS.ttf",
            "courier new" => "msttcorefonts/Courier_New.ttf",
            "impact" => "msttcorefonts/Impact.ttf",
        },
        Platform::MacOs => hashmap!{
            "arial" => "Arial.ttf",
            "times new roman" => "Times New Roman.ttf",
            "comic sans ms" => "Comic Sans MS.ttf",
            "courier new" => "Courier New.ttf",
            "impact" => "Impact.ttf",
        },
    };
}

/// Directory where the platform keeps the fonts referred to by name.
fn font_directory(platform: Platform) -> Option<PathBuf> {
    match platform {
        Platform::Windows => {
            let windir = env::var_os("WINDIR")?;
            Some(PathBuf::from(windir).join("Fonts"))
        }
        Platform::Linux => Some(PathBuf::from("/usr/share/fonts/truetype")),
        Platform::MacOs => Some(PathBuf::from("/Library/Fonts")),
    }
}

/// Generic fonts (with Cyrillic coverage) to try when the requested one isn't there.
fn fallback_font_files(platform: Platform) -> Vec<PathBuf> {
    match platform {
        Platform::Windows => match font_directory(platform) {
            Some(dir) => ["arial.ttf", "arialbd.ttf", "times.ttf", "segoeui.ttf", "tahoma.ttf"]
                .iter().map(|f| dir.join(f)).collect(),
            None => vec![],
        },
        Platform::Linux => vec![
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf".into(),
            "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf".into(),
            "/usr/share/fonts/truetype/freefont/FreeSans.ttf".into(),
        ],
        Platform::MacOs => vec![
            "/Library/Fonts/Arial.ttf".into(),
            "/Library/Fonts/Times New Roman.ttf".into(),
            "/System/Library/Fonts/Helvetica.ttc".into(),
        ],
    }
}


/// Finds the font file to use for a font name.
///
/// Resolution never fails: if neither the requested font nor any of the fallbacks
/// exist on disk, the result is `FontRef::Fallback`.
#[derive(Clone, Debug, Default)]
pub struct FontResolver {
    named: HashMap<String, PathBuf>,
    fallbacks: Vec<PathBuf>,
}

impl FontResolver {
    /// Create a resolver that follows the conventions of given platform.
    pub fn for_platform(platform: Platform) -> Self {
        let named = match font_directory(platform) {
            Some(dir) => NAMED_FONT_FILES.get(&platform).into_iter()
                .flat_map(|files| files.iter())
                .map(|(&name, &file)| (name.to_owned(), dir.join(file)))
                .collect(),
            None => HashMap::new(),
        };
        FontResolver{named, fallbacks: fallback_font_files(platform)}
    }

    /// Create a resolver with explicit candidate files
    /// for font names and for the generic fallback.
    pub fn with_candidates<N, S, P, F>(named: N, fallbacks: F) -> Self
        where N: IntoIterator<Item=(S, P)>, S: AsRef<str>, P: Into<PathBuf>,
              F: IntoIterator<Item=P>
    {
        FontResolver{
            named: named.into_iter()
                .map(|(name, path)| (name.as_ref().trim().to_lowercase(), path.into()))
                .collect(),
            fallbacks: fallbacks.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a resolver that always gives out the built-in fallback font.
    #[inline]
    pub fn fallback_only() -> Self {
        FontResolver::default()
    }
}

impl FontResolver {
    /// Find the font file for given font name.
    pub fn resolve(&self, name: &str) -> FontRef {
        let key = name.trim().to_lowercase();
        if let Some(path) = self.named.get(&key) {
            if path.is_file() {
                debug!("Font `{}` resolved to {}", name, path.display());
                return FontRef::File(path.clone());
            }
            trace!("File {} of font `{}` doesn't exist", path.display(), name);
        }

        if let Some(path) = self.fallbacks.iter().find(|p| p.is_file()) {
            debug!("Using fallback font {} instead of `{}`", path.display(), name);
            return FontRef::File(path.clone());
        }

        warn!("No font file found for `{}`, using the built-in bitmap font", name);
        FontRef::Fallback
    }
}


macro_attr! {
    /// Font loaded from a file.
    #[derive(NewtypeDeref!, NewtypeFrom!)]
    pub struct Font(rusttype::Font<'static>);
}
impl fmt::Debug for Font {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Font({} glyph(s))", self.0.glyph_count())
    }
}

/// Typeface that the text gets rendered with.
#[derive(Clone, Debug)]
pub enum Typeface {
    /// Font loaded from a TrueType/OpenType file.
    Outline(Arc<Font>),
    /// The built-in bitmap font.
    Bitmap(FallbackFont),
}


/// Loader of font files, keyed by their path.
#[derive(Debug)]
struct FontFileLoader;

impl Loader for FontFileLoader {
    type Key = Path;
    type Item = Font;
    type Err = FontError;

    fn load(&self, path: &Path) -> Result<Font, Self::Err> {
        let bytes = fs::read(path)?;
        trace!("Read {} bytes of font file {}", bytes.len(), path.display());
        match rusttype::Font::try_from_vec(bytes) {
            Some(font) => {
                debug!("Font {} loaded successfully", path.display());
                Ok(font.into())
            }
            None => {
                error!("File {} doesn't contain a valid font", path.display());
                Err(FontError::Invalid(path.to_owned()))
            }
        }
    }
}


/// Loads the typefaces for `FontRef`s.
///
/// Font files are parsed only once and then kept in memory (LRU cache).
#[derive(Debug)]
pub struct FontLoader {
    inner: CachingLoader<FontFileLoader>,
}

impl FontLoader {
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_FONT_CAPACITY)
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        FontLoader{inner: CachingLoader::new(FontFileLoader, capacity)}
    }

    /// Load the typeface that given font reference points to.
    pub fn load(&self, font: &FontRef) -> Result<Typeface, FontError> {
        match *font {
            FontRef::File(ref path) => self.inner.load(path).map(Typeface::Outline),
            FontRef::Fallback => Ok(Typeface::Bitmap(FallbackFont)),
        }
    }

    /// Number of font files currently held in memory.
    #[inline]
    pub fn cached_count(&self) -> usize {
        self.inner.cache().len()
    }
}

impl Default for FontLoader {
    fn default() -> Self {
        Self::new()
    }
}


/// Error while loading a font file.
#[derive(Debug, Error)]
pub enum FontError {
    /// Font file couldn't be read.
    Io(io::Error),
    /// File doesn't hold a font.
    #[error(no_from, non_std, msg = "invalid font file")]
    Invalid(PathBuf),
}
