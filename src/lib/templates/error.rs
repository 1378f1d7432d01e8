//! Template error.

use std::error::Error;
use std::fmt;
use std::io;

use serde_json;


/// Error that may occur when using a meme template.
#[derive(Debug)]
pub enum TemplateError {
    /// No template of given name is defined.
    Unknown(String),
    /// Template's base image isn't in the template directory.
    MissingImage(String, io::Error),
    /// Number of caption texts doesn't match the template's positions.
    CaptionCount { template: String, expected: usize, actual: usize },
    /// There are no templates to choose from.
    NoTemplates,
    /// Template definitions couldn't be parsed.
    Parse(serde_json::Error),
}

impl Error for TemplateError {
    fn description(&self) -> &str { "meme template error" }
    fn cause(&self) -> Option<&dyn Error> {
        match *self {
            TemplateError::MissingImage(_, ref e) => Some(e),
            TemplateError::Parse(ref e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for TemplateError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            TemplateError::Unknown(ref t) => write!(fmt, "unknown template `{}`", t),
            TemplateError::MissingImage(ref t, ref e) =>
                write!(fmt, "no image for template `{}`: {}", t, e),
            TemplateError::CaptionCount{ref template, expected, actual} =>
                write!(fmt, "template `{}` needs {} caption(s), got {}",
                    template, expected, actual),
            TemplateError::NoTemplates => write!(fmt, "no templates available"),
            TemplateError::Parse(ref e) => write!(fmt, "invalid template definitions: {}", e),
        }
    }
}

impl From<serde_json::Error> for TemplateError {
    fn from(e: serde_json::Error) -> Self {
        TemplateError::Parse(e)
    }
}

// Neither io::Error nor serde_json::Error implement PartialEq,
// so those variants only compare by their other fields.
impl PartialEq for TemplateError {
    fn eq(&self, other: &Self) -> bool {
        use self::TemplateError::*;
        match (self, other) {
            (&Unknown(ref a), &Unknown(ref b)) => a == b,
            (&MissingImage(ref a, _), &MissingImage(ref b, _)) => a == b,
            (&CaptionCount{template: ref t1, expected: e1, actual: a1},
             &CaptionCount{template: ref t2, expected: e2, actual: a2}) =>
                t1 == t2 && e1 == e2 && a1 == a2,
            (&NoTemplates, &NoTemplates) => true,
            (&Parse(_), &Parse(_)) => true,
            _ => false,
        }
    }
}
