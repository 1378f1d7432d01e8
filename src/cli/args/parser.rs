//! Module defining the command line argument parser.

use std::convert::TryFrom;
use std::path::PathBuf;

use clap::{self, AppSettings, Arg, ArgGroup, ArgMatches};
use meme::{DEFAULT_CAPTION_SIZE, DEFAULT_COLOR, DEFAULT_FONT};

use super::{NAME, VERSION};
use super::model::{ArgsError, Options, Source};


impl<'a> TryFrom<ArgMatches<'a>> for Options {
    type Error = ArgsError;

    fn try_from(matches: ArgMatches<'a>) -> Result<Self, Self::Error> {
        let verbose_count = matches.occurrences_of(OPT_VERBOSE) as isize;
        let quiet_count = matches.occurrences_of(OPT_QUIET) as isize;
        let verbosity = verbose_count - quiet_count;

        let source = if matches.is_present(OPT_RANDOM) {
            Source::RandomTemplate
        } else if let Some(template) = matches.value_of(OPT_TEMPLATE) {
            Source::Template(template.trim().to_owned())
        } else {
            // The argument group guarantees one of the sources is there.
            let image = matches.value_of_os(ARG_IMAGE).unwrap_or_default();
            Source::Image(PathBuf::from(image))
        };
        let texts = values(&matches, OPT_TEXT);

        let top = matches.value_of(OPT_TOP).map(String::from);
        let middle = matches.value_of(OPT_MIDDLE).map(String::from);
        let bottom = matches.value_of(OPT_BOTTOM).map(String::from);
        let font = matches.value_of(OPT_FONT).unwrap_or(DEFAULT_FONT).to_owned();
        let size = if matches.is_present(OPT_SIZE) {
            value_t!(matches, OPT_SIZE, u32)?
        } else {
            DEFAULT_CAPTION_SIZE
        };
        let color = match matches.value_of(OPT_COLOR) {
            Some(c) => c.parse()?,
            None => DEFAULT_COLOR,
        };

        let filters = values(&matches, OPT_FILTER);

        let template_directory = PathBuf::from(
            matches.value_of_os(OPT_TEMPLATES_DIR).unwrap_or_default());
        let preview = match matches.value_of(OPT_PREVIEW) {
            Some(p) => Some(parse_preview(p)?),
            None => None,
        };

        // Output path can be set explicit to stdout via `-`.
        let output_path = matches.value_of(OPT_OUTPUT)
            .map(|p| p.trim())
            .and_then(|p| if p == "-" { None } else { Some(p) })
            .map(PathBuf::from);

        Ok(Options{
            verbosity,
            source, texts,
            top, middle, bottom, font, size, color,
            filters,
            template_directory, preview, output_path,
        })
    }
}

fn values(matches: &ArgMatches, name: &str) -> Vec<String> {
    matches.values_of(name)
        .map(|vs| vs.map(String::from).collect())
        .unwrap_or_default()
}

/// Parse the preview bounds given as WIDTHxHEIGHT.
fn parse_preview(s: &str) -> Result<(u32, u32), ArgsError> {
    let invalid = || ArgsError::Preview(s.to_owned());

    let mut parts = s.trim().splitn(2, |c| c == 'x' || c == 'X');
    let width: u32 = parts.next()
        .and_then(|w| w.trim().parse().ok()).ok_or_else(invalid)?;
    let height: u32 = parts.next()
        .and_then(|h| h.trim().parse().ok()).ok_or_else(invalid)?;
    if width == 0 || height == 0 {
        return Err(invalid());
    }
    Ok((width, height))
}


// Parser definition

/// Type of the argument parser object
/// (which is called an "App" in clap's silly nomenclature).
pub type Parser<'p> = clap::App<'p, 'p>;


lazy_static! {
    static ref ABOUT: &'static str = option_env!("CARGO_PKG_DESCRIPTION").unwrap_or("");
}

const GROUP_SOURCE: &'static str = "source";
const ARG_IMAGE: &'static str = "image";
const OPT_TEMPLATE: &'static str = "template";
const OPT_RANDOM: &'static str = "random";
const OPT_TEXT: &'static str = "text";
const OPT_TOP: &'static str = "top";
const OPT_MIDDLE: &'static str = "middle";
const OPT_BOTTOM: &'static str = "bottom";
const OPT_FONT: &'static str = "font";
const OPT_SIZE: &'static str = "size";
const OPT_COLOR: &'static str = "color";
const OPT_FILTER: &'static str = "filter";
const OPT_TEMPLATES_DIR: &'static str = "templates-dir";
const OPT_PREVIEW: &'static str = "preview";
const OPT_OUTPUT: &'static str = "output";
const OPT_VERBOSE: &'static str = "verbose";
const OPT_QUIET: &'static str = "quiet";


/// Create the parser for application's command line.
#[allow(dangerous_implicit_autorefs)]  // triggered inside clap 2.x `crate_authors!` expansion
pub fn create_parser<'p>() -> Parser<'p> {
    let mut parser = Parser::new(*NAME);
    if let Some(version) = *VERSION {
        parser = parser.version(version);
    }
    parser
        .about(*ABOUT)
        .author(crate_authors!(", "))

        .setting(AppSettings::StrictUtf8)

        .setting(AppSettings::UnifiedHelpMessage)
        .setting(AppSettings::DontCollapseArgsInUsage)
        .setting(AppSettings::DeriveDisplayOrder)

        // Image source.
        .arg(Arg::with_name(ARG_IMAGE)
            .value_name("IMAGE")
            .help("Image file to edit"))
        .arg(Arg::with_name(OPT_TEMPLATE)
            .long("template").short("t")
            .value_name("NAME")
            .help("Meme template to generate the image from")
            .long_help(concat!(
                "Name of the meme template to start from, e.g. \"Drake\".\n\n",
                "Its base image is looked up as NAME.jpg, NAME.jpeg or NAME.png ",
                "in the templates directory, and the template's captions are drawn over it.")))
        .arg(Arg::with_name(OPT_RANDOM)
            .long("random").short("r")
            .help("Generate the image from a randomly chosen template"))
        .group(ArgGroup::with_name(GROUP_SOURCE)
            .args(&[ARG_IMAGE, OPT_TEMPLATE, OPT_RANDOM])
            .required(true))
        .arg(Arg::with_name(OPT_TEXT)
            .long("text")
            .value_name("TEXT")
            .multiple(true).number_of_values(1)
            .conflicts_with(ARG_IMAGE)
            .help("Custom caption for the template (repeat for each one)"))
        .arg(Arg::with_name(OPT_TEMPLATES_DIR)
            .long("templates-dir")
            .value_name("DIR")
            .default_value("templates")
            .help("Directory with the template images"))

        // Captions.
        .arg(Arg::with_name(OPT_TOP)
            .long("top")
            .value_name("TEXT")
            .help("Caption to put at the top of the image"))
        .arg(Arg::with_name(OPT_MIDDLE)
            .long("middle")
            .value_name("TEXT")
            .help("Caption to put in the middle of the image"))
        .arg(Arg::with_name(OPT_BOTTOM)
            .long("bottom")
            .value_name("TEXT")
            .help("Caption to put at the bottom of the image"))
        .arg(Arg::with_name(OPT_FONT)
            .long("font")
            .value_name("FONT")
            .help("Font of the captions")
            .long_help(concat!(
                "Name of the font to draw the captions with, ",
                "e.g. Arial, Impact, \"Comic Sans MS\", \"Times New Roman\", \"Courier New\".\n\n",
                "If the font cannot be found, some other system font is used instead.")))
        .arg(Arg::with_name(OPT_SIZE)
            .long("size").short("s")
            .value_name("POINTS")
            .help("Size of the captions' text"))
        .arg(Arg::with_name(OPT_COLOR)
            .long("color").short("c")
            .value_name("COLOR")
            .help("Color of the captions' text")
            .long_help(concat!(
                "Color of the captions' text.\n\n",
                "Can be a color name (white, black, red, blue, green, yellow ",
                "or their Ukrainian names) or any opaque CSS color, e.g. #ff8800.")))

        // Editing.
        .arg(Arg::with_name(OPT_FILTER)
            .long("filter").short("f")
            .value_name("FILTER")
            .multiple(true).number_of_values(1)
            .help("Filter to apply after the captions (repeat to apply more)")
            .long_help(concat!(
                "Filter to apply to the image, after the captions have been drawn.\n\n",
                "Possible values: Grayscale, Blur, Sharpen, Sepia, EdgeDetect, Invert, Vintage ",
                "(or their Ukrainian labels). Repeated filters are applied in the given order.")))

        // Output flags.
        .arg(Arg::with_name(OPT_PREVIEW)
            .long("preview").short("p")
            .value_name("WxH")
            .help("Shrink the image to fit within given bounds"))
        .arg(Arg::with_name(OPT_OUTPUT)
            .long("output").short("o")
            .value_name("FILE")
            .required(false)
            .help("File to write the final image to")
            .long_help(concat!(
                "What file should the final image be written to.\n\n",
                "By default, or when this flag is set to `-` (single dash), the image is written ",
                "as PNG to standard output so it can be e.g. piped to another program.")))

        // Verbosity flags.
        .arg(Arg::with_name(OPT_VERBOSE)
            .long("verbose").short("v")
            .multiple(true)
            .conflicts_with(OPT_QUIET)
            .help("Increase logging verbosity"))
        .arg(Arg::with_name(OPT_QUIET)
            .long("quiet").short("q")
            .multiple(true)
            .conflicts_with(OPT_VERBOSE)
            .help("Decrease logging verbosity"))

        .help_short("H")
        .version_short("V")
}


#[cfg(test)]
mod tests {
    use super::parse_preview;

    #[test]
    fn preview_bounds() {
        assert_eq!((640, 480), parse_preview("640x480").unwrap());
        assert_eq!((10, 20), parse_preview(" 10 X 20 ").unwrap());
        assert!(parse_preview("x480").is_err());
        assert!(parse_preview("640x").is_err());
        assert!(parse_preview("640x480x2").is_err());
        assert!(parse_preview("-1x5").is_err());
    }
}
