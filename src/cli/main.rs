//!
//! memesh -- Memes in the shell
//!

#[macro_use] extern crate clap;
#[macro_use] extern crate derive_error;
#[macro_use] extern crate enum_derive;
             extern crate exitcode;
             extern crate image;
             extern crate isatty;
#[macro_use] extern crate lazy_static;
#[macro_use] extern crate macro_attr;
             extern crate meme;
#[macro_use] extern crate slog;
             extern crate slog_envlogger;
             extern crate slog_scope;
             extern crate slog_stdlog;
             extern crate slog_term;

#[cfg(test)] #[macro_use] extern crate spectral;

// `log` must be at the end of these declarations because we want to simultaneously:
// * use the standard `log` macros (which would be shadowed by `slog`)
// * be able to initialize the slog logger using slog macros like o!()
#[macro_use] extern crate log;


mod args;
mod logging;


use std::env;
use std::io::{self, Write};
use std::process::exit;

use image::ImageFormat;
use meme::{Caption, Generator, ImageSession, Position, RenderError, SessionBuildError,
           SessionBuilder, TemplateError, TemplateRegistry};

use args::{ArgsError, Options, Source};


lazy_static! {
    /// Application / package name, as filled out by Cargo.
    static ref NAME: &'static str = option_env!("CARGO_PKG_NAME").unwrap_or("memesh");

    /// Application version, as filled out by Cargo.
    static ref VERSION: Option<&'static str> = option_env!("CARGO_PKG_VERSION");
}


fn main() {
    let opts = args::parse().unwrap_or_else(|e| {
        print_args_error(e).unwrap();
        exit(exitcode::USAGE);
    });

    let _logging = logging::init(opts.verbosity).unwrap_or_else(|e| {
        writeln!(&mut io::stderr(), "Failed to initialize logging: {}", e).unwrap();
        exit(exitcode::SOFTWARE);
    });
    if cfg!(debug_assertions) {
        warn!("Debug mode! The program will likely be much slower.");
    }
    for (i, arg) in env::args().enumerate() {
        debug!("argv[{}] = {:?}", i, arg);
    }
    trace!("Options parsed from argv:\n{:#?}", opts);

    let session = prepare(&opts).unwrap_or_else(|e| {
        error!("Failed to prepare the image: {}", e);
        exit(e.exit_code());
    });
    let session = edit(session, &opts).unwrap_or_else(|e| {
        error!("Failed to edit the image: {}", e);
        exit(e.exit_code());
    });
    write(&session, &opts).unwrap_or_else(|e| {
        error!("Failed to write the image: {}", e);
        exit(e.exit_code());
    });
}

/// Print an error that may occur while parsing arguments.
fn print_args_error(e: ArgsError) -> io::Result<()> {
    match e {
        ArgsError::Parse(ref e) =>
            // In case of generic parse error,
            // message provided by the clap library will be the usage string.
            writeln!(&mut io::stderr(), "{}", e.message),
        e => {
            writeln!(&mut io::stderr(), "Failed to parse arguments: {}", e)
        },
    }
}


/// Load the image to edit, either from a file or by generating it from a template.
fn prepare(opts: &Options) -> Result<ImageSession, Error> {
    let builder = SessionBuilder::new();
    match opts.source {
        Source::Image(ref path) => {
            let mut session = builder.build()?;
            session.load(path)?;
            info!("Loaded {} ({:?})", path.display(), session.dimensions());
            Ok(session)
        }
        Source::Template(ref name) => {
            let mut generator = template_generator(builder, opts)?;
            generator.generate(name, Some(&opts.texts[..]))?;
            info!("Generated meme from template `{}`", name);
            Ok(generator.into_session())
        }
        Source::RandomTemplate => {
            let mut generator = template_generator(builder, opts)?;
            let name = generator.generate_random(Some(&opts.texts[..]))?;
            info!("Generated meme from random template `{}`", name);
            Ok(generator.into_session())
        }
    }
}

fn template_generator(builder: SessionBuilder, opts: &Options) -> Result<Generator, Error> {
    let generator = builder
        .template_directory(&opts.template_directory)
        .template_registry(TemplateRegistry::builtin())
        .build_generator()?;
    match generator.available() {
        Ok(ref names) if names.is_empty() => warn!(
            "No template images found in {}", generator.directory().display()),
        Ok(names) => debug!("Available templates: {}", names.join(", ")),
        Err(e) => warn!("Cannot list template directory: {}", e),
    }
    Ok(generator)
}

/// Draw the requested captions and then apply the filters.
fn edit(mut session: ImageSession, opts: &Options) -> Result<ImageSession, Error> {
    if !opts.has_captions() {
        trace!("No captions requested");
    }
    if opts.top.is_some() || opts.bottom.is_some() {
        session.add_caption(opts.top.as_ref().map(|s| s.as_str()).unwrap_or(""),
                            opts.bottom.as_ref().map(|s| s.as_str()).unwrap_or(""),
                            &opts.font, opts.size, opts.color)?;
    }
    if let Some(ref text) = opts.middle {
        let caption = Caption::text_at(Position::Middle, text.as_str())
            .with_font(opts.font.as_str())
            .with_size(opts.size)
            .with_color(opts.color);
        session.draw_text(&caption)?;
    }
    for filter in &opts.filters {
        debug!("Applying filter {}", filter);
        session.apply_filter(filter)?;
    }
    Ok(session)
}

/// Write the final image to the output file or standard output.
fn write(session: &ImageSession, opts: &Options) -> Result<(), Error> {
    let preview;
    let session = match opts.preview {
        Some((width, height)) => {
            let mut shrunk = ImageSession::new();
            shrunk.load_image(session.preview_resize(width, height));
            debug!("Image shrunk to {:?} for preview", shrunk.dimensions());
            preview = shrunk;
            &preview
        }
        None => session,
    };

    match opts.output_path.as_ref() {
        Some(path) => {
            session.save(path)?;
            info!("Image saved to {}", path.display());
            Ok(())
        }
        None => {
            trace!("No --output given, using standard output");
            if isatty::stdout_isatty() {
                warn!("Standard output is a terminal.");
            }
            let bytes = session.encode(ImageFormat::Png)?;
            trace!("Writing {} bytes to standard output...", bytes.len());
            io::stdout().write_all(&bytes)?;
            Ok(())
        }
    }
}


/// Error that can occur while making the meme.
#[derive(Debug, Error)]
enum Error {
    /// Invalid editor configuration.
    Config(SessionBuildError),
    /// Error while editing the image.
    Edit(meme::Error),
    /// Error while writing to standard output.
    Output(io::Error),
}

impl Error {
    /// Process exit code corresponding to the error.
    fn exit_code(&self) -> exitcode::ExitCode {
        match *self {
            Error::Config(_) => exitcode::CONFIG,
            Error::Edit(ref e) => match *e {
                meme::Error::Load(..) => exitcode::NOINPUT,
                meme::Error::Template(TemplateError::MissingImage(..)) => exitcode::NOINPUT,
                meme::Error::Template(TemplateError::NoTemplates) => exitcode::UNAVAILABLE,
                meme::Error::Template(_) | meme::Error::UnknownFilter(_) => exitcode::USAGE,
                meme::Error::Render(RenderError::Caption(_)) => exitcode::USAGE,
                meme::Error::Save(..) => exitcode::CANTCREAT,
                meme::Error::EmptyImage | meme::Error::Render(_) => exitcode::SOFTWARE,
            },
            Error::Output(_) => exitcode::IOERR,
        }
    }
}
