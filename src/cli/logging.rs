//! Module implementing logging for the application.
//!
//! The library logs through the `log` crate,
//! whose records are routed here to a `slog` terminal drain.

use std::env;
use std::sync::Mutex;

use log::{self, SetLoggerError};
use slog::{Drain, FilterLevel, Logger};
use slog_envlogger::LogBuilder;
use slog_scope::{self, GlobalLoggerGuard};
use slog_stdlog;
use slog_term::{FullFormat, TermDecorator};


/// Initialize logging with given verbosity.
///
/// The returned guard has to be kept alive for as long as the logging is needed.
pub fn init(verbosity: isize) -> Result<GlobalLoggerGuard, SetLoggerError> {
    let decorator = TermDecorator::new().stderr().build();
    let drain = FullFormat::new(decorator).build();

    // RUST_LOG can still be used to tweak the logging of particular modules.
    let mut builder = LogBuilder::new(drain).filter(None, filter_level(verbosity));
    if let Ok(ref filters) = env::var("RUST_LOG") {
        builder = builder.parse(filters);
    }
    let drain = Mutex::new(builder.build()).fuse();

    let logger = Logger::root(drain, o!());
    let guard = slog_scope::set_global_logger(logger);
    slog_stdlog::init_with_level(log::Level::Trace)?;
    Ok(guard)
}

/// Map the verbosity (-v/-q count) onto the logging level.
fn filter_level(verbosity: isize) -> FilterLevel {
    match verbosity {
        v if v <= -2 => FilterLevel::Critical,
        -1 => FilterLevel::Error,
        0 => FilterLevel::Warning,
        1 => FilterLevel::Info,
        2 => FilterLevel::Debug,
        _ => FilterLevel::Trace,
    }
}
