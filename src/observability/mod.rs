//! Logging initialisation.
//!
//! Installs one global `tracing` subscriber per process. Output goes to stderr
//! so that command output on stdout stays machine-readable, or to an
//! append-mode file when configured.

mod logging;

pub use logging::{LOG_FILTER_ENV, LOG_FORMAT_ENV, LogFormat, LoggingConfig};

use crate::{Error, Result};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, OnceLock};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

static LOGGING_INIT: OnceLock<()> = OnceLock::new();

/// Initializes logging for the process.
///
/// # Errors
///
/// Returns an error if logging has already been initialized, the filter
/// directive is invalid, or the log file cannot be opened.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if LOGGING_INIT.get().is_some() {
        return Err(Error::operation(
            "logging_init",
            "logging already initialized",
        ));
    }

    let filter =
        EnvFilter::try_new(&config.filter).map_err(|e| Error::operation("logging_init", e))?;

    match (&config.file, config.format) {
        (Some(log_file), LogFormat::Json) => {
            let writer = open_log_file(log_file)?;
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(writer)
                        .with_current_span(true)
                        .with_target(true),
                )
                .with(filter)
                .try_init()
                .map_err(init_error)?;
        },
        (Some(log_file), LogFormat::Pretty) => {
            let writer = open_log_file(log_file)?;
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(writer)
                        .with_ansi(false)
                        .with_target(true),
                )
                .with(filter)
                .try_init()
                .map_err(init_error)?;
        },
        (None, LogFormat::Json) => {
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(io::stderr)
                        .with_current_span(true)
                        .with_target(true),
                )
                .with(filter)
                .try_init()
                .map_err(init_error)?;
        },
        (None, LogFormat::Pretty) => {
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(io::stderr)
                        .with_target(true),
                )
                .with(filter)
                .try_init()
                .map_err(init_error)?;
        },
    }

    LOGGING_INIT
        .set(())
        .map_err(|()| Error::operation("logging_init", "failed to mark logging initialized"))?;

    Ok(())
}

/// Thread-safe file writer for logging.
#[derive(Clone)]
struct LogFileWriter {
    file: Arc<Mutex<File>>,
}

impl Write for LogFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::other(e.to_string()))?;
        guard.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::other(e.to_string()))?;
        guard.flush()
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogFileWriter {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn open_log_file(path: &Path) -> Result<LogFileWriter> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Error::operation("create_log_dir", e))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| Error::operation("open_log_file", format!("{}: {e}", path.display())))?;

    Ok(LogFileWriter {
        file: Arc::new(Mutex::new(file)),
    })
}

#[allow(clippy::needless_pass_by_value)]
fn init_error(e: tracing_subscriber::util::TryInitError) -> Error {
    Error::operation("logging_init", e)
}
