//! # Logging
//!
//! One place to stand up the global tracing subscriber for SafeBuy
//! binaries: compact console output, optional rolling file output with
//! non-blocking I/O, and `RUST_LOG`-style filtering.
//!
//! The builder is type-stated. File-only knobs (rotation, retention, JSON
//! encoding) appear once a log directory has been chosen, so they cannot
//! be set on a console-only pipeline.
//!
//! ## Example
//! ```rust
//! use safebuy_logger::{LevelFilter, Logging};
//!
//! let _logging = Logging::builder("my-app")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::LoggingError;
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use private::Sealed;
use std::fs;
use std::marker::PhantomData;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug)]
struct LogSettings {
    name: String,
    console: bool,
    directory: Option<PathBuf>,
    level: LevelFilter,
    rotation: Rotation,
    max_files: usize,
    json: bool,
    filter: Option<String>,
}

/// Marker for a pipeline that only writes to the console.
#[derive(Debug)]
pub struct ConsoleOnly;
/// Marker for a pipeline that also writes rolling log files.
#[derive(Debug)]
pub struct FileBacked;

mod private {
    pub trait Sealed {}
}
impl Sealed for ConsoleOnly {}
impl Sealed for FileBacked {}

/// A builder for configuring and installing the global tracing subscriber.
#[derive(Debug)]
pub struct LoggingBuilder<Out: Sealed = ConsoleOnly> {
    settings: LogSettings,
    out: PhantomData<Out>,
}

impl<Out: Sealed> LoggingBuilder<Out> {
    /// Minimum level emitted when no `RUST_LOG` directive overrides it.
    #[must_use = "the builder does nothing until .init() is called"]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.settings.level = level;
        self
    }

    /// Switches console output on or off. On by default.
    #[must_use = "the builder does nothing until .init() is called"]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.settings.console = enabled;
        self
    }

    /// Programmatic filter directives, e.g. `safebuy=debug,tower_http=info`.
    ///
    /// `RUST_LOG` still wins when it is set. Directives that do not parse
    /// cause [`LoggingBuilder::init`] to fail.
    #[must_use = "the builder does nothing until .init() is called"]
    pub fn filter(mut self, directives: impl Into<String>) -> Self {
        self.settings.filter = Some(directives.into());
        self
    }

    /// Adds rolling file output under `directory`.
    pub fn file(self, directory: impl Into<PathBuf>) -> LoggingBuilder<FileBacked> {
        let mut settings = self.settings;
        settings.directory = Some(directory.into());
        LoggingBuilder { settings, out: PhantomData }
    }

    /// Installs the global subscriber and returns the [`Logging`] handle.
    ///
    /// # Errors
    /// Returns [`LoggingError::Subscriber`] when a global subscriber is
    /// already installed, [`LoggingError::InvalidSettings`] for bad builder
    /// input, and appender or I/O errors when file output cannot be set up.
    pub fn init(self) -> Result<Logging, LoggingError> {
        let settings = self.settings;
        validate(&settings)?;

        let env_filter = build_env_filter(&settings)?;

        let mut layers = Vec::new();

        if settings.console {
            layers.push(layer().compact().with_ansi(true).boxed());
        }

        let guard = match &settings.directory {
            Some(directory) => {
                fs::create_dir_all(directory).map_err(|source| LoggingError::Directory {
                    path: directory.display().to_string(),
                    source,
                })?;

                let appender = RollingFileAppender::builder()
                    .rotation(settings.rotation.clone())
                    .filename_prefix(&settings.name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(settings.max_files)
                    .build(directory)?;

                let (writer, guard) = tracing_appender::non_blocking(appender);
                let file_layer = layer().with_writer(writer).with_ansi(false);

                layers.push(if settings.json {
                    file_layer.json().boxed()
                } else {
                    file_layer.boxed()
                });
                Some(guard)
            }
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggingError::InvalidSettings {
                reason: "every output is disabled, enable console or file logging".to_owned(),
            });
        }

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;

        tracing::debug!(name = %settings.name, "logging pipeline installed");

        Ok(Logging { guard })
    }
}

impl LoggingBuilder<FileBacked> {
    /// How often log files roll over.
    #[must_use = "the builder does nothing until .init() is called"]
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.settings.rotation = rotation;
        self
    }

    /// How many rolled files to keep before pruning old ones.
    #[must_use = "the builder does nothing until .init() is called"]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.settings.max_files = max;
        self
    }

    /// Encodes file output as JSON lines instead of compact text.
    #[must_use = "the builder does nothing until .init() is called"]
    pub const fn json(mut self) -> Self {
        self.settings.json = true;
        self
    }
}

/// Handle to the installed logging pipeline.
///
/// Holds the background worker guard for file output. Keep it alive for
/// the life of the program so buffered records reach disk.
#[must_use = "dropping this handle stops the background log writer"]
#[derive(Debug)]
pub struct Logging {
    guard: Option<WorkerGuard>,
}

impl Logging {
    /// Starts a builder. `name` prefixes rolling log files, so
    /// `Logging::builder("safebuy-server").file("logs")` produces files
    /// like `logs/safebuy-server.2026-08-25.log`.
    pub fn builder(name: impl Into<String>) -> LoggingBuilder {
        LoggingBuilder {
            settings: LogSettings {
                name: name.into(),
                console: true,
                directory: None,
                level: LevelFilter::INFO,
                rotation: Rotation::DAILY,
                max_files: DEFAULT_MAX_FILES,
                json: false,
                filter: None,
            },
            out: PhantomData,
        }
    }

    /// The worker guard for the file writer, when file output is active.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logging {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("logging shutting down, flushing file buffers");
        }
    }
}

fn validate(settings: &LogSettings) -> Result<(), LoggingError> {
    if settings.name.trim().is_empty() {
        return Err(LoggingError::InvalidSettings {
            reason: "name cannot be empty".to_owned(),
        });
    }

    if settings.max_files == 0 {
        return Err(LoggingError::InvalidSettings {
            reason: "max_files must be at least 1".to_owned(),
        });
    }

    Ok(())
}

fn build_env_filter(settings: &LogSettings) -> Result<EnvFilter, LoggingError> {
    let builder = EnvFilter::builder().with_default_directive(settings.level.into());
    settings.filter.as_ref().map_or_else(
        || Ok(builder.from_env_lossy()),
        |directives| {
            builder.parse(directives).map_err(|source| LoggingError::InvalidSettings {
                reason: format!("bad filter directives {directives:?}: {source}"),
            })
        },
    )
}
