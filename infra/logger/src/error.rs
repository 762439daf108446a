use thiserror::Error;

/// Errors that can occur while installing the logging pipeline.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The rolling file appender rejected its configuration.
    #[error("rolling file appender error: {0}")]
    Appender(#[from] tracing_appender::rolling::InitError),

    /// A global tracing subscriber is already installed in this process.
    #[error("tracing subscriber error: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),

    /// The log directory could not be created.
    #[error("cannot create log directory {path}: {source}")]
    Directory { path: String, source: std::io::Error },

    /// Invalid settings supplied to the builder.
    #[error("invalid logging settings: {reason}")]
    InvalidSettings { reason: String },
}
