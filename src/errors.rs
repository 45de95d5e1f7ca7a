use std::{error::Error as StdError, fmt, io};

/// Errors raised while setting up or tearing down the application
#[derive(Debug)]
pub enum AppError {
    /// I/O error (e.g., reading config, opening the log file)
    Io(io::Error),
    /// TOML parsing error
    Toml(toml::de::Error),
    /// TOML serialization error
    TomlSer(toml::ser::Error),
    /// No home/config directory could be determined for this platform
    ConfigDir,
    /// A global tracing subscriber was already installed
    Logger(tracing_subscriber::util::TryInitError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "I/O error: {}", e),
            AppError::Toml(e) => write!(f, "TOML error: {}", e),
            AppError::TomlSer(e) => write!(f, "TOML serialization error: {}", e),
            AppError::ConfigDir => write!(f, "Unable to determine config directory"),
            AppError::Logger(e) => write!(f, "Logger error: {}", e),
        }
    }
}

impl StdError for AppError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            AppError::Io(e) => Some(e),
            AppError::Toml(e) => Some(e),
            AppError::TomlSer(e) => Some(e),
            AppError::ConfigDir => None,
            AppError::Logger(e) => Some(e),
        }
    }
}

impl From<io::Error> for AppError {
    fn from(e: io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<toml::de::Error> for AppError {
    fn from(e: toml::de::Error) -> Self {
        AppError::Toml(e)
    }
}

impl From<toml::ser::Error> for AppError {
    fn from(e: toml::ser::Error) -> Self {
        AppError::TomlSer(e)
    }
}

impl From<tracing_subscriber::util::TryInitError> for AppError {
    fn from(e: tracing_subscriber::util::TryInitError) -> Self {
        AppError::Logger(e)
    }
}

/// The host clipboard refused the write (permission denied, no display, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardWriteFailure {
    detail: String,
}

impl ClipboardWriteFailure {
    pub fn new(detail: impl Into<String>) -> Self {
        Self { detail: detail.into() }
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl fmt::Display for ClipboardWriteFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.detail())
    }
}

impl StdError for ClipboardWriteFailure {}

/// Element lookup on the page found nothing under the given id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingElement {
    pub id: String,
}

impl fmt::Display for MissingElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no element with id '{}'", self.id)
    }
}

impl StdError for MissingElement {}
