//! Centralized error handling
//!
//! The formatting operations themselves are total: malformed markers degrade
//! to plain text, out-of-range offsets are clamped, and unmatched pairs are
//! never an error. Errors only arise at the edges of the crate, when the
//! style registry is loaded from or saved to disk.

use log::warn;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The centralized error type for the crate.
#[derive(Debug)]
pub enum Error {
    /// Generic I/O error wrapper
    Io(io::Error),

    /// Failed to load the style registry file
    StylesLoad {
        path: PathBuf,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Failed to save the style registry file
    StylesSave {
        path: PathBuf,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Style registry file exists but is not valid JSON
    StylesParse {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Platform configuration directory could not be determined
    ConfigDirNotFound,
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::StylesParse {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::StylesLoad { path, source } => {
                write!(
                    f,
                    "Failed to load styles from '{}': {}",
                    path.display(),
                    source
                )
            }
            Error::StylesSave { path, source } => {
                write!(
                    f,
                    "Failed to save styles to '{}': {}",
                    path.display(),
                    source
                )
            }
            Error::StylesParse { message, .. } => {
                write!(f, "Invalid style registry format: {}", message)
            }
            Error::ConfigDirNotFound => {
                write!(f, "Configuration directory not found")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::StylesLoad { source, .. } | Error::StylesSave { source, .. } => {
                Some(source.as_ref())
            }
            Error::StylesParse { source, .. } => source
                .as_ref()
                .map(|s| s.as_ref() as &(dyn std::error::Error + 'static)),
            Error::ConfigDirNotFound => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Graceful Degradation Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Extension trait for `Result` to support graceful degradation.
pub trait ResultExt<T> {
    /// If the result is an error, log it at warning level and return the
    /// provided default.
    fn unwrap_or_warn_default(self, default: T, context: &str) -> T;
}

impl<T> ResultExt<T> for Result<T> {
    fn unwrap_or_warn_default(self, default: T, context: &str) -> T {
        match self {
            Ok(value) => value,
            Err(err) => {
                warn!("{}: {}. Using default.", context, err);
                default
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
