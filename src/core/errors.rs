//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for hailstats operations.
///
/// Every variant describes a problem at the input/output boundary. The
/// normalizer and aggregator never fail: malformed task data degrades to
/// defaults instead of producing an error.
#[derive(Debug, Error)]
pub enum Error {
    /// The input path does not carry a `.json` extension
    #[error("Please upload a JSON file (got {})", path.display())]
    NotJsonFile { path: PathBuf },

    /// The input file could not be read
    #[error("Failed to read file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not valid JSON
    #[error("Invalid JSON file: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The input is valid JSON but the top-level value is not an array
    #[error("Expected an array of Label Studio tasks, found {found}")]
    NotAnArray { found: &'static str },

    /// Configuration file errors
    #[error("Configuration error in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// An output artifact could not be written
    #[error("Failed to write {destination}")]
    Write {
        destination: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a read error with path context
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error with path context
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a write error for a named destination
    pub fn write(destination: impl Into<String>, source: std::io::Error) -> Self {
        Self::Write {
            destination: destination.into(),
            source,
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
