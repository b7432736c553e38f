//! Error types.

use std::path::PathBuf;

use thiserror::Error;

/// A verification mode's count policy was not met.
///
/// The message is fully rendered; `Display` prints it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct VerificationFailure {
    message: String,
}

impl VerificationFailure {
    /// Creates a failure carrying `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    /// The rendered message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors raised while saving or loading a call log.
#[derive(Debug, Error)]
pub enum LogError {
    /// The log file could not be read.
    #[error("Failed to read call log {}: {source}", .path.display())]
    Read {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The log file could not be written.
    #[error("Failed to write call log {}: {source}", .path.display())]
    Write {
        /// File that was being written.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The log file is not a valid call log.
    #[error("Failed to parse call log {}: {source}", .path.display())]
    Parse {
        /// File that was being parsed.
        path: PathBuf,
        /// Underlying YAML error.
        source: serde_yaml::Error,
    },
    /// The log could not be serialized.
    #[error("Failed to serialize call log {name}: {source}")]
    Serialize {
        /// Name of the log.
        name: String,
        /// Underlying YAML error.
        source: serde_yaml::Error,
    },
}
