//! Linter error types.

use std::time::Duration;

use thiserror::Error;

/// Reasons a lint run produced no usable result.
///
/// None of these are surfaced to the user as diagnostics. The editor keeps
/// whatever it was showing before.
#[derive(Debug, Error)]
pub enum LinterError {
    /// The linter process could not be started (usually missing `node_modules`).
    #[error("Failed to start linter: {0}")]
    Spawn(#[source] std::io::Error),

    /// The linter did not finish within the time bound and was killed.
    #[error("Linter timed out after {0:?}")]
    Timeout(Duration),

    /// I/O error while talking to the linter process.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Non-zero exit without anything on stdout.
    #[error("Linter exited with code {code} but produced no output")]
    EmptyOutput { code: i32 },

    /// The linter was killed by a signal.
    #[error("Linter was terminated by a signal")]
    Terminated,

    /// Stdout was not the expected JSON object.
    #[error("Malformed linter output: {0}")]
    MalformedOutput(#[from] serde_json::Error),

    /// The JSON object did not contain an entry for the linted file.
    #[error("Linter output has no entry for {0}")]
    MissingEntry(String),

    /// The document path cannot be expressed relative to the config directory.
    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

impl LinterError {
    /// Creates an invalid path error.
    pub fn invalid_path(message: impl Into<String>) -> Self {
        Self::InvalidPath(message.into())
    }
}
