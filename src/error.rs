//! Error types for venvman operations.
//!
//! This module defines [`VenvmanError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `VenvmanError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `VenvmanError::Other`) for unexpected errors
//! - Most errors are recoverable: the menu loop logs them and re-prompts

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for venvman operations.
#[derive(Debug, Error)]
pub enum VenvmanError {
    /// Subprocess failed to spawn or exited with a non-zero status.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// The Python installer exited with a non-zero status.
    #[error("Python installer failed with exit code {code:?}")]
    PythonInstall { code: Option<i32> },

    /// A download could not be completed.
    #[error("Download of {url} failed: {message}")]
    Download { url: String, message: String },

    /// Requirements file not found at the given path.
    #[error("Requirements file not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// Prompt was cancelled or the terminal went away.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP error wrapper.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VenvmanError {
    /// Whether this error came from a spawn failure with "not found",
    /// meaning the executable itself is absent from PATH.
    pub fn is_not_found(&self) -> bool {
        matches!(self, VenvmanError::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Result type alias for venvman operations.
pub type Result<T> = std::result::Result<T, VenvmanError>;
