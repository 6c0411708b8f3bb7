//! Typed error variants for the gapic-settings crate.
//!
//! The public `load`/`save` operations never surface these: they log them at
//! debug level and fall back to defaults. They are exposed for callers of the
//! lower-level `try_read`/`try_write` helpers who want to observe failures.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file could not be opened, read, or written.
    #[error("I/O error on settings file '{}': {source}", path.display())]
    Io {
        /// Path of the settings file involved.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl SettingsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SettingsError::Io {
            path: path.into(),
            source,
        }
    }
}
