//! Error types for mountsmith-setup.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from environment setup.
#[derive(Debug, Error)]
pub enum SetupError {
    /// A required external program was not found on PATH.
    #[error("required tool '{program}' was not found on PATH — is it installed?")]
    ToolMissing { program: String },

    /// Removing a stale dependency checkout failed; a partially-deleted
    /// library must never be reused.
    #[error("failed to remove stale checkout at {path}: {source}")]
    CleanupFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `git clone` exited non-zero.
    #[error("git clone of {url} failed (exit {exit_code:?}): {stderr}")]
    FetchFailed {
        url: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`SetupError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SetupError {
    SetupError::Io {
        path: path.into(),
        source,
    }
}
