//! Error types for mountsmith-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from config loading and customiser generation.
#[derive(Debug, Error)]
pub enum BuildError {
    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Build config parse error — includes file path and position context from serde_json.
    #[error("failed to parse build config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// JSON serialization error (customiser write path).
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience constructor for [`BuildError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> BuildError {
    BuildError::Io {
        path: path.into(),
        source,
    }
}
