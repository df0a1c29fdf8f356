//! Error types for mountsmith-render.

use std::path::PathBuf;

use thiserror::Error;

/// A single renderer invocation failure. Recoverable per item — the driver
/// records it as a failed outcome and moves on.
#[derive(Debug, Error)]
pub enum InvokeError {
    /// The renderer process could not be spawned.
    #[error("failed to start renderer '{program}': {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The renderer exited non-zero.
    #[error("renderer exited with status {exit_code:?}: {stderr}")]
    Renderer {
        exit_code: Option<i32>,
        stderr: String,
    },
}
