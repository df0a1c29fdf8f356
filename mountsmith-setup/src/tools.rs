//! External tool availability checks.

use std::path::PathBuf;

use mountsmith_core::paths::RENDERER_PROGRAM;

use crate::error::SetupError;

/// Resolve `program` on PATH, or fail with [`SetupError::ToolMissing`].
///
/// Presence is not expected to be transient, so there is no retry.
pub fn find_program(program: &str) -> Result<PathBuf, SetupError> {
    which::which(program).map_err(|_| SetupError::ToolMissing {
        program: program.to_string(),
    })
}

/// Verify the OpenSCAD renderer is reachable on PATH.
pub fn ensure_renderer() -> Result<PathBuf, SetupError> {
    find_program(RENDERER_PROGRAM)
}
