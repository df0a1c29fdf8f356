//! Build-config loading.
//!
//! # API pattern
//!
//! Loaders take an explicit project root (`_at`) so tests can point them at a
//! `TempDir`. There is no schema validation beyond the structural parse.

use std::path::Path;

use crate::error::{io_err, BuildError};
use crate::paths;
use crate::types::BuildConfig;

/// Load `<root>/build-config.json` into a [`BuildConfig`].
///
/// Returns `BuildError::Io` if the file is unreadable,
/// `BuildError::Parse` (with path + position context) if malformed.
pub fn load_at(root: &Path) -> Result<BuildConfig, BuildError> {
    let path = paths::config_path(root);
    let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
    serde_json::from_str(&contents).map_err(|e| BuildError::Parse { path, source: e })
}
