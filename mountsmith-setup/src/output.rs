//! Output-tree preparation.
//!
//! Every run is a full rebuild: the previous output directory is removed
//! wholesale, then the base directory and one subdirectory per item class
//! are created. Prior output is never merged with.

use std::path::{Path, PathBuf};

use mountsmith_core::paths;
use mountsmith_core::types::ItemClass;

use crate::error::{io_err, SetupError};

/// Guarantee `<root>/output/{stems,connection_blocks}` exists, clean and empty.
///
/// Returns the output base path. Failure to remove stale output is fatal —
/// partial old output must not survive into a new run.
pub fn prepare_output_tree_at(root: &Path) -> Result<PathBuf, SetupError> {
    let base = paths::output_root(root);
    if base.exists() {
        tracing::info!(path = %base.display(), "cleaning previous output");
        std::fs::remove_dir_all(&base).map_err(|e| io_err(&base, e))?;
    }

    std::fs::create_dir_all(&base).map_err(|e| io_err(&base, e))?;
    for class in ItemClass::all() {
        let dir = paths::class_output_dir(root, *class);
        std::fs::create_dir(&dir).map_err(|e| io_err(&dir, e))?;
    }
    Ok(base)
}
