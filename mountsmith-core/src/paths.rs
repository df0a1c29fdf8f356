//! The fixed project layout, relative to a project root.
//!
//! ```text
//! <root>/
//!   build-config.json        (input — the two item collections)
//!   openscad/
//!     mount.scad             (description file consumed by the renderer)
//!     customiser.json        (generated each run)
//!     BOSL/                  (fetched each run, fully replaced)
//!   output/
//!     stems/<name>.stl
//!     connection_blocks/<name>.stl
//! ```

use std::path::{Path, PathBuf};

use crate::types::{ItemClass, ItemName};

pub const CONFIG_FILE: &str = "build-config.json";
pub const SCAD_DIR: &str = "openscad";
pub const DESCRIPTION_FILE: &str = "mount.scad";
pub const CUSTOMISER_FILE: &str = "customiser.json";
pub const LIBRARY_DIR: &str = "BOSL";
pub const LIBRARY_GIT_URL: &str = "https://github.com/revarbat/BOSL.git";
pub const OUTPUT_DIR: &str = "output";
pub const ARTIFACT_EXT: &str = "stl";
pub const RENDERER_PROGRAM: &str = "openscad";

/// `<root>/build-config.json`
pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// `<root>/openscad/`
pub fn scad_dir(root: &Path) -> PathBuf {
    root.join(SCAD_DIR)
}

/// `<root>/openscad/mount.scad`
pub fn description_path(root: &Path) -> PathBuf {
    scad_dir(root).join(DESCRIPTION_FILE)
}

/// `<root>/openscad/customiser.json`
pub fn customiser_path(root: &Path) -> PathBuf {
    scad_dir(root).join(CUSTOMISER_FILE)
}

/// `<root>/openscad/BOSL/`
pub fn library_dir(root: &Path) -> PathBuf {
    scad_dir(root).join(LIBRARY_DIR)
}

/// `<root>/output/`
pub fn output_root(root: &Path) -> PathBuf {
    root.join(OUTPUT_DIR)
}

/// `<root>/output/stems/` or `<root>/output/connection_blocks/`
pub fn class_output_dir(root: &Path, class: ItemClass) -> PathBuf {
    output_root(root).join(class.subdir())
}

/// `<root>/output/<class-subdir>/<name>.stl`
pub fn artifact_path(root: &Path, class: ItemClass, name: &ItemName) -> PathBuf {
    class_output_dir(root, class).join(format!("{}.{}", name, ARTIFACT_EXT))
}
