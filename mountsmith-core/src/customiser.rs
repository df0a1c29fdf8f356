//! Customiser parameter-document generation.
//!
//! The renderer selects one parameter set by key (`-P stem_<name>` /
//! `-P block_<name>`) from a single shared document; each set pins the one
//! variable the description file switches on. The document is regenerated
//! from scratch every run and written once, before any render starts.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{io_err, BuildError};
use crate::paths;
use crate::types::{BuildConfig, ItemClass, ItemName};

/// Wire constant required by the renderer's customiser format.
pub const FILE_FORMAT_VERSION: &str = "1";

// ---------------------------------------------------------------------------
// Document types
// ---------------------------------------------------------------------------

/// One named bundle of renderer inputs. Serializes to a single-field object:
/// `{"stem_type": <name>}` or `{"connection_block_type": <name>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterSet {
    Stem { stem_type: String },
    ConnectionBlock { connection_block_type: String },
}

impl ParameterSet {
    pub fn for_item(class: ItemClass, name: &ItemName) -> Self {
        match class {
            ItemClass::Stem => ParameterSet::Stem {
                stem_type: name.0.clone(),
            },
            ItemClass::ConnectionBlock => ParameterSet::ConnectionBlock {
                connection_block_type: name.0.clone(),
            },
        }
    }
}

/// The generated customiser file, one parameter set per configured item.
///
/// `BTreeMap` keeps serialization order deterministic across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDocument {
    #[serde(rename = "fileFormatVersion")]
    pub file_format_version: String,
    #[serde(rename = "parameterSets")]
    pub parameter_sets: BTreeMap<String, ParameterSet>,
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Pure function from a build config to its parameter document: exactly one
/// entry per item across both collections, keyed `stem_<name>` / `block_<name>`.
pub fn generate(config: &BuildConfig) -> ParameterDocument {
    let parameter_sets = config
        .items()
        .map(|(class, item)| {
            (
                class.parameter_key(&item.name),
                ParameterSet::for_item(class, &item.name),
            )
        })
        .collect();

    ParameterDocument {
        file_format_version: FILE_FORMAT_VERSION.to_string(),
        parameter_sets,
    }
}

/// Serialize `doc` and persist it to `<root>/openscad/customiser.json`.
///
/// Creates the `openscad/` directory if needed. Returns the written path.
pub fn write_at(root: &Path, doc: &ParameterDocument) -> Result<PathBuf, BuildError> {
    let path = paths::customiser_path(root);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }
    let json = serde_json::to_string(doc)?;
    std::fs::write(&path, json).map_err(|e| io_err(&path, e))?;
    Ok(path)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemSpec;
    use tempfile::TempDir;

    fn spec(name: &str) -> ItemSpec {
        ItemSpec {
            name: ItemName::from(name),
            licence: None,
        }
    }

    fn config(stems: &[&str], blocks: &[&str]) -> BuildConfig {
        BuildConfig {
            stems: stems.iter().copied().map(spec).collect(),
            connection_blocks: blocks.iter().copied().map(spec).collect(),
        }
    }

    #[test]
    fn one_entry_per_item_across_both_collections() {
        let doc = generate(&config(&["round", "hex", "slim"], &["snap", "clip"]));
        assert_eq!(doc.parameter_sets.len(), 5);
        for name in ["round", "hex", "slim"] {
            assert!(doc.parameter_sets.contains_key(&format!("stem_{name}")));
        }
        for name in ["snap", "clip"] {
            assert!(doc.parameter_sets.contains_key(&format!("block_{name}")));
        }
    }

    #[test]
    fn same_name_in_both_collections_stays_disjoint() {
        let doc = generate(&config(&["flat"], &["flat"]));
        assert_eq!(doc.parameter_sets.len(), 2);
        assert_eq!(
            doc.parameter_sets.get("stem_flat"),
            Some(&ParameterSet::Stem {
                stem_type: "flat".to_string()
            })
        );
        assert_eq!(
            doc.parameter_sets.get("block_flat"),
            Some(&ParameterSet::ConnectionBlock {
                connection_block_type: "flat".to_string()
            })
        );
    }

    #[test]
    fn empty_config_yields_empty_document() {
        let doc = generate(&config(&[], &[]));
        assert_eq!(doc.file_format_version, "1");
        assert!(doc.parameter_sets.is_empty());
    }

    #[test]
    fn serializes_to_the_renderer_wire_format() {
        let doc = generate(&config(&["round"], &["snap"]));
        let json = serde_json::to_string(&doc).expect("serialize");
        assert_eq!(
            json,
            r#"{"fileFormatVersion":"1","parameterSets":{"block_snap":{"connection_block_type":"snap"},"stem_round":{"stem_type":"round"}}}"#
        );
    }

    #[test]
    fn document_roundtrips_through_json() {
        let doc = generate(&config(&["round", "hex"], &["snap"]));
        let json = serde_json::to_string(&doc).expect("serialize");
        let back: ParameterDocument = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(doc, back);
    }

    #[test]
    fn write_at_creates_scad_dir_and_file() {
        let root = TempDir::new().expect("tempdir");
        let doc = generate(&config(&["round"], &[]));

        let path = write_at(root.path(), &doc).expect("write");
        assert_eq!(path, paths::customiser_path(root.path()));

        let on_disk = std::fs::read_to_string(&path).expect("read back");
        let parsed: ParameterDocument = serde_json::from_str(&on_disk).expect("parse");
        assert_eq!(parsed, doc);
    }

    #[test]
    fn write_at_replaces_a_previous_document() {
        let root = TempDir::new().expect("tempdir");
        write_at(root.path(), &generate(&config(&["old"], &[]))).expect("first write");

        let fresh = generate(&config(&["new"], &[]));
        write_at(root.path(), &fresh).expect("second write");

        let on_disk = std::fs::read_to_string(paths::customiser_path(root.path())).expect("read");
        let parsed: ParameterDocument = serde_json::from_str(&on_disk).expect("parse");
        assert!(parsed.parameter_sets.contains_key("stem_new"));
        assert!(!parsed.parameter_sets.contains_key("stem_old"));
    }
}
