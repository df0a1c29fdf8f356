//! Domain types for the mountsmith build config.
//!
//! All types are serializable/deserializable via serde + serde_json.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed name for a renderable item variant.
///
/// Unique within its collection; doubles as the artifact file stem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemName(pub String);

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ItemName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ItemName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// The two renderable collections in a build config.
///
/// Everything that differs between them — parameter-set key prefix, the
/// parameter field the renderer selects on, and the output subdirectory —
/// hangs off this enum so the pipeline never branches on strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemClass {
    Stem,
    ConnectionBlock,
}

impl ItemClass {
    /// Both classes in render order: stems first, then connection blocks.
    pub fn all() -> &'static [ItemClass] {
        &[ItemClass::Stem, ItemClass::ConnectionBlock]
    }

    /// Prefix for parameter-set keys; keeps the two namespaces disjoint.
    pub fn key_prefix(&self) -> &'static str {
        match self {
            ItemClass::Stem => "stem_",
            ItemClass::ConnectionBlock => "block_",
        }
    }

    /// `stem_<name>` or `block_<name>` — the parameter-set selector.
    pub fn parameter_key(&self, name: &ItemName) -> String {
        format!("{}{}", self.key_prefix(), name)
    }

    /// The field inside a parameter set that the description file switches on.
    pub fn parameter_field(&self) -> &'static str {
        match self {
            ItemClass::Stem => "stem_type",
            ItemClass::ConnectionBlock => "connection_block_type",
        }
    }

    /// Output subdirectory name under `output/`.
    pub fn subdir(&self) -> &'static str {
        match self {
            ItemClass::Stem => "stems",
            ItemClass::ConnectionBlock => "connection_blocks",
        }
    }
}

impl fmt::Display for ItemClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemClass::Stem => write!(f, "stem"),
            ItemClass::ConnectionBlock => write!(f, "connection block"),
        }
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// One renderable variant from the build config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSpec {
    pub name: ItemName,
    /// Attribution notice printed before the item is rendered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub licence: Option<String>,
}

/// Root of `build-config.json`: the two collections of item variants.
///
/// Immutable once loaded. Both collections are required — a config missing
/// either fails at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    pub stems: Vec<ItemSpec>,
    pub connection_blocks: Vec<ItemSpec>,
}

impl BuildConfig {
    /// Every item paired with its class, in render order: all stems, then
    /// all connection blocks. The single source of batch ordering.
    pub fn items(&self) -> impl Iterator<Item = (ItemClass, &ItemSpec)> {
        self.stems
            .iter()
            .map(|item| (ItemClass::Stem, item))
            .chain(
                self.connection_blocks
                    .iter()
                    .map(|item| (ItemClass::ConnectionBlock, item)),
            )
    }

    /// Total number of renderable items across both collections.
    pub fn item_count(&self) -> usize {
        self.stems.len() + self.connection_blocks.len()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(name: &str) -> ItemSpec {
        ItemSpec {
            name: ItemName::from(name),
            licence: None,
        }
    }

    #[test]
    fn newtype_display() {
        assert_eq!(ItemName::from("round").to_string(), "round");
    }

    #[test]
    fn newtype_equality() {
        let a = ItemName::from("x");
        let b = ItemName::from(String::from("x"));
        assert_eq!(a, b);
    }

    #[test]
    fn parameter_keys_are_prefixed_per_class() {
        let name = ItemName::from("round");
        assert_eq!(ItemClass::Stem.parameter_key(&name), "stem_round");
        assert_eq!(ItemClass::ConnectionBlock.parameter_key(&name), "block_round");
    }

    #[test]
    fn parameter_fields_differ_per_class() {
        assert_eq!(ItemClass::Stem.parameter_field(), "stem_type");
        assert_eq!(
            ItemClass::ConnectionBlock.parameter_field(),
            "connection_block_type"
        );
    }

    #[test]
    fn items_yields_stems_before_blocks() {
        let config = BuildConfig {
            stems: vec![spec("a"), spec("b")],
            connection_blocks: vec![spec("c")],
        };
        let order: Vec<(ItemClass, &str)> = config
            .items()
            .map(|(class, item)| (class, item.name.0.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                (ItemClass::Stem, "a"),
                (ItemClass::Stem, "b"),
                (ItemClass::ConnectionBlock, "c"),
            ]
        );
        assert_eq!(config.item_count(), 3);
    }

    #[test]
    fn config_serde_roundtrip() {
        let config = BuildConfig {
            stems: vec![ItemSpec {
                name: ItemName::from("round"),
                licence: Some("CC-BY-4.0 Example Author".to_string()),
            }],
            connection_blocks: vec![spec("snap")],
        };
        let json = serde_json::to_string(&config).expect("serialize");
        let back: BuildConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(config, back);
    }

    #[test]
    fn licence_is_omitted_when_absent() {
        let json = serde_json::to_string(&spec("snap")).expect("serialize");
        assert_eq!(json, r#"{"name":"snap"}"#);
    }
}
