//! Mountsmith core library — domain types, configuration, customiser generation.
//!
//! Public API surface:
//! - [`types`] — [`BuildConfig`], [`ItemSpec`], [`ItemClass`], [`ItemName`]
//! - [`config`] — build-config loading
//! - [`customiser`] — parameter-document generation and persistence
//! - [`paths`] — the fixed project layout
//! - [`error`] — [`BuildError`]

pub mod config;
pub mod customiser;
pub mod error;
pub mod paths;
pub mod types;

pub use customiser::{ParameterDocument, ParameterSet};
pub use error::BuildError;
pub use types::{BuildConfig, ItemClass, ItemName, ItemSpec};
