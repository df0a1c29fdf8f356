//! # mountsmith-setup
//!
//! Environment preparation for a build run: renderer availability probe,
//! clean-slate BOSL library fetch, and output-tree reset. Every operation
//! here is all-or-nothing — a setup failure aborts the whole run.

pub mod error;
pub mod fetch;
pub mod output;
pub mod tools;

pub use error::SetupError;
pub use fetch::LibraryFetcher;
pub use output::prepare_output_tree_at;
pub use tools::{ensure_renderer, find_program};
