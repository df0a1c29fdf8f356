//! # mountsmith-render
//!
//! Render driver: invokes the external OpenSCAD renderer once per configured
//! item and collects per-item outcomes into a batch report. A failed item is
//! logged and recorded, never fatal mid-batch; the caller decides the run's
//! fate from the returned report.

pub mod driver;
pub mod error;

pub use driver::{render_all_at, BatchReport, RenderOutcome, RenderStatus, Renderer};
pub use error::InvokeError;
