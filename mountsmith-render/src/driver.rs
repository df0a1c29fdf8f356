//! Per-item render driving and batch aggregation.
//!
//! ## Failure policy
//!
//! Isolated-failure, not fail-fast: one item's subprocess failure is logged
//! as a warning and recorded, then the batch continues through both
//! collections. The driver returns the full ordered [`BatchReport`]; mapping
//! "any failure" to a non-zero exit is the caller's job. This maximizes the
//! artifacts produced per run while still surfacing failure to CI.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use mountsmith_core::paths;
use mountsmith_core::types::{BuildConfig, ItemClass, ItemName};

use crate::error::InvokeError;

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Handle to the external OpenSCAD renderer.
///
/// The program path is injectable so tests can substitute a fake script;
/// production callers use [`Renderer::new`], which resolves from PATH.
#[derive(Debug, Clone)]
pub struct Renderer {
    program: PathBuf,
}

impl Renderer {
    /// Renderer using `openscad` from PATH.
    pub fn new() -> Self {
        Self::with_program(PathBuf::from(paths::RENDERER_PROGRAM))
    }

    /// Renderer using an explicit binary.
    pub fn with_program(program: PathBuf) -> Self {
        Renderer { program }
    }

    /// Render one parameter set from `customiser` to `out_path`.
    ///
    /// Invocation: `openscad -p <customiser> -P <key> -o <out_path> <scad>`.
    /// Success is a zero exit status; stderr is captured into the error
    /// otherwise.
    pub fn render_item(
        &self,
        customiser: &Path,
        key: &str,
        out_path: &Path,
        scad: &Path,
    ) -> Result<(), InvokeError> {
        let output = Command::new(&self.program)
            .arg("-p")
            .arg(customiser)
            .arg("-P")
            .arg(key)
            .arg("-o")
            .arg(out_path)
            .arg(scad)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| InvokeError::Spawn {
                program: self.program.clone(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(InvokeError::Renderer {
                exit_code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Result of one item's render attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderStatus {
    Rendered,
    Failed { message: String },
}

/// One item's attempt: what was rendered, where to, and how it went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutcome {
    pub class: ItemClass,
    pub name: ItemName,
    pub output: PathBuf,
    pub status: RenderStatus,
}

impl RenderOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self.status, RenderStatus::Rendered)
    }
}

/// Ordered per-item outcomes for a whole batch.
///
/// This is the explicit accumulator the run's exit status derives from —
/// there is no shared mutable error flag anywhere in the pipeline.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<RenderOutcome>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn rendered(&self) -> usize {
        self.outcomes.iter().filter(|o| o.succeeded()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.rendered()
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }

    /// The failed outcomes, in attempt order.
    pub fn failures(&self) -> impl Iterator<Item = &RenderOutcome> {
        self.outcomes.iter().filter(|o| !o.succeeded())
    }
}

// ---------------------------------------------------------------------------
// Batch driving
// ---------------------------------------------------------------------------

/// Render every configured item: all stems, then all connection blocks.
///
/// Emits a progress notice (and licence attribution, when present) before
/// each invocation. Always attempts every item; returns the complete report.
pub fn render_all_at(root: &Path, config: &BuildConfig, renderer: &Renderer) -> BatchReport {
    let customiser = paths::customiser_path(root);
    let scad = paths::description_path(root);

    let mut outcomes = Vec::with_capacity(config.item_count());
    for (class, item) in config.items() {
        let key = class.parameter_key(&item.name);
        let out_path = paths::artifact_path(root, class, &item.name);

        tracing::info!(
            kind = %class,
            item = %item.name,
            out = %out_path.display(),
            "rendering {class} '{}'",
            item.name
        );
        if let Some(licence) = &item.licence {
            tracing::info!(item = %item.name, "licence: {licence}");
        }

        let status = match renderer.render_item(&customiser, &key, &out_path, &scad) {
            Ok(()) => RenderStatus::Rendered,
            Err(err) => {
                tracing::warn!(
                    kind = %class,
                    item = %item.name,
                    "failed to render {class} '{}': {err}",
                    item.name
                );
                RenderStatus::Failed {
                    message: err.to_string(),
                }
            }
        };

        outcomes.push(RenderOutcome {
            class,
            name: item.name.clone(),
            output: out_path,
            status,
        });
    }

    BatchReport { outcomes }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
