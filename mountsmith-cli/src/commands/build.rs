//! `mountsmith build` — the six-stage build pipeline.
//!
//! Stage order is fixed: availability check, library fetch, config load,
//! customiser generation, output-tree reset, render batch. Stages 1–5 are
//! fail-fast; the render batch tolerates per-item failures and the run
//! fails once, at the end, if any item failed.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;

use mountsmith_core::{config, customiser, paths};
use mountsmith_render::{render_all_at, BatchReport, RenderStatus, Renderer};
use mountsmith_setup::{ensure_renderer, prepare_output_tree_at, LibraryFetcher};

/// Arguments for `mountsmith build`.
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Project root containing build-config.json and the openscad/ sources.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

impl BuildArgs {
    pub fn run(self) -> Result<()> {
        let root = self
            .root
            .canonicalize()
            .with_context(|| format!("cannot resolve project root '{}'", self.root.display()))?;
        run_pipeline(&root)
    }
}

/// Run every stage against `root`. Any `Err` here reaches `main` and exits
/// non-zero with its cause chain — no failure is ever swallowed.
pub fn run_pipeline(root: &Path) -> Result<()> {
    // 1. Renderer must exist before anything touches the filesystem.
    let renderer_path =
        ensure_renderer().context("setup failed: the OpenSCAD renderer is required")?;
    println!("{} Found OpenSCAD at {}", ok(), renderer_path.display());

    // 2. Clean fetch of the Belfry OpenSCAD library.
    println!("  Pulling Belfry OpenSCAD library...");
    LibraryFetcher::new()
        .fetch(&paths::library_dir(root))
        .context("setup failed: could not fetch the BOSL library")?;
    println!("{} Pulled Belfry OpenSCAD library", ok());

    // 3. Load the build config.
    let config = config::load_at(root).context("setup failed: could not load the build config")?;
    println!(
        "{} Loaded {} stem and {} connection block configurations",
        ok(),
        config.stems.len(),
        config.connection_blocks.len()
    );

    // 4. Generate and persist the customiser document.
    let document = customiser::generate(&config);
    customiser::write_at(root, &document)
        .context("setup failed: could not write the customiser file")?;
    println!("{} Generated customiser parameter file", ok());

    // 5. Reset the output tree.
    prepare_output_tree_at(root).context("setup failed: could not prepare the output folder")?;
    println!("{} Prepared clean output folder", ok());

    // 6. Render everything; per-item failures are tolerated until here.
    let report = render_all_at(root, &config, &Renderer::new());
    print_report(&report);

    if report.has_failures() {
        bail!("{} of {} renders failed", report.failed(), report.total());
    }
    println!("{} {} components rendered. Finished!", ok(), report.rendered());
    Ok(())
}

fn print_report(report: &BatchReport) {
    for outcome in &report.outcomes {
        match &outcome.status {
            RenderStatus::Rendered => {
                println!(
                    "  {}  {} '{}' -> {}",
                    ok(),
                    outcome.class,
                    outcome.name,
                    outcome.output.display()
                );
            }
            RenderStatus::Failed { message } => {
                println!(
                    "  {}  {} '{}': {}",
                    fail(),
                    outcome.class,
                    outcome.name,
                    message
                );
            }
        }
    }
}

fn ok() -> String {
    "✓".green().to_string()
}

fn fail() -> String {
    "✗".red().to_string()
}
