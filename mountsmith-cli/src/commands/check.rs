//! `mountsmith check` — renderer availability probe, nothing else.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use mountsmith_setup::ensure_renderer;

/// Arguments for `mountsmith check`.
#[derive(Args, Debug)]
pub struct CheckArgs {}

impl CheckArgs {
    pub fn run(self) -> Result<()> {
        let path = ensure_renderer().context("the OpenSCAD renderer is required")?;
        println!("{} Found OpenSCAD at {}", "✓".green(), path.display());
        Ok(())
    }
}
