//! Command line interface for the package generator.
//!
//! The driver loads the catalog, packages every descriptor in store order,
//! and prints a summary. A single descriptor failure aborts the remaining
//! run; the process exits non-zero.

mod args;
mod output;

pub use args::Args;
pub use output::OutputManager;

use crate::catalog::Catalog;
use crate::error::{CliError, Context, Result};
use crate::packager::PackageAssembler;
use std::path::Path;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();

    if let Err(reason) = args.validate() {
        return Err(CliError::InvalidArguments { reason }.into());
    }

    let output = OutputManager::new(args.verbose, false);

    let catalog = match &args.catalog {
        Some(path) => Catalog::load(path).await?,
        None => Catalog::builtin()?,
    };

    output.section("M5Stack Tab5 App Package Generator");
    output.info(&format!(
        "Packaging {} applications into {}",
        catalog.len(),
        args.output.display()
    ));

    let assembler = PackageAssembler::new(&args.output);
    let mut archives = Vec::with_capacity(catalog.len());

    for app in catalog.apps() {
        output.progress(&format!("Generating package for {}...", app.name));
        output.verbose(&format!(
            "  {} v{} ({} source files)",
            app.id,
            app.version,
            app.source_files.len()
        ));

        let archive = assembler.assemble(app).await?;
        archives.push(archive);
    }

    output.success(&format!("Successfully generated {} packages:", archives.len()));
    for archive in &archives {
        let size_kb = tokio::fs::metadata(archive).await?.len() as f64 / 1024.0;
        let name = archive.file_name().context("archive path has no file name")?;
        output.indent(&format!("{} ({size_kb:.1}KB)", name.to_string_lossy()));
    }
    output.info(&format!(
        "Packages available in: {}",
        display_dir(&args.output)
    ));

    Ok(0)
}

/// Absolute output path when resolvable, the given path otherwise.
fn display_dir(path: &Path) -> String {
    std::fs::canonicalize(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}
