//! Package assembly orchestration.
//!
//! One [`PackageAssembler::assemble`] call takes one descriptor through the
//! full pipeline: staging tree, rendered artifacts, placeholder assets,
//! compressed archive. The staging tree is dropped on every exit path, so a
//! failed build leaves nothing behind but the error.

use super::{archive, paths, render, staging::StagingTree};
use crate::catalog::ApplicationDescriptor;
use crate::error::{ErrorExt, Result};
use chrono::Local;
use std::path::{Path, PathBuf};

/// Placeholder asset directories created in every package.
const ASSET_DIRS: [&str; 4] = [
    "assets/screenshots",
    "assets/fonts",
    "assets/images",
    "assets/sounds",
];

/// Assembles `.m5app` archives from application descriptors.
#[derive(Debug, Clone)]
pub struct PackageAssembler {
    output_dir: PathBuf,
    staging_root: PathBuf,
}

impl PackageAssembler {
    /// Creates an assembler writing archives into `output_dir`.
    ///
    /// Staging trees default to the system temp directory.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            staging_root: std::env::temp_dir(),
        }
    }

    /// Overrides where staging trees are created.
    pub fn staging_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.staging_root = root.into();
        self
    }

    /// Directory the archives are written into.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Builds the complete package archive for one descriptor.
    ///
    /// # Process
    ///
    /// 1. Create a fresh staging tree named from the id suffix
    /// 2. Render and stage manifest, README, install script (executable),
    ///    LICENSE, CHANGELOG and one stub per declared source file
    /// 3. Create the placeholder asset directories and icon marker
    /// 4. Compress the tree into `<id>-v<version>.m5app` in the output
    ///    directory (created if absent, overwritten if present)
    ///
    /// # Errors
    ///
    /// Any IO or rendering failure propagates to the caller; the staging
    /// tree is removed first in every case.
    pub async fn assemble(&self, app: &ApplicationDescriptor) -> Result<PathBuf> {
        log::info!("Assembling package for {} v{}", app.id, app.version);

        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .fs_context("creating output directory", &self.output_dir)?;

        let staging = StagingTree::create(&self.staging_root, paths::id_suffix(&app.id)).await?;
        let now = Local::now();
        let today = now.date_naive();

        staging
            .write_file("manifest.json", &render::render_manifest(app, now)?)
            .await?;
        staging
            .write_file("README.md", &render::render_overview(app, today)?)
            .await?;
        staging
            .write_file("CHANGELOG.md", &render::render_changelog(app, today)?)
            .await?;
        staging.write_file("LICENSE", &render::render_license()).await?;

        let script_path = staging
            .write_file("install.sh", &render::render_install_script(app)?)
            .await?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tokio::fs::set_permissions(&script_path, std::fs::Permissions::from_mode(0o755))
                .await
                .fs_context("marking install script executable", &script_path)?;
        }
        #[cfg(not(unix))]
        let _ = script_path;

        for source_file in &app.source_files {
            staging
                .write_file(
                    Path::new("src").join(source_file),
                    &render::render_source_stub(app, source_file)?,
                )
                .await?;
        }

        for dir in ASSET_DIRS {
            staging.create_dir(dir).await?;
        }
        staging
            .write_file(paths::icon_marker_path(&app.id), &render::render_icon_marker(app)?)
            .await?;

        let destination = self
            .output_dir
            .join(paths::archive_name(&app.id, &app.version));
        let archive_path = archive::compress_tree(staging.path(), &destination).await?;

        log::debug!("Created archive {}", archive_path.display());
        Ok(archive_path)
    }
}
