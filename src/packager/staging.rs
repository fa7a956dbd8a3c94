//! Ephemeral staging tree for one package build.
//!
//! The staging tree is a scoped resource: one assembler invocation owns it
//! exclusively, and dropping it removes the directory recursively. Cleanup
//! therefore happens on every exit path, including early returns on IO
//! errors during assembly.

use crate::error::{ErrorExt, Result};
use std::io;
use std::path::{Path, PathBuf};

/// Rooted directory holding rendered artifacts before compression.
#[derive(Debug)]
pub struct StagingTree {
    root: PathBuf,
}

impl StagingTree {
    /// Creates a fresh staging tree named `m5pack-staging-<suffix>` under
    /// the given parent.
    ///
    /// The suffix comes from the descriptor id, so concurrent builds of
    /// different descriptors would never collide. Leftovers from an
    /// interrupted earlier run are erased first.
    pub async fn create(parent: &Path, suffix: &str) -> Result<Self> {
        let root = parent.join(format!("m5pack-staging-{suffix}"));

        match tokio::fs::remove_dir_all(&root).await {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e).fs_context("erasing stale staging tree", &root),
        }

        tokio::fs::create_dir_all(&root)
            .await
            .fs_context("creating staging tree", &root)?;

        Ok(Self { root })
    }

    /// Root of the staging tree.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Writes a text artifact at a path relative to the staging root,
    /// creating parent directories as needed.
    pub async fn write_file(&self, relative: impl AsRef<Path>, contents: &str) -> Result<PathBuf> {
        let path = self.root.join(relative.as_ref());
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .fs_context("creating staging subdirectory", parent)?;
        }
        tokio::fs::write(&path, contents)
            .await
            .fs_context("writing staged artifact", &path)?;
        Ok(path)
    }

    /// Creates an empty directory (tree) relative to the staging root.
    pub async fn create_dir(&self, relative: impl AsRef<Path>) -> Result<()> {
        let path = self.root.join(relative.as_ref());
        tokio::fs::create_dir_all(&path)
            .await
            .fs_context("creating staging subdirectory", &path)
    }
}

impl Drop for StagingTree {
    fn drop(&mut self) {
        // Cleanup must not panic or mask the original error path.
        let _ = std::fs::remove_dir_all(&self.root);
    }
}
