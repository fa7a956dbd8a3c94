//! Deflate-compressed package archive creation.

use crate::bail;
use crate::error::{ErrorExt, PackagerError, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Compresses a staged tree into a zip archive at `destination`.
///
/// Entry names are paths relative to `staging_root`, so the archive
/// preserves the staged directory structure and no absolute paths leak in.
/// Entries are written in sorted path order for deterministic output, and
/// unix permission bits (the executable install script in particular) are
/// preserved. An existing archive at the destination is overwritten; a
/// partially written archive is removed when compression fails.
///
/// The zip writer is synchronous, so the walk runs on the blocking pool.
pub async fn compress_tree(staging_root: &Path, destination: &Path) -> Result<PathBuf> {
    let staging_root = staging_root.to_path_buf();
    let destination = destination.to_path_buf();

    tokio::task::spawn_blocking(move || {
        let result = write_zip(&staging_root, &destination);
        if result.is_err() {
            // No corrupt archive may survive a failed build.
            let _ = std::fs::remove_file(&destination);
        }
        result.map(|()| destination)
    })
    .await
    .map_err(|e| PackagerError::Generic(format!("archive task panicked: {e}")))?
}

fn write_zip(staging_root: &Path, destination: &Path) -> Result<()> {
    let file = std::fs::File::create(destination)
        .fs_context("creating package archive", destination)?;
    let mut writer = ZipWriter::new(file);

    // Sorted traversal keeps re-runs byte-for-byte comparable.
    let mut entries: Vec<_> = walkdir::WalkDir::new(staging_root)
        .follow_links(false)
        .into_iter()
        .collect::<std::result::Result<_, _>>()
        .map_err(|e| PackagerError::Generic(format!("walking staging tree: {e}")))?;
    entries.sort_by_key(|e| e.path().to_path_buf());

    for entry in entries {
        let Ok(rel_path) = entry.path().strip_prefix(staging_root) else {
            bail!("staging entry {} escaped the staging root", entry.path().display());
        };
        if rel_path.as_os_str().is_empty() {
            continue; // the root itself
        }

        let entry_name = rel_path.to_string_lossy().replace('\\', "/");
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .unix_permissions(entry_mode(&entry));

        if entry.file_type().is_dir() {
            writer.add_directory(format!("{entry_name}/"), options)?;
        } else {
            let contents =
                std::fs::read(entry.path()).fs_context("reading staged artifact", entry.path())?;
            writer.start_file(entry_name, options)?;
            writer.write_all(&contents).fs_context("writing archive entry", destination)?;
        }
    }

    writer.finish()?;
    Ok(())
}

#[cfg(unix)]
fn entry_mode(entry: &walkdir::DirEntry) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    entry
        .metadata()
        .map(|m| m.permissions().mode() & 0o777)
        .unwrap_or(if entry.file_type().is_dir() { 0o755 } else { 0o644 })
}

#[cfg(not(unix))]
fn entry_mode(entry: &walkdir::DirEntry) -> u32 {
    if entry.file_type().is_dir() { 0o755 } else { 0o644 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[tokio::test]
    async fn archive_entries_are_relative_to_the_staging_root() {
        let staging = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(staging.path().join("src")).unwrap();
        std::fs::write(staging.path().join("manifest.json"), "{}").unwrap();
        std::fs::write(staging.path().join("src/app.h"), "// stub").unwrap();

        let out = tempfile::tempdir().unwrap();
        let dest = out.path().join("pkg.m5app");
        compress_tree(staging.path(), &dest).await.unwrap();

        let mut archive = zip::ZipArchive::new(std::fs::File::open(&dest).unwrap()).unwrap();
        let names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();
        assert!(names.contains(&"manifest.json".to_string()));
        assert!(names.contains(&"src/app.h".to_string()));
        assert!(names.iter().all(|n| !n.starts_with('/')));

        let mut manifest = String::new();
        archive
            .by_name("manifest.json")
            .unwrap()
            .read_to_string(&mut manifest)
            .unwrap();
        assert_eq!(manifest, "{}");
    }

    #[tokio::test]
    async fn failed_compression_leaves_no_partial_archive() {
        let staging = tempfile::tempdir().unwrap();
        std::fs::write(staging.path().join("manifest.json"), "{}").unwrap();

        let out = tempfile::tempdir().unwrap();
        // A directory at the destination path makes File::create fail.
        let dest = out.path().join("pkg.m5app");
        std::fs::create_dir(&dest).unwrap();

        assert!(compress_tree(staging.path(), &dest).await.is_err());
    }
}
