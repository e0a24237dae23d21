//! File system utilities.
//!
//! Small wrappers over [`std::fs`] that attach path context to every
//! failure, so an error reaching the user names both ends of the operation
//! instead of surfacing as a bare OS error.
//!
//! Copies are merging: [`copy_dir`] walks into existing destination
//! directories and overwrites files in place, which is what repeated module
//! installs rely on.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Ensure a directory exists, creating it and any missing ancestors.
///
/// Idempotent: an existing directory is not an error. A non-directory at
/// the target path is.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
    } else if !path.is_dir() {
        return Err(anyhow::anyhow!(
            "Path exists but is not a directory: {}",
            path.display()
        ));
    }
    Ok(())
}

/// Recursively copy a directory tree, merging into the destination.
///
/// Existing destination directories are descended into and files are
/// overwritten; nothing is deleted. File permissions are preserved by the
/// underlying [`fs::copy`].
pub fn copy_dir(src: &Path, dst: &Path) -> Result<()> {
    ensure_dir(dst)?;

    for entry in
        fs::read_dir(src).with_context(|| format!("Failed to read directory: {}", src.display()))?
    {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if file_type.is_dir() {
            copy_dir(&src_path, &dst_path)?;
        } else if file_type.is_file() {
            fs::copy(&src_path, &dst_path).with_context(|| {
                format!(
                    "Failed to copy file from {} to {}",
                    src_path.display(),
                    dst_path.display()
                )
            })?;
        }
        // Skip symlinks and other file types
    }

    Ok(())
}

/// Copy a file or directory tree to `dst`.
///
/// Dispatches on the source type: directories go through [`copy_dir`],
/// files are copied after their destination parent is created.
pub fn copy_path(src: &Path, dst: &Path) -> Result<()> {
    if src.is_dir() {
        copy_dir(src, dst)
    } else {
        if let Some(parent) = dst.parent() {
            ensure_dir(parent)?;
        }
        fs::copy(src, dst).with_context(|| {
            format!(
                "Failed to copy file from {} to {}",
                src.display(),
                dst.display()
            )
        })?;
        Ok(())
    }
}
