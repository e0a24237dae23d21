//! Module installation.
//!
//! [`install_module`] copies one module's declared content into a
//! destination directory:
//!
//! - every asset goes under `<dest>/.lolas/<module_name>/`, preserving its
//!   relative path;
//! - the optional main file goes to the destination's top level, with the
//!   previous file backed up as `<stem>-<YYYYMMDD>.bkp` first.
//!
//! Installation is best-effort, not transactional: a missing asset is
//! reported as a warning and the remaining assets are still copied, and
//! nothing is rolled back on failure. Re-running an install merges over the
//! previous run's output.
//!
//! Missing-file handling is deliberately asymmetric, matching long-standing
//! behavior: assets warn and continue, a missing main file is skipped
//! without a word.

use anyhow::{Context, Result};
use chrono::Local;
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::constants::{BACKUP_DATE_FORMAT, BACKUP_EXTENSION, LOLAS_DIR};
use crate::core::error::LolaError;
use crate::manifest::{self, ModuleDescriptor};
use crate::output::Console;
use crate::utils::fs;


/// Install the named module from `modules_dir` into `dest_dir`.
///
/// Fails (with a typed [`LolaError`]) before touching the filesystem when
/// the modules directory, the module, or its source directory is missing,
/// or when the destination exists but is not a directory.
pub fn install_module(
    modules_dir: &Path,
    module_name: &str,
    dest_dir: &Path,
    console: &dyn Console,
) -> Result<()> {
    if !modules_dir.exists() {
        return Err(LolaError::ModulesDirNotFound {
            path: modules_dir.display().to_string(),
        }
        .into());
    }

    let modules = manifest::load_modules(modules_dir)?;
    let module = manifest::find_module(&modules, module_name).ok_or_else(|| {
        LolaError::ModuleNotFound {
            name: module_name.to_string(),
        }
    })?;

    let source_dir = module.source_dir(modules_dir);
    if !source_dir.exists() {
        return Err(LolaError::ModuleSourceNotFound {
            path: source_dir.display().to_string(),
        }
        .into());
    }
    tracing::debug!("module source directory: {}", source_dir.display());

    if dest_dir.exists() && !dest_dir.is_dir() {
        return Err(LolaError::InvalidDestination {
            path: dest_dir.display().to_string(),
        }
        .into());
    }

    fs::ensure_dir(dest_dir)?;
    let module_dir = dest_dir.join(LOLAS_DIR).join(module_name);
    fs::ensure_dir(&module_dir)?;

    console.line(&format!("Installing {module_name}...").bold().to_string());
    console.blank();

    copy_assets(module, &source_dir, &module_dir, console)?;
    copy_main_file(module, &source_dir, dest_dir, console)?;

    console.blank();
    console.line(&"Done!".bold().green().to_string());
    Ok(())
}

/// Copy each declared asset into the module-scoped directory, in manifest
/// order. Missing assets warn and do not abort the remaining copies.
fn copy_assets(
    module: &ModuleDescriptor,
    source_dir: &Path,
    module_dir: &Path,
    console: &dyn Console,
) -> Result<()> {
    for asset in &module.assets {
        let source_asset = source_dir.join(asset);
        let dest_asset = module_dir.join(asset);

        if !source_asset.exists() {
            console.line(&format!("Asset not found: {asset}").yellow().to_string());
            continue;
        }

        tracing::debug!(
            "copying asset {} -> {}",
            source_asset.display(),
            dest_asset.display()
        );
        fs::copy_path(&source_asset, &dest_asset)?;
        console.line(&format!("✓ {asset}").green().to_string());
    }
    Ok(())
}

/// Copy the module's main file to the destination's top level, backing up
/// a pre-existing file first. A missing source main file is skipped
/// silently.
fn copy_main_file(
    module: &ModuleDescriptor,
    source_dir: &Path,
    dest_dir: &Path,
    console: &dyn Console,
) -> Result<()> {
    let Some(main_file) = &module.main else {
        return Ok(());
    };

    let source_main = source_dir.join(main_file);
    let dest_main = dest_dir.join(main_file);

    if !source_main.exists() {
        return Ok(());
    }

    if dest_main.exists() {
        let backup = backup_path(dest_dir, &dest_main);
        std::fs::copy(&dest_main, &backup).with_context(|| {
            format!(
                "Failed to back up {} to {}",
                dest_main.display(),
                backup.display()
            )
        })?;
        let backup_name = backup
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        console.line(&format!("Backup: {backup_name}").yellow().to_string());
    }

    std::fs::copy(&source_main, &dest_main).with_context(|| {
        format!(
            "Failed to copy file from {} to {}",
            source_main.display(),
            dest_main.display()
        )
    })?;
    console.line(&format!("✓ {main_file}").green().to_string());
    Ok(())
}

/// Backup path for an overwritten main file: the file's stem, a hyphen,
/// today's date, and the backup extension, alongside the original in the
/// destination directory. Day granularity: a same-day reinstall overwrites
/// the earlier backup.
fn backup_path(dest_dir: &Path, dest_main: &Path) -> PathBuf {
    let stem = dest_main
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let date = Local::now().format(BACKUP_DATE_FORMAT);
    dest_dir.join(format!("{stem}-{date}.{BACKUP_EXTENSION}"))
}
