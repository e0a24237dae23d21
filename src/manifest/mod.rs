//! Manifest parsing and module descriptor resolution.
//!
//! The manifest is a YAML file named `lolamod.yml` at the top of the
//! modules directory. Its recognized key `lolas` holds an ordered sequence
//! of module entries:
//!
//! ```yaml
//! lolas:
//!   - name: rust-style
//!     desc: House style guide for Rust reviews
//!     path: ./rust-style
//!     assets:
//!       - style.md
//!       - snippets/
//!     main: AGENTS.md
//! ```
//!
//! Entries are deserialized loosely and normalized exactly once, here, into
//! [`ModuleDescriptor`] values with concrete defaults. Consumers never
//! re-default fields at read sites.
//!
//! A missing manifest file is not an error: the directory simply has no
//! modules. Likewise a manifest that parses to nothing (empty file, only
//! comments) or one without a `lolas` key yields an empty sequence. Only a
//! syntactically invalid file is reported, as
//! [`LolaError::ManifestParse`].

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::constants::LOLAMOD_FILE;
use crate::core::error::LolaError;


/// Fallback module name for entries that declare none.
const DEFAULT_NAME: &str = "Unnamed";

/// Fallback description for entries that declare none.
const DEFAULT_DESCRIPTION: &str = "No description";

/// Top-level manifest mapping. Only `lolas` is recognized; unknown keys
/// are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
struct ManifestFile {
    // Option layer so an explicit `lolas: null` reads as no modules
    #[serde(default)]
    lolas: Option<Vec<RawDescriptor>>,
}

/// One manifest entry as written by the user, before normalization.
///
/// `desc` and `description` are both accepted; `desc` wins when it is
/// non-empty.
#[derive(Debug, Clone, Default, Deserialize)]
struct RawDescriptor {
    name: Option<String>,
    desc: Option<String>,
    description: Option<String>,
    path: Option<String>,
    #[serde(default)]
    assets: Vec<String>,
    main: Option<String>,
}

/// A module declared in the manifest, with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDescriptor {
    /// Lookup key for installation. Defaults to `"Unnamed"`. Names are not
    /// required to be unique; resolution takes the first match.
    pub name: String,
    /// Human-readable summary shown by `ls`.
    pub description: String,
    /// Declared source directory, relative to the modules directory.
    /// `None` means the module lives in `<modules-dir>/<name>`.
    pub path: Option<String>,
    /// Ordered relative paths of files or directories to copy.
    pub assets: Vec<String>,
    /// Optional file copied to the destination's top level.
    pub main: Option<String>,
}

impl From<RawDescriptor> for ModuleDescriptor {
    fn from(raw: RawDescriptor) -> Self {
        let description = raw
            .desc
            .filter(|d| !d.is_empty())
            .or(raw.description)
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

        Self {
            name: raw.name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
            description,
            path: raw.path,
            assets: raw.assets,
            main: raw.main,
        }
    }
}

impl ModuleDescriptor {
    /// Resolve this module's source directory under `modules_dir`.
    ///
    /// Uses the declared `path` with a leading `./` stripped, or the module
    /// name when no path was declared.
    #[must_use]
    pub fn source_dir(&self, modules_dir: &Path) -> PathBuf {
        match self.path.as_deref() {
            Some(path) => modules_dir.join(path.strip_prefix("./").unwrap_or(path)),
            None => modules_dir.join(&self.name),
        }
    }
}

/// Load the module descriptors declared in `modules_dir`.
///
/// Returns the entries in manifest order. A missing manifest file or one
/// that parses to no content yields an empty vector, not an error.
pub fn load_modules(modules_dir: &Path) -> Result<Vec<ModuleDescriptor>> {
    let manifest_path = modules_dir.join(LOLAMOD_FILE);

    if !manifest_path.exists() {
        tracing::debug!("no manifest at {}", manifest_path.display());
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(&manifest_path)
        .with_context(|| format!("Failed to read manifest file: {}", manifest_path.display()))?;

    // An empty file deserializes as YAML null, hence the Option layer.
    let parsed: Option<ManifestFile> =
        serde_yaml::from_str(&content).map_err(|e| LolaError::ManifestParse {
            file: manifest_path.display().to_string(),
            reason: e.to_string(),
        })?;

    let modules: Vec<ModuleDescriptor> = parsed
        .unwrap_or_default()
        .lolas
        .unwrap_or_default()
        .into_iter()
        .map(Into::into)
        .collect();

    tracing::debug!(
        "loaded {} module(s) from {}",
        modules.len(),
        manifest_path.display()
    );

    Ok(modules)
}

/// Find the first descriptor whose name matches `name` exactly.
#[must_use]
pub fn find_module<'a>(
    modules: &'a [ModuleDescriptor],
    name: &str,
) -> Option<&'a ModuleDescriptor> {
    modules.iter().find(|m| m.name == name)
}
