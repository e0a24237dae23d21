//! Common test utilities and fixtures for lola integration tests.
//!
//! Consolidates the tempdir-backed project layout every test needs: a
//! modules directory with a `lolamod.yml`, module content files, and a
//! destination directory, plus a preconfigured `lola` command runner.

// Allow dead code because these utilities are shared across test files and
// not every test file uses all of them
#![allow(dead_code)]

use anyhow::Result;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test project builder for creating isolated lola environments.
pub struct TestProject {
    _temp_dir: TempDir, // Keep alive for RAII cleanup
    root: PathBuf,
}

impl TestProject {
    /// Create an empty test project (no modules directory yet).
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path().to_path_buf();
        Ok(Self {
            _temp_dir: temp_dir,
            root,
        })
    }

    /// Root of the temporary project.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The modules directory (`<root>/modules`), not necessarily created.
    pub fn modules_dir(&self) -> PathBuf {
        self.root.join("modules")
    }

    /// The destination directory (`<root>/dest`), not necessarily created.
    pub fn dest_dir(&self) -> PathBuf {
        self.root.join("dest")
    }

    /// Create the modules directory and write `lolamod.yml`.
    pub fn write_manifest(&self, content: &str) -> Result<()> {
        fs::create_dir_all(self.modules_dir())?;
        fs::write(self.modules_dir().join("lolamod.yml"), content)?;
        Ok(())
    }

    /// Create the modules directory without any manifest.
    pub fn create_modules_dir(&self) -> Result<()> {
        fs::create_dir_all(self.modules_dir())?;
        Ok(())
    }

    /// Write a file under the modules directory, creating parents.
    pub fn write_module_file(&self, relative: &str, content: &str) -> Result<()> {
        let path = self.modules_dir().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    /// Write a file under the destination directory, creating parents.
    pub fn write_dest_file(&self, relative: &str, content: &str) -> Result<()> {
        let path = self.dest_dir().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    /// A `lola` command with the project root as working directory and the
    /// modules directory preselected via `-p`.
    pub fn lola(&self) -> Command {
        let mut cmd = Command::cargo_bin("lola").expect("lola binary");
        cmd.current_dir(&self.root);
        cmd.args(["-p", "modules"]);
        cmd
    }

    /// A `lola` command with no implicit arguments.
    pub fn lola_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("lola").expect("lola binary");
        cmd.current_dir(&self.root);
        cmd
    }
}

/// Manifest fixtures shared by the integration suites.
pub struct ManifestFixture;

impl ManifestFixture {
    /// One module with two assets and a main file.
    pub fn basic() -> &'static str {
        r"lolas:
  - name: rust-style
    desc: House style guide for Rust reviews
    path: ./rust-style
    assets:
      - style.md
      - snippets/
    main: AGENTS.md
"
    }

    /// Three modules, in a fixed order, exercising field defaults.
    pub fn trio() -> &'static str {
        r"lolas:
  - name: alpha
    desc: first module
    path: ./alpha
    assets: [a.md, b.md]
  - name: beta
    description: long-form description
  - name: gamma
    assets: [g.md]
"
    }

    /// Two modules sharing one name, pointing at different directories.
    pub fn duplicate_names() -> &'static str {
        r"lolas:
  - name: dup
    path: ./first
    assets: [from-first.md]
  - name: dup
    path: ./second
    assets: [from-second.md]
"
    }
}
