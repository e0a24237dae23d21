//! List available lola modules.
//!
//! Shows every entry from the manifest in manifest order, 1-indexed, with
//! its description, declared path, and asset count. A missing modules
//! directory or an empty manifest is informational, not a failure.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::Path;

use crate::manifest;
use crate::output::Console;

/// Command to list the modules declared in the manifest.
#[derive(Args, Debug, Default)]
pub struct LsCommand {}

impl LsCommand {
    /// Render the module listing for `modules_dir` to `console`.
    pub fn execute(self, modules_dir: &Path, console: &dyn Console) -> Result<()> {
        if !modules_dir.exists() {
            console.line(
                &format!("Modules directory not found: {}", modules_dir.display())
                    .yellow()
                    .to_string(),
            );
            return Ok(());
        }

        let modules = manifest::load_modules(modules_dir)?;

        if modules.is_empty() {
            console.line(&"No modules found".yellow().to_string());
            return Ok(());
        }

        console.line(
            &format!("Found {} module(s):", modules.len())
                .bold()
                .to_string(),
        );
        console.blank();

        for (idx, module) in modules.iter().enumerate() {
            console.line(
                &format!("{}. {}", idx + 1, module.name)
                    .cyan()
                    .to_string(),
            );
            console.line(&format!("   {}", module.description));
            if let Some(path) = module.path.as_deref() {
                if !path.is_empty() {
                    console.line(&format!("   Path: {path}"));
                }
            }
            console.line(&format!("   Assets: {}", module.assets.len()));
            console.blank();
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::LOLAMOD_FILE;
    use crate::output::BufferedConsole;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn missing_directory_is_informational() {
        let temp = tempdir().unwrap();
        let console = BufferedConsole::new();

        LsCommand::default()
            .execute(&temp.path().join("absent"), &console)
            .unwrap();

        assert!(console.contains("Modules directory not found"));
    }

    #[test]
    fn empty_manifest_reports_no_modules() {
        let temp = tempdir().unwrap();
        let console = BufferedConsole::new();

        LsCommand::default().execute(temp.path(), &console).unwrap();

        assert!(console.contains("No modules found"));
    }

    #[test]
    fn listing_is_one_indexed_in_manifest_order() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join(LOLAMOD_FILE),
            r"lolas:
  - name: alpha
    desc: first module
    path: ./alpha
    assets: [a.md, b.md]
  - name: beta
  - name: gamma
",
        )
        .unwrap();
        let console = BufferedConsole::new();

        LsCommand::default().execute(temp.path(), &console).unwrap();

        assert!(console.contains("Found 3 module(s):"));
        let lines = console.lines();
        let alpha = lines.iter().position(|l| l.contains("1. alpha")).unwrap();
        let beta = lines.iter().position(|l| l.contains("2. beta")).unwrap();
        let gamma = lines.iter().position(|l| l.contains("3. gamma")).unwrap();
        assert!(alpha < beta && beta < gamma);
        assert!(console.contains("   first module"));
        assert!(console.contains("   Path: ./alpha"));
        assert!(console.contains("   Assets: 2"));
    }

    #[test]
    fn defaults_show_for_sparse_entries() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join(LOLAMOD_FILE), "lolas:\n  - {}\n").unwrap();
        let console = BufferedConsole::new();

        LsCommand::default().execute(temp.path(), &console).unwrap();

        assert!(console.contains("1. Unnamed"));
        assert!(console.contains("   No description"));
        assert!(console.contains("   Assets: 0"));
        // No declared path, no path line
        assert!(!console.contains("Path:"));
    }
}
