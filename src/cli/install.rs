//! Install a lola module.
//!
//! Thin argument layer over [`crate::installer::install_module`]; all
//! installation semantics live there.

use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};

use crate::installer;
use crate::output::Console;

/// Command to install one module into a destination directory.
#[derive(Args, Debug)]
pub struct InstallCommand {
    /// Name of the module to install
    module_name: String,

    /// Destination directory
    #[arg(short = 'd', long = "dest", value_name = "DIR", default_value = ".")]
    dest_dir: PathBuf,
}

impl InstallCommand {
    /// Run the installation against `modules_dir`.
    pub fn execute(self, modules_dir: &Path, console: &dyn Console) -> Result<()> {
        installer::install_module(modules_dir, &self.module_name, &self.dest_dir, console)
    }
}
