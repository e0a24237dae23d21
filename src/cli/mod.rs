//! Command-line interface for lola.
//!
//! Each subcommand lives in its own module with its own argument struct
//! and execution logic:
//!
//! - `ls` - list the modules declared in the manifest
//! - `install` - install one module into a destination directory
//!
//! # Global Options
//!
//! All commands support:
//! - `-p/--path` - the modules directory (default `./modules`)
//! - `--verbose` / `-q/--quiet` - diagnostic verbosity on stderr
//!
//! `-v/--version` prints the version and exits; the short flag matches the
//! original tool, so clap's automatic `-V` is disabled and verbosity has no
//! short `-v`.
//!
//! # Example
//!
//! ```bash
//! lola -p ~/context-modules ls
//! lola install rust-style -d ../other-project
//! ```

mod install;
mod ls;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use crate::constants::DEFAULT_MODULES_DIR;
use crate::output::{Console, StdoutConsole};

/// Main CLI structure for lola.
///
/// Global options are available to all subcommands; the modules directory
/// is resolved here once and handed to whichever command runs.
#[derive(Parser)]
#[command(
    name = "lola",
    about = "Manage lazy context modules for LLM agents",
    long_about = "lola is a simple CLI that manages Lazy Context Modules for LLMs tied to \
                  agents with basic IO read support, usually found on AI code assistants.",
    disable_version_flag = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// The subcommand to execute. Optional so that bare `lola -v` works;
    /// with no subcommand and no version flag, help is printed.
    #[command(subcommand)]
    command: Option<Commands>,

    /// Show version
    #[arg(short = 'v', long = "version")]
    version: bool,

    /// Directory containing lola modules
    #[arg(
        short = 'p',
        long = "path",
        global = true,
        value_name = "DIR",
        default_value = DEFAULT_MODULES_DIR
    )]
    modules_dir: PathBuf,

    /// Enable verbose diagnostics on stderr
    #[arg(long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// List available lola modules
    Ls(ls::LsCommand),

    /// Install a lola module
    Install(install::InstallCommand),
}

impl Cli {
    /// Execute the parsed command against the process's stdout console.
    pub fn execute(self) -> Result<()> {
        self.execute_with_console(&StdoutConsole)
    }

    /// Execute with an injected console, for tests and embedding.
    pub fn execute_with_console(self, console: &dyn Console) -> Result<()> {
        self.init_tracing();

        if self.version {
            console.line(env!("CARGO_PKG_VERSION"));
            return Ok(());
        }

        match self.command {
            Some(Commands::Ls(cmd)) => cmd.execute(&self.modules_dir, console),
            Some(Commands::Install(cmd)) => cmd.execute(&self.modules_dir, console),
            None => {
                // Mirrors the root group's no-args help behavior when only
                // global flags were given.
                Self::command().print_help()?;
                Ok(())
            }
        }
    }

    /// Install a stderr tracing subscriber filtered by `RUST_LOG` or, when
    /// unset, by the verbosity flags.
    fn init_tracing(&self) {
        let directive = if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "warn"
        };
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(directive));

        // try_init: embedding callers (and tests) may execute more than once
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }
}
