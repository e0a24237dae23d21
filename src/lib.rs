//! lola - Lazy Context Module manager
//!
//! A small CLI that manages "lola modules": named bundles of context files
//! for LLM agents, declared in a YAML manifest and installed into a project
//! directory. Modules typically carry prompt fragments, reference documents,
//! and scripts that AI code assistants read at runtime.
//!
//! # How it works
//!
//! A modules directory contains a `lolamod.yml` manifest listing the
//! available modules:
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
//! `lola ls` enumerates the manifest; `lola install <name>` copies the
//! module's assets into `<dest>/.lolas/<name>/` and its optional main file
//! to the destination's top level, backing up any file it would overwrite
//! as `<stem>-<YYYYMMDD>.bkp`.
//!
//! # Command-Line Usage
//!
//! ```bash
//! # List modules from the default ./modules directory
//! lola ls
//!
//! # List modules from a specific directory
//! lola -p ~/context-modules ls
//!
//! # Install a module into the current directory
//! lola install rust-style
//!
//! # Install into another project
//! lola install rust-style -d ../other-project
//! ```
//!
//! # Core Modules
//!
//! - [`cli`] - Command-line interface (argument parsing and dispatch)
//! - [`manifest`] - Manifest loading and module descriptor resolution
//! - [`installer`] - Asset and main-file installation with backups
//! - [`core`] - Error types, user-facing error rendering, exit codes
//! - [`output`] - Injected console abstraction for user-visible lines
//! - [`utils`] - Filesystem helpers (directory creation, recursive copy)

pub mod cli;
pub mod constants;
pub mod core;
pub mod installer;
pub mod manifest;
pub mod output;
pub mod utils;
