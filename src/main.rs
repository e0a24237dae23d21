//! lola CLI entry point
//!
//! Handles command-line argument parsing, error display, and command
//! execution. Failures are rendered through [`user_friendly_error`] and the
//! process exits with a per-condition code (see
//! [`LolaError::exit_code`](lola_cli::core::error::LolaError::exit_code)).

use clap::Parser;
use lola_cli::cli::Cli;
use lola_cli::core::error::{exit_code, user_friendly_error};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    // Execute the command
    if let Err(e) = cli.execute() {
        let code = exit_code(&e);
        // Convert to user-friendly error with context and suggestions
        user_friendly_error(e).display();
        std::process::exit(code);
    }
}
