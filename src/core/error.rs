//! Error handling for lola.
//!
//! The error system has two pieces:
//! 1. [`LolaError`] - strongly-typed variants for every failure condition
//!    the tool detects explicitly
//! 2. [`ErrorContext`] - wrapper that renders an error for CLI users with
//!    optional details and an actionable suggestion
//!
//! Commands return `anyhow::Result`; typed conditions are injected with
//! `LolaError::...into()` and recovered at the boundary via downcasting.
//! [`user_friendly_error`] converts whatever reaches `main` into an
//! [`ErrorContext`], and [`exit_code`] maps it to a distinct process exit
//! code so scripts can tell the failure kinds apart.
//!
//! Unanticipated I/O failures (for example permission errors mid-copy) are
//! not separate variants; they arrive as contextualized `anyhow` chains and
//! exit with the generic code.

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for lola operations.
///
/// Each variant is a failure condition that is detected explicitly and
/// reported to the user, rather than surfacing as a raw I/O error.
#[derive(Error, Debug)]
pub enum LolaError {
    /// The `-p/--path` modules directory does not exist.
    #[error("Modules directory not found: {path}")]
    ModulesDirNotFound {
        /// Directory that was looked up.
        path: String,
    },

    /// No manifest entry matched the requested module name.
    #[error("Module '{name}' not found")]
    ModuleNotFound {
        /// Name the user asked to install.
        name: String,
    },

    /// The resolved module source directory does not exist.
    #[error("Module directory not found: {path}")]
    ModuleSourceNotFound {
        /// Resolved source directory.
        path: String,
    },

    /// The destination path exists but is not a directory.
    #[error("Destination is not a directory: {path}")]
    InvalidDestination {
        /// Offending destination path.
        path: String,
    },

    /// The manifest file exists but is not valid YAML.
    #[error("Invalid manifest file syntax in {file}")]
    ManifestParse {
        /// Manifest file path.
        file: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// IO error that was not mapped to a more specific condition.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LolaError {
    /// Process exit code for this failure kind.
    ///
    /// Zero is success; every variant gets a distinct non-zero code so the
    /// tool is scriptable. The values themselves carry no meaning beyond
    /// being stable and distinct.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::ModulesDirNotFound { .. } => 2,
            Self::ModuleNotFound { .. } => 3,
            Self::ModuleSourceNotFound { .. } => 4,
            Self::InvalidDestination { .. } => 5,
            Self::ManifestParse { .. } => 6,
            Self::Io(_) => 1,
        }
    }
}

/// An error prepared for display to a CLI user.
///
/// Wraps the underlying error with optional details and a suggestion.
/// [`display`](Self::display) writes the colored form to stderr; the
/// [`fmt::Display`] impl produces the same content uncolored for logs.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error chain.
    pub error: anyhow::Error,
    /// Actionable step the user can take, shown in green.
    pub suggestion: Option<String>,
    /// Extra context about why the error occurred, shown in yellow.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Wrap an error with no additional context.
    #[must_use]
    pub fn new(error: anyhow::Error) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr with terminal colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

/// Convert any error into an [`ErrorContext`] with an appropriate suggestion.
///
/// Recognizes [`LolaError`] variants and attaches tailored guidance; other
/// errors pass through with no suggestion.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    let (suggestion, details) = match error.downcast_ref::<LolaError>() {
        Some(LolaError::ModulesDirNotFound { .. }) => (
            Some("Pass -p/--path to point at a directory containing lolamod.yml".to_string()),
            Some("The default modules directory is ./modules".to_string()),
        ),
        Some(LolaError::ModuleNotFound { .. }) => {
            (Some("Run 'lola ls' to see the available modules".to_string()), None)
        }
        Some(LolaError::ModuleSourceNotFound { .. }) => (
            None,
            Some(
                "The manifest entry's 'path' (or the module name) must name a directory inside the modules directory"
                    .to_string(),
            ),
        ),
        Some(LolaError::InvalidDestination { .. }) => (
            Some("Pass -d/--dest pointing at a directory (it will be created if missing)".to_string()),
            None,
        ),
        Some(LolaError::ManifestParse { reason, .. }) => (None, Some(reason.clone())),
        _ => (None, None),
    };

    ErrorContext {
        error,
        suggestion,
        details,
    }
}

/// Process exit code for an error reaching the command boundary.
///
/// Typed [`LolaError`] conditions map to their distinct codes; anything
/// else exits 1.
#[must_use]
pub fn exit_code(error: &anyhow::Error) -> i32 {
    error.downcast_ref::<LolaError>().map_or(1, LolaError::exit_code)
}
