//! Core types shared across the crate.
//!
//! Currently this is the error layer: the [`LolaError`] taxonomy, the
//! [`ErrorContext`] wrapper used to render failures for CLI users, and the
//! process exit-code mapping.

pub mod error;

pub use error::{ErrorContext, LolaError, exit_code, user_friendly_error};
