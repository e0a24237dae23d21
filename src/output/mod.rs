//! Console output abstraction.
//!
//! All user-visible lines go through the [`Console`] trait instead of a
//! process-wide stream, so commands and the installer receive their output
//! sink explicitly. The binary wires in [`StdoutConsole`]; tests use
//! [`BufferedConsole`] to capture lines without touching the real standard
//! streams.
//!
//! Styling stays at the call sites (via the `colored` crate), which keeps
//! this trait down to a single "write one formatted line" capability.

use std::sync::Mutex;

/// Sink for user-visible output lines.
pub trait Console {
    /// Write one already-formatted line.
    fn line(&self, message: &str);

    /// Write an empty line.
    fn blank(&self) {
        self.line("");
    }
}

/// Console that writes to the process's standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn line(&self, message: &str) {
        println!("{message}");
    }
}

/// Console that records lines in memory.
///
/// Used by unit tests to assert on what a command printed. Interior
/// mutability keeps the [`Console`] methods `&self` like the stdout
/// implementation.
#[derive(Debug, Default)]
pub struct BufferedConsole {
    lines: Mutex<Vec<String>>,
}

impl BufferedConsole {
    /// Create an empty buffered console.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy of all recorded lines.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("console lock poisoned").clone()
    }

    /// True if any recorded line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines
            .lock()
            .expect("console lock poisoned")
            .iter()
            .any(|l| l.contains(needle))
    }
}

impl Console for BufferedConsole {
    fn line(&self, message: &str) {
        self.lines
            .lock()
            .expect("console lock poisoned")
            .push(message.to_string());
    }
}
