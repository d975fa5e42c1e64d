//! Plain terminal output.

use super::{OutputMode, UserInterface};

/// UI implementation that writes to stdout and stderr.
///
/// Messages are data and always go to stdout. Status lines are suppressed
/// in quiet mode; errors never are.
pub struct ConsoleUI {
    mode: OutputMode,
}

impl ConsoleUI {
    /// Create a new console UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for ConsoleUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }
}
