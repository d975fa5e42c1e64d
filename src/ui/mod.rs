//! Command output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`ConsoleUI`] for writing to the terminal
//! - [`MockUI`] for capturing output in tests
//!
//! Version warnings do not go through here; they are diagnostics and are
//! written to a [`DiagnosticSink`](crate::runtime::sink::DiagnosticSink).
//!
//! # Example
//!
//! ```
//! use javacheck::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("17");
//! assert_eq!(ui.messages(), ["17"]);
//! ```

pub mod console;
pub mod mock;
pub mod output;

pub use console::ConsoleUI;
pub use mock::MockUI;
pub use output::OutputMode;

/// Trait for user-facing command output.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);
}
