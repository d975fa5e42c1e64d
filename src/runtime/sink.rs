//! Diagnostic sinks the version checker reports through.
//!
//! The checker never owns a logger. Callers hand it a
//! `&mut dyn DiagnosticSink`: [`TracingSink`] in production, [`MockSink`]
//! in tests.
//!
//! # Example
//!
//! ```
//! use javacheck::runtime::sink::{DiagnosticSink, MockSink};
//!
//! let mut sink = MockSink::new();
//! sink.error("* Current Java version: 17");
//! assert_eq!(sink.lines(), ["* Current Java version: 17"]);
//! ```

use std::error::Error;

/// Receives error-level diagnostic records, one line at a time.
pub trait DiagnosticSink {
    /// Record a single error-level line.
    fn error(&mut self, line: &str);

    /// Record an error-level line together with the error that caused it.
    fn error_with_cause(&mut self, line: &str, cause: &dyn Error) {
        self.error(&format!("{}: {}", line, cause));
    }
}

/// Sink that forwards every line to `tracing` at error level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    /// Create a new tracing sink.
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for TracingSink {
    fn error(&mut self, line: &str) {
        tracing::error!("{}", line);
    }

    fn error_with_cause(&mut self, line: &str, cause: &dyn Error) {
        tracing::error!(error = %cause, "{}", line);
    }
}

/// Sink that captures every line for later assertion.
#[derive(Debug, Default, Clone)]
pub struct MockSink {
    lines: Vec<String>,
}

impl MockSink {
    /// Create an empty mock sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured lines, in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of captured lines containing `needle`.
    pub fn count_containing(&self, needle: &str) -> usize {
        self.lines.iter().filter(|l| l.contains(needle)).count()
    }

    /// Whether any captured line contains `needle`.
    pub fn has_line_containing(&self, needle: &str) -> bool {
        self.count_containing(needle) > 0
    }

    /// Forget everything captured so far.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl DiagnosticSink for MockSink {
    fn error(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}
