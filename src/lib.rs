//! javacheck - Java runtime version check for Minecraft server plugins.
//!
//! Server plugins that embed a scripting engine care about two things at
//! startup: whether the Java runtime is new enough to be supported at all,
//! and whether it is new enough to have lost the engine. javacheck answers
//! both and writes the operator-facing warnings to a log.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and parsing
//! - [`error`] - Error types and result aliases
//! - [`runtime`] - Runtime detection and the version checker
//! - [`ui`] - Command output
//!
//! # Example
//!
//! ```
//! use javacheck::runtime::{CheckOutcome, MockSink, VersionChecker};
//!
//! let mut sink = MockSink::new();
//! let outcome = VersionChecker::default().check_version("17.0.1", &mut sink);
//! assert!(matches!(outcome, CheckOutcome::Limited { major: 17, .. }));
//! assert!(sink.has_line_containing("Nashorn"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod runtime;
pub mod ui;

pub use error::{JavaCheckError, Result};
