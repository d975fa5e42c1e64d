//! Error types for javacheck operations.
//!
//! This module defines [`JavaCheckError`], the error type used by the
//! configuration, probe and CLI layers, and a [`Result`] type alias.
//!
//! The version checker itself never returns an error: anything it cannot
//! make sense of is reported to the operator through the diagnostic sink.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for javacheck operations.
#[derive(Debug, Error)]
pub enum JavaCheckError {
    /// Configuration file not found at the requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// No Java binary could be located.
    #[error("Java runtime not found: {message}")]
    JavaNotFound { message: String },

    /// The Java binary could not be executed.
    #[error("Failed to run {binary}: {message}")]
    ProbeFailed { binary: PathBuf, message: String },

    /// The Java binary ran but printed no recognizable version.
    #[error("No version found in output of {binary}")]
    UnrecognizedVersionOutput { binary: PathBuf },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for javacheck operations.
pub type Result<T> = std::result::Result<T, JavaCheckError>;
