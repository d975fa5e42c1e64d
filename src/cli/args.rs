//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// javacheck - Java runtime version check for Minecraft server plugins.
#[derive(Debug, Parser)]
#[command(name = "javacheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default ./javacheck.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check the Java runtime version (default if no command specified)
    Check(CheckArgs),

    /// Show how a version string is parsed
    Parse(ParseArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Version string to check instead of running java
    #[arg(long, value_name = "VERSION", env = "JAVACHECK_JAVA_VERSION")]
    pub java_version: Option<String>,

    /// Java binary to run for -version
    #[arg(long, value_name = "PATH")]
    pub java: Option<PathBuf>,

    /// Exit with status 1 when the runtime is outdated
    #[arg(long)]
    pub strict: bool,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `parse` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ParseArgs {
    /// Version string, e.g. "1.8.0_271" or "17.0.1"
    #[arg(id = "raw_version", value_name = "VERSION", allow_hyphen_values = true)]
    pub raw: String,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
