//! Configuration loading and parsing.
//!
//! javacheck reads an optional `javacheck.yml`:
//!
//! ```yaml
//! java:
//!   version: "17.0.1"          # check this instead of probing
//!   binary: /opt/jdk/bin/java  # run this binary for -version
//! strict: true                 # exit 1 on outdated runtimes
//! ```
//!
//! # Modules
//!
//! - [`loader`] - Config file discovery and loading
//! - [`schema`] - Configuration structure definitions

pub mod loader;
pub mod schema;

pub use loader::{find_config, load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::{JavaCheckConfig, JavaSettings};
