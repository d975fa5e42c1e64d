//! Configuration file discovery and loading.

use crate::config::schema::JavaCheckConfig;
use crate::error::{JavaCheckError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "javacheck.yml";

/// Default config path for a directory, if the file exists.
pub fn find_config(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load configuration for a run.
///
/// An explicit path must exist. Without one, `javacheck.yml` in `dir` is
/// used when present, and defaults otherwise.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<JavaCheckConfig> {
    match explicit {
        Some(path) => load_config_file(path),
        None => match find_config(dir) {
            Some(path) => load_config_file(&path),
            None => {
                tracing::debug!("No {} in {}, using defaults", CONFIG_FILE_NAME, dir.display());
                Ok(JavaCheckConfig::default())
            }
        },
    }
}

/// Load a single config file and parse it into JavaCheckConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<JavaCheckConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            JavaCheckError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            JavaCheckError::Io(e)
        }
    })?;

    tracing::debug!("Loaded config from {}", path.display());
    parse_config(&content, path)
}

/// Parse YAML content into JavaCheckConfig.
///
/// An empty document yields the default configuration.
pub fn parse_config(content: &str, source_path: &Path) -> Result<JavaCheckConfig> {
    if content.trim().is_empty() {
        return Ok(JavaCheckConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| JavaCheckError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_default_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config(None, temp.path()).unwrap();
        assert_eq!(config, JavaCheckConfig::default());
    }

    #[test]
    fn default_config_discovered_in_dir() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "strict: true\n").unwrap();
        let config = load_config(None, temp.path()).unwrap();
        assert!(config.strict);
    }

    #[test]
    fn explicit_config_must_exist() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.yml");
        let err = load_config(Some(&missing), temp.path()).unwrap_err();
        assert!(matches!(err, JavaCheckError::ConfigNotFound { .. }));
    }

    #[test]
    fn explicit_config_wins_over_default() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "strict: true\n").unwrap();
        let other = temp.path().join("other.yml");
        fs::write(&other, "java:\n  version: \"21\"\n").unwrap();

        let config = load_config(Some(&other), temp.path()).unwrap();
        assert!(!config.strict);
        assert_eq!(config.java.version.as_deref(), Some("21"));
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let err = parse_config("java: [", Path::new("bad.yml")).unwrap_err();
        match err {
            JavaCheckError::ConfigParseError { path, .. } => {
                assert_eq!(path, PathBuf::from("bad.yml"))
            }
            other => panic!("expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn empty_file_is_default() {
        let config = parse_config("\n  \n", Path::new("empty.yml")).unwrap();
        assert_eq!(config, JavaCheckConfig::default());
    }
}
