//! Runtime probe for discovering the Java version to check.
//!
//! A JVM plugin simply asks its own runtime. From outside the JVM the
//! version has to come from somewhere, in this order:
//!
//! 1. an explicit override (CLI flag)
//! 2. the `JAVACHECK_JAVA_VERSION` environment variable
//! 3. a version from the config file
//! 4. the output of `java -version`, where `java` is the configured binary,
//!    `$JAVA_HOME/bin/java`, or the first `java` on `PATH`
//!
//! Environment lookups go through an injectable function so tests never
//! depend on the process environment.
//!
//! # Example
//!
//! ```
//! use javacheck::runtime::probe::{ProbeSettings, RuntimeProbe, VersionSource};
//!
//! let probe = RuntimeProbe::new(ProbeSettings {
//!     version_override: Some("17.0.1".to_string()),
//!     ..Default::default()
//! });
//! let detected = probe.detect().unwrap();
//! assert_eq!(detected.version, "17.0.1");
//! assert_eq!(detected.source, VersionSource::Override);
//! ```

use std::env::VarError;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{JavaCheckError, Result};

/// Environment variable holding a version string to use instead of probing.
pub const VERSION_ENV_VAR: &str = "JAVACHECK_JAVA_VERSION";

#[cfg(windows)]
const JAVA_BINARY: &str = "java.exe";
#[cfg(not(windows))]
const JAVA_BINARY: &str = "java";

static VERSION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"version "([^"]*)""#).unwrap());

/// Where a detected version string came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSource {
    /// Supplied directly by the caller.
    Override,
    /// Read from an environment variable.
    Environment { var: String },
    /// Taken from the config file.
    Config,
    /// Reported by a Java binary.
    Binary { path: PathBuf },
}

/// A version string and its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedVersion {
    /// Raw version string.
    pub version: String,
    /// Where it was found.
    pub source: VersionSource,
}

/// Inputs that steer detection.
#[derive(Debug, Clone, Default)]
pub struct ProbeSettings {
    /// Use this version string without probing anything.
    pub version_override: Option<String>,
    /// Version to use when neither the override nor the env var is set.
    pub configured_version: Option<String>,
    /// Java binary to run instead of searching `JAVA_HOME` and `PATH`.
    pub binary: Option<PathBuf>,
}

/// Discovers the version of the Java runtime a server would start with.
#[derive(Debug, Clone, Default)]
pub struct RuntimeProbe {
    settings: ProbeSettings,
}

impl RuntimeProbe {
    /// Create a probe with the given settings.
    pub fn new(settings: ProbeSettings) -> Self {
        Self { settings }
    }

    /// Detect the version using the real process environment.
    pub fn detect(&self) -> Result<DetectedVersion> {
        self.detect_with_env(&|key: &str| std::env::var(key))
    }

    /// Detect the version with a custom env var lookup function.
    pub fn detect_with_env<F>(&self, env_fn: &F) -> Result<DetectedVersion>
    where
        F: Fn(&str) -> std::result::Result<String, VarError>,
    {
        if let Some(version) = &self.settings.version_override {
            tracing::debug!("Using version override {:?}", version);
            return Ok(DetectedVersion {
                version: version.clone(),
                source: VersionSource::Override,
            });
        }

        match env_fn(VERSION_ENV_VAR) {
            Ok(version) => {
                tracing::debug!("Using version from {}: {:?}", VERSION_ENV_VAR, version);
                return Ok(DetectedVersion {
                    version,
                    source: VersionSource::Environment {
                        var: VERSION_ENV_VAR.to_string(),
                    },
                });
            }
            Err(VarError::NotUnicode(raw)) => {
                tracing::warn!("Ignoring {}: not valid UTF-8 ({:?})", VERSION_ENV_VAR, raw);
            }
            Err(VarError::NotPresent) => {}
        }

        if let Some(version) = &self.settings.configured_version {
            tracing::debug!("Using configured version {:?}", version);
            return Ok(DetectedVersion {
                version: version.clone(),
                source: VersionSource::Config,
            });
        }

        let binary = self.resolve_binary(env_fn)?;
        let version = query_binary(&binary)?;
        Ok(DetectedVersion {
            version,
            source: VersionSource::Binary { path: binary },
        })
    }

    /// Locate the Java binary to run.
    pub fn resolve_binary<F>(&self, env_fn: &F) -> Result<PathBuf>
    where
        F: Fn(&str) -> std::result::Result<String, VarError>,
    {
        if let Some(binary) = &self.settings.binary {
            if binary.is_file() {
                return Ok(binary.clone());
            }
            return Err(JavaCheckError::JavaNotFound {
                message: format!("{} does not exist", binary.display()),
            });
        }

        if let Ok(java_home) = env_fn("JAVA_HOME") {
            let candidate = Path::new(&java_home).join("bin").join(JAVA_BINARY);
            if candidate.is_file() && is_executable(&candidate) {
                tracing::debug!("Found java via JAVA_HOME at {}", candidate.display());
                return Ok(candidate);
            }
            tracing::debug!("JAVA_HOME={} has no usable {}", java_home, JAVA_BINARY);
        }

        let path_entries: Vec<PathBuf> = env_fn("PATH")
            .map(|path| std::env::split_paths(&path).collect())
            .unwrap_or_default();
        resolve_tool_path(JAVA_BINARY, &path_entries).ok_or_else(|| JavaCheckError::JavaNotFound {
            message: "set JAVA_HOME, put java on PATH, or pass --java".to_string(),
        })
    }
}

/// Run `<binary> -version` and pull the version string out of its output.
pub fn query_binary(binary: &Path) -> Result<String> {
    let output = Command::new(binary)
        .arg("-version")
        .output()
        .map_err(|e| JavaCheckError::ProbeFailed {
            binary: binary.to_path_buf(),
            message: e.to_string(),
        })?;

    // The JVM prints its banner on stderr; some wrappers use stdout.
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    extract_version(&stderr)
        .or_else(|| extract_version(&stdout))
        .ok_or_else(|| JavaCheckError::UnrecognizedVersionOutput {
            binary: binary.to_path_buf(),
        })
}

/// Find the quoted version in `java -version` output.
///
/// ```
/// use javacheck::runtime::probe::extract_version;
///
/// let out = "openjdk version \"17.0.1\" 2021-10-19\nOpenJDK Runtime Environment";
/// assert_eq!(extract_version(out).as_deref(), Some("17.0.1"));
/// ```
pub fn extract_version(output: &str) -> Option<String> {
    VERSION_LINE
        .captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(tool);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    const OPENJDK_17: &str = "openjdk version \"17.0.1\" 2021-10-19\n\
        OpenJDK Runtime Environment (build 17.0.1+12-39)\n\
        OpenJDK 64-Bit Server VM (build 17.0.1+12-39, mixed mode, sharing)\n";

    const ORACLE_8: &str = "java version \"1.8.0_271\"\n\
        Java(TM) SE Runtime Environment (build 1.8.0_271-b09)\n\
        Java HotSpot(TM) 64-Bit Server VM (build 25.271-b09, mixed mode)\n";

    fn env_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> std::result::Result<String, VarError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned().ok_or(VarError::NotPresent)
    }

    #[cfg(unix)]
    fn fake_java(dir: &Path, banner: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join(JAVA_BINARY);
        let script = format!("#!/bin/sh\ncat >&2 <<'EOF'\n{}EOF\n", banner);
        std::fs::write(&path, script).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn extracts_modern_version() {
        assert_eq!(extract_version(OPENJDK_17).as_deref(), Some("17.0.1"));
    }

    #[test]
    fn extracts_legacy_version() {
        assert_eq!(extract_version(ORACLE_8).as_deref(), Some("1.8.0_271"));
    }

    #[test]
    fn extracts_empty_quoted_version() {
        assert_eq!(extract_version("java version \"\"").as_deref(), Some(""));
    }

    #[test]
    fn no_version_in_output() {
        assert_eq!(extract_version("command not found"), None);
    }

    #[test]
    fn override_wins_over_everything() {
        let probe = RuntimeProbe::new(ProbeSettings {
            version_override: Some("11.0.9".to_string()),
            configured_version: Some("21".to_string()),
            binary: Some(PathBuf::from("/nonexistent/java")),
        });
        let env = env_from(&[(VERSION_ENV_VAR, "8")]);
        let detected = probe.detect_with_env(&env).unwrap();
        assert_eq!(detected.version, "11.0.9");
        assert_eq!(detected.source, VersionSource::Override);
    }

    #[test]
    fn env_var_used_without_override() {
        let probe = RuntimeProbe::default();
        let env = env_from(&[(VERSION_ENV_VAR, "1.8.0_271")]);
        let detected = probe.detect_with_env(&env).unwrap();
        assert_eq!(detected.version, "1.8.0_271");
        assert_eq!(
            detected.source,
            VersionSource::Environment {
                var: VERSION_ENV_VAR.to_string()
            }
        );
    }

    #[test]
    fn env_var_wins_over_config() {
        let probe = RuntimeProbe::new(ProbeSettings {
            configured_version: Some("21".to_string()),
            ..Default::default()
        });
        let env = env_from(&[(VERSION_ENV_VAR, "8")]);
        assert_eq!(probe.detect_with_env(&env).unwrap().version, "8");
    }

    #[test]
    fn config_version_skips_binary_lookup() {
        let probe = RuntimeProbe::new(ProbeSettings {
            configured_version: Some("21".to_string()),
            binary: Some(PathBuf::from("/nonexistent/java")),
            ..Default::default()
        });
        let detected = probe.detect_with_env(&env_from(&[])).unwrap();
        assert_eq!(detected.version, "21");
        assert_eq!(detected.source, VersionSource::Config);
    }

    #[cfg(unix)]
    #[test]
    fn non_unicode_env_var_falls_back_to_config() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let probe = RuntimeProbe::new(ProbeSettings {
            configured_version: Some("21".to_string()),
            ..Default::default()
        });
        let env = |key: &str| {
            if key == VERSION_ENV_VAR {
                Err(VarError::NotUnicode(OsString::from_vec(vec![0xff, 0xfe])))
            } else {
                Err(VarError::NotPresent)
            }
        };
        let detected = probe.detect_with_env(&env).unwrap();
        assert_eq!(detected.version, "21");
        assert_eq!(detected.source, VersionSource::Config);
    }

    #[test]
    fn empty_env_var_is_still_a_version() {
        let probe = RuntimeProbe::default();
        let env = env_from(&[(VERSION_ENV_VAR, "")]);
        let detected = probe.detect_with_env(&env).unwrap();
        assert_eq!(detected.version, "");
    }

    #[test]
    fn missing_explicit_binary_is_not_found() {
        let probe = RuntimeProbe::new(ProbeSettings {
            binary: Some(PathBuf::from("/nonexistent/bin/java")),
            ..Default::default()
        });
        let err = probe.detect_with_env(&env_from(&[])).unwrap_err();
        assert!(matches!(err, JavaCheckError::JavaNotFound { .. }));
    }

    #[test]
    fn nothing_found_when_path_is_empty() {
        let probe = RuntimeProbe::default();
        let temp = TempDir::new().unwrap();
        let path = temp.path().to_string_lossy().to_string();
        let err = probe
            .resolve_binary(&env_from(&[("PATH", path.as_str())]))
            .unwrap_err();
        assert!(matches!(err, JavaCheckError::JavaNotFound { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn java_home_preferred_over_path() {
        let home = TempDir::new().unwrap();
        let bin = home.path().join("bin");
        std::fs::create_dir_all(&bin).unwrap();
        let home_java = fake_java(&bin, OPENJDK_17);

        let other = TempDir::new().unwrap();
        fake_java(other.path(), ORACLE_8);

        let java_home = home.path().to_string_lossy().to_string();
        let path = other.path().to_string_lossy().to_string();
        let env = env_from(&[("JAVA_HOME", java_home.as_str()), ("PATH", path.as_str())]);

        let resolved = RuntimeProbe::default().resolve_binary(&env).unwrap();
        assert_eq!(resolved, home_java);
    }

    #[cfg(unix)]
    #[test]
    fn falls_back_to_path_lookup() {
        let dir = TempDir::new().unwrap();
        let java = fake_java(dir.path(), OPENJDK_17);
        let path = dir.path().to_string_lossy().to_string();
        let env = env_from(&[("JAVA_HOME", "/nonexistent"), ("PATH", path.as_str())]);

        let resolved = RuntimeProbe::default().resolve_binary(&env).unwrap();
        assert_eq!(resolved, java);
    }

    #[cfg(unix)]
    #[test]
    fn non_executable_files_are_skipped() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(JAVA_BINARY), "not a program").unwrap();
        assert_eq!(
            resolve_tool_path(JAVA_BINARY, &[dir.path().to_path_buf()]),
            None
        );
    }

    #[cfg(unix)]
    #[test]
    fn detects_version_from_binary_output() {
        let dir = TempDir::new().unwrap();
        let java = fake_java(dir.path(), OPENJDK_17);
        let probe = RuntimeProbe::new(ProbeSettings {
            binary: Some(java.clone()),
            ..Default::default()
        });

        let detected = probe.detect_with_env(&env_from(&[])).unwrap();
        assert_eq!(detected.version, "17.0.1");
        assert_eq!(detected.source, VersionSource::Binary { path: java });
    }

    #[cfg(unix)]
    #[test]
    fn binary_without_version_banner_is_unrecognized() {
        let dir = TempDir::new().unwrap();
        let java = fake_java(dir.path(), "hello\n");
        let err = query_binary(&java).unwrap_err();
        assert!(matches!(
            err,
            JavaCheckError::UnrecognizedVersionOutput { .. }
        ));
    }
}
