//! Configuration schema for `javacheck.yml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::runtime::probe::ProbeSettings;

/// Root configuration structure for javacheck.yml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JavaCheckConfig {
    /// How to find the Java runtime
    pub java: JavaSettings,

    /// Exit non-zero when the runtime is outdated
    #[serde(skip_serializing_if = "is_false")]
    pub strict: bool,
}

/// Where the Java runtime version comes from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JavaSettings {
    /// Version string to check instead of probing a binary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Java binary to run for `-version`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binary: Option<PathBuf>,
}

impl JavaSettings {
    /// Probe settings equivalent to this section.
    pub fn probe_settings(&self) -> ProbeSettings {
        ProbeSettings {
            version_override: None,
            configured_version: self.version.clone(),
            binary: self.binary.clone(),
        }
    }
}

fn is_false(b: &bool) -> bool {
    !*b
}
