//! Outcome types for a version check.
//!
//! The log output is what operators read. A [`CheckOutcome`] describes the
//! same decision in a form callers can act on, e.g. to pick an exit code.

use serde::Serialize;

/// Why a runtime was reported as outdated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OutdatedReason {
    /// Version string uses the `1.x` format.
    Legacy,

    /// Parsed major version is below the supported minimum.
    BelowMinimum {
        /// The parsed major version.
        major: u32,
    },

    /// No major version could be found in the version string.
    Unrecognized,

    /// A digit run was found but could not be converted.
    Invalid {
        /// The offending token.
        token: String,
    },
}

/// The result of checking one runtime version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckOutcome {
    /// Runtime is older than supported, or could not be identified.
    Outdated {
        /// Raw version string as reported.
        version: String,
        /// Which path led here.
        reason: OutdatedReason,
    },

    /// Runtime is supported but the scripting engine may be unavailable.
    Limited {
        /// Raw version string as reported.
        version: String,
        /// The parsed major version.
        major: u32,
    },
}

impl CheckOutcome {
    /// Whether the runtime meets the minimum supported version.
    pub fn is_supported(&self) -> bool {
        matches!(self, CheckOutcome::Limited { .. })
    }

    /// The raw version string the outcome was computed from.
    pub fn version(&self) -> &str {
        match self {
            CheckOutcome::Outdated { version, .. } | CheckOutcome::Limited { version, .. } => {
                version
            }
        }
    }

    /// One-line human readable summary.
    pub fn summary(&self) -> String {
        match self {
            CheckOutcome::Outdated { version, reason } => {
                let detail = match reason {
                    OutdatedReason::Legacy => "legacy 1.x format".to_string(),
                    OutdatedReason::BelowMinimum { major } => format!("major version {}", major),
                    OutdatedReason::Unrecognized => "unrecognized version".to_string(),
                    OutdatedReason::Invalid { token } => format!("unparseable token '{}'", token),
                };
                format!("Java '{}' is outdated ({})", version, detail)
            }
            CheckOutcome::Limited { version, major } => format!(
                "Java '{}' (major {}) is supported; scripting features may be limited",
                version, major
            ),
        }
    }
}
