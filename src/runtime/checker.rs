//! Startup check of the Java runtime version.
//!
//! The checker classifies a runtime version and writes operator-facing
//! banners to a [`DiagnosticSink`]. It never fails: a version it cannot
//! understand is treated as outdated.

use super::notice::{notify, notify_limitation};
use super::probe::RuntimeProbe;
use super::sink::DiagnosticSink;
use super::status::{CheckOutcome, OutdatedReason};
use super::version::{parse_major, ParsedVersion};
use crate::error::Result;

/// Oldest supported Java major version.
pub const MINIMUM_SUPPORTED_MAJOR: u32 = 11;

/// From this major version on, the embedded scripting engine may be missing.
pub const SCRIPTING_CAVEAT_MAJOR: u32 = 11;

/// Classifies Java runtime versions and reports the result.
#[derive(Debug, Clone, Default)]
pub struct VersionChecker {
    probe: RuntimeProbe,
}

impl VersionChecker {
    /// Create a checker that reads the runtime version through `probe`.
    pub fn new(probe: RuntimeProbe) -> Self {
        Self { probe }
    }

    /// Detect the current runtime version and check it.
    ///
    /// The version is read at call time, so repeated calls observe changes
    /// to the environment. Only detection can fail; the check itself always
    /// produces an outcome.
    pub fn check(&self, sink: &mut dyn DiagnosticSink) -> Result<CheckOutcome> {
        let detected = self.probe.detect()?;
        tracing::debug!(
            "Checking Java version {:?} from {:?}",
            detected.version,
            detected.source
        );
        Ok(self.check_version(&detected.version, sink))
    }

    /// Check an already known version string.
    ///
    /// # Example
    ///
    /// ```
    /// use javacheck::runtime::checker::VersionChecker;
    /// use javacheck::runtime::sink::MockSink;
    ///
    /// let mut sink = MockSink::new();
    /// let outcome = VersionChecker::default().check_version("1.8.0_271", &mut sink);
    /// assert!(!outcome.is_supported());
    /// assert!(sink.has_line_containing("Current Java version: 1.8.0_271"));
    /// ```
    pub fn check_version(&self, version: &str, sink: &mut dyn DiagnosticSink) -> CheckOutcome {
        let major = match parse_major(version) {
            ParsedVersion::Major(major) => major,
            ParsedVersion::Legacy => {
                notify(version, sink);
                return outdated(version, OutdatedReason::Legacy);
            }
            ParsedVersion::Unrecognized => {
                notify(version, sink);
                return outdated(version, OutdatedReason::Unrecognized);
            }
            ParsedVersion::Invalid { token, error } => {
                sink.error_with_cause(
                    &format!("Failed to determine Java version. Could not parse {}", token),
                    &error,
                );
                notify(version, sink);
                return outdated(version, OutdatedReason::Invalid { token });
            }
        };

        let mut outcome = None;
        if major < MINIMUM_SUPPORTED_MAJOR {
            notify(version, sink);
            outcome = Some(outdated(version, OutdatedReason::BelowMinimum { major }));
        }
        if major >= SCRIPTING_CAVEAT_MAJOR {
            notify_limitation(sink);
            outcome = Some(CheckOutcome::Limited {
                version: version.to_string(),
                major,
            });
        }

        // Both thresholds are 11, so exactly one branch above ran.
        outcome.unwrap_or_else(|| CheckOutcome::Limited {
            version: version.to_string(),
            major,
        })
    }
}

fn outdated(version: &str, reason: OutdatedReason) -> CheckOutcome {
    CheckOutcome::Outdated {
        version: version.to_string(),
        reason,
    }
}
