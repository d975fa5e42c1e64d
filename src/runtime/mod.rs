//! Java runtime detection and version checking.
//!
//! This module finds out which Java runtime a server would start with and
//! warns the operator when that runtime is too old or lacks features the
//! plugin depends on.
//!
//! # Modules
//!
//! - [`checker`] - Version checker and thresholds
//! - [`notice`] - Operator-facing warning banners
//! - [`probe`] - Runtime probe for discovering the version string
//! - [`sink`] - Diagnostic sinks the checker writes to
//! - [`status`] - Check outcome types
//! - [`version`] - Version string parsing

pub mod checker;
pub mod notice;
pub mod probe;
pub mod sink;
pub mod status;
pub mod version;

pub use checker::{VersionChecker, MINIMUM_SUPPORTED_MAJOR, SCRIPTING_CAVEAT_MAJOR};
pub use probe::{DetectedVersion, ProbeSettings, RuntimeProbe, VersionSource};
pub use sink::{DiagnosticSink, MockSink, TracingSink};
pub use status::{CheckOutcome, OutdatedReason};
pub use version::{parse_major, ParsedVersion};
