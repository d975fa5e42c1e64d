//! Java version string parsing.
//!
//! Java has reported its version in two shapes over the years:
//!
//! - legacy: `1.8.0_271`, where the meaningful major version is the second
//!   component
//! - modern: `17.0.1`, `21`, `9-ea`, where the major version leads
//!
//! [`parse_major`] classifies a raw string into a [`ParsedVersion`]. Legacy
//! strings are recognised by prefix alone and never parsed numerically.

use std::fmt;
use std::num::ParseIntError;

/// Prefix of the pre-Java 9 version format.
pub const LEGACY_PREFIX: &str = "1.";

/// The result of parsing one runtime version string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedVersion {
    /// Old-style `1.x` version; always older than any supported runtime.
    Legacy,

    /// Leading major version number.
    Major(u32),

    /// The leading token holds no digits at all.
    Unrecognized,

    /// A digit run was found but does not fit a major version number.
    Invalid {
        /// The candidate token the digit run came from.
        token: String,
        /// Why the conversion failed.
        error: ParseIntError,
    },
}

impl ParsedVersion {
    /// The major version, if one was parsed.
    pub fn major(&self) -> Option<u32> {
        match self {
            ParsedVersion::Major(major) => Some(*major),
            _ => None,
        }
    }
}

impl fmt::Display for ParsedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsedVersion::Legacy => write!(f, "legacy 1.x format"),
            ParsedVersion::Major(major) => write!(f, "major version {}", major),
            ParsedVersion::Unrecognized => write!(f, "no major version found"),
            ParsedVersion::Invalid { token, error } => {
                write!(f, "could not parse '{}': {}", token, error)
            }
        }
    }
}

/// Parse the major version out of a raw runtime version string.
///
/// # Example
///
/// ```
/// use javacheck::runtime::version::{parse_major, ParsedVersion};
///
/// assert_eq!(parse_major("17.0.1"), ParsedVersion::Major(17));
/// assert_eq!(parse_major("1.8.0_271"), ParsedVersion::Legacy);
/// assert_eq!(parse_major("abc"), ParsedVersion::Unrecognized);
/// ```
pub fn parse_major(raw: &str) -> ParsedVersion {
    if raw.starts_with(LEGACY_PREFIX) {
        return ParsedVersion::Legacy;
    }

    let token = leading_token(raw);
    let Some(digits) = first_digit_run(token) else {
        return ParsedVersion::Unrecognized;
    };

    // Majors are limited to the signed 32-bit range.
    match digits.parse::<i32>() {
        Ok(major) => ParsedVersion::Major(major.unsigned_abs()),
        Err(error) => ParsedVersion::Invalid {
            token: token.to_string(),
            error,
        },
    }
}

/// Everything before the first `.`, or the whole string when there is none.
pub fn leading_token(raw: &str) -> &str {
    raw.split_once('.').map_or(raw, |(head, _)| head)
}

/// The first maximal run of ASCII digits in `token`.
pub fn first_digit_run(token: &str) -> Option<&str> {
    let start = token.find(|c: char| c.is_ascii_digit())?;
    let rest = &token[start..];
    let len = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    Some(&rest[..len])
}
