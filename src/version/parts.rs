//! Field extraction for fixed versions and range specifiers
//!
//! These helpers are total over strings that already satisfy one of the
//! grammars in [`crate::version::grammar`]. Malformed input yields `None`.

use std::cmp::Ordering;
use std::fmt;

/// A non-negative version field of any length.
///
/// Stored as its digits without leading zeros, so `007` and `7` are equal and
/// fields longer than any machine integer still order numerically.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionNumber(String);

impl VersionNumber {
    /// Parse a run of ASCII digits
    pub fn parse(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let trimmed = digits.trim_start_matches('0');
        let normalized = if trimmed.is_empty() { "0" } else { trimmed };
        Some(Self(normalized.to_string()))
    }

    /// The value as `u64`, if it fits
    pub fn to_u64(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl From<u64> for VersionNumber {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl Ord for VersionNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        // No leading zeros, so a longer digit run is always larger
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for VersionNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Numeric ordering key of a version: `(major, minor, build)`.
///
/// The `_suffix` tail never takes part in ordering or equality.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionKey {
    pub major: VersionNumber,
    pub minor: VersionNumber,
    pub build: VersionNumber,
}

impl VersionKey {
    /// Parse the numeric triple of a fixed version or range specifier
    pub fn parse(version: &str) -> Option<Self> {
        Some(Self {
            major: major(version)?,
            minor: minor(version)?,
            build: build(version)?,
        })
    }
}

/// Return the `index`-th dot-separated field of `version` as written.
///
/// Examples:
/// - `part("^10.0.2", 0)` -> `"^10"`
/// - `part("^10.0.2_abc1234", 2)` -> `"2_abc1234"`
pub fn part(version: &str, index: usize) -> Option<&str> {
    version.split('.').nth(index)
}

/// Major field with any `~`/`^` prefix stripped. Stripping is a no-op on
/// fixed versions.
pub fn major(version: &str) -> Option<VersionNumber> {
    VersionNumber::parse(part(version, 0)?.trim_start_matches(['~', '^']))
}

pub fn minor(version: &str) -> Option<VersionNumber> {
    VersionNumber::parse(part(version, 1)?)
}

/// Build field with the `_suffix` truncated
pub fn build(version: &str) -> Option<VersionNumber> {
    let raw = part(version, 2)?;
    let digits = raw.split_once('_').map_or(raw, |(digits, _)| digits);
    VersionNumber::parse(digits)
}
