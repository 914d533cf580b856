//! Best-match selection of a fixed version for a range specifier
//!
//! Supported range specifiers:
//! - `~1.2.3` - build wildcard: highest `1.2.x`
//! - `^1.2.3` - minor wildcard: highest `1.x.x`; the written minor and build
//!   are not used for matching

use tracing::debug;

use crate::version::error::VersionError;
use crate::version::grammar::{is_fixed_version, is_range_specifier};
use crate::version::parts::{VersionNumber, major, minor};

/// Which fields of a range specifier may float
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wildcard {
    /// `~`: any build within the same major.minor
    Build,
    /// `^`: any minor and build within the same major
    Minor,
}

/// A validated range specifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeSpecifier {
    pub wildcard: Wildcard,
    pub major: VersionNumber,
    pub minor: VersionNumber,
}

impl RangeSpecifier {
    /// Parse a range specifier such as `~0.19.1` or `^1.2.23_abcdefg`
    pub fn parse(spec: &str) -> Result<Self, VersionError> {
        let invalid = || VersionError::InvalidRangeSpecifier(spec.to_string());

        if !is_range_specifier(spec) {
            return Err(invalid());
        }

        let wildcard = if spec.starts_with('^') {
            Wildcard::Minor
        } else {
            Wildcard::Build
        };

        Ok(Self {
            wildcard,
            major: major(spec).ok_or_else(invalid)?,
            minor: minor(spec).ok_or_else(invalid)?,
        })
    }

    /// Check if a fixed version satisfies this range
    pub fn matches(&self, version: &str) -> bool {
        if major(version).as_ref() != Some(&self.major) {
            return false;
        }
        match self.wildcard {
            Wildcard::Minor => true,
            Wildcard::Build => minor(version).as_ref() == Some(&self.minor),
        }
    }
}

/// Return the best match for `spec` from a list sorted newest first.
///
/// `sorted_versions` is expected to come from
/// [`sorted_valid_versions`](crate::version::sort::sorted_valid_versions), so
/// the first structural match is also the highest matching version.
///
/// # Errors
/// - [`VersionError::InvalidRangeSpecifier`] if `spec` is not a range specifier
/// - [`VersionError::NoMatchingVersion`] if no candidate satisfies `spec`
pub fn best_semver_match<S: AsRef<str>>(
    sorted_versions: &[S],
    spec: &str,
) -> Result<String, VersionError> {
    let range = RangeSpecifier::parse(spec)?;

    sorted_versions
        .iter()
        .map(|tag| tag.as_ref())
        .filter(|candidate| is_fixed_version(candidate))
        .find(|candidate| range.matches(candidate))
        .map(|candidate| {
            debug!("Range '{}' matched '{}'", spec, candidate);
            candidate.to_string()
        })
        .ok_or_else(|| VersionError::NoMatchingVersion(spec.to_string()))
}
