//! Version string grammars
//!
//! Two mutually exclusive forms are recognized:
//! - fixed version: `MAJOR.MINOR.BUILD[_SUFFIX]` (e.g. `1.2.23_abcdefg`)
//! - range specifier: `~` or `^` followed by a fixed version (e.g. `~0.19.1`)
//!
//! Only the major field rejects leading zeros; `1.00.0` is a valid fixed version.

use std::sync::LazyLock;

use regex::Regex;

/// Regex for a fixed version: `1.2.34_abcdefgh`, `0.1.123`
static FIXED_VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0|[1-9][0-9]*)\.([0-9]+)\.([0-9]+)(_.*)?$")
        .expect("valid fixed version regex")
});

/// Regex for a range specifier: `^1.2.23_abcdefg`, `~0.19.1`
static RANGE_SPECIFIER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[~^](0|[1-9][0-9]*)\.([0-9]+)\.([0-9]+)(_.*)?$")
        .expect("valid range specifier regex")
});

/// Check whether `version` is a fixed version
pub fn is_fixed_version(version: &str) -> bool {
    FIXED_VERSION_RE.is_match(version)
}

/// Check whether `version` is a range specifier with exactly one `~`/`^` prefix
pub fn is_range_specifier(version: &str) -> bool {
    RANGE_SPECIFIER_RE.is_match(version)
}
