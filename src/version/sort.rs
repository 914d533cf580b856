//! Candidate filtering and ordering

use tracing::debug;

use crate::version::grammar::is_fixed_version;
use crate::version::parts::VersionKey;

/// Validate and sort a list of registry tags.
///
/// Tags that are not fixed versions (`latest`, `1.2`, `edge`) are dropped.
/// The rest are ordered newest first by `(major, minor, build)`; tags that
/// differ only in their suffix keep their input order.
///
/// Examples:
/// - `["1.0.0", "10.4.3", "2.6.0", "latest"]` -> `["10.4.3", "2.6.0", "1.0.0"]`
pub fn sorted_valid_versions<S: AsRef<str>>(candidates: &[S]) -> Vec<String> {
    let mut versions: Vec<(VersionKey, &str)> = candidates
        .iter()
        .map(|tag| tag.as_ref())
        .filter_map(|tag| {
            if !is_fixed_version(tag) {
                debug!("Dropping tag that is not a fixed version: '{}'", tag);
                return None;
            }
            VersionKey::parse(tag).map(|key| (key, tag))
        })
        .collect();

    versions.sort_by(|(a, _), (b, _)| b.cmp(a));

    versions
        .into_iter()
        .map(|(_, tag)| tag.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        vec!["1.0.0", "2.6.0", "1.0.1", "2.5.1", "10.4.3", "0.5.6", "invalid"],
        vec!["10.4.3", "2.6.0", "2.5.1", "1.0.1", "1.0.0", "0.5.6"]
    )]
    #[case(vec![], vec![])]
    #[case(vec!["latest", "edge", "1.2"], vec![])]
    #[case(
        vec!["1.2.3_abc1234", "1.2.10_def5678", "1.2.9"],
        vec!["1.2.10_def5678", "1.2.9", "1.2.3_abc1234"]
    )]
    #[case(vec!["0.9.0", "0.10.0", "~0.11.0"], vec!["0.10.0", "0.9.0"])]
    #[case(vec!["1.2.3_b", "1.2.3_a", "1.2.4"], vec!["1.2.4", "1.2.3_b", "1.2.3_a"])] // ties keep input order
    #[case(
        vec!["1.0.0", "18446744073709551616.0.0", "18446744073709551615.0.0"],
        vec!["18446744073709551616.0.0", "18446744073709551615.0.0", "1.0.0"]
    )] // fields beyond u64 are kept and ordered numerically
    #[case(vec!["1.2.010", "1.2.9"], vec!["1.2.010", "1.2.9"])]
    fn sorted_valid_versions_returns_expected(
        #[case] candidates: Vec<&str>,
        #[case] expected: Vec<&str>,
    ) {
        assert_eq!(sorted_valid_versions(&candidates), expected);
    }

    #[test]
    fn sorted_valid_versions_is_idempotent() {
        let candidates = vec!["3.1.0", "latest", "3.0.9_abc", "12.0.0", "3.1.0_x", "0.0.1"];

        let once = sorted_valid_versions(&candidates);
        let twice = sorted_valid_versions(&once);

        assert_eq!(once, twice);
    }

    #[test]
    fn sorted_valid_versions_accepts_owned_strings() {
        let candidates = vec!["2.0.0".to_string(), "3.0.0".to_string()];

        assert_eq!(sorted_valid_versions(&candidates), vec!["3.0.0", "2.0.0"]);
    }
}
