//! Fatal error conditions with distinguishable, human-readable messages.

use thiserror::Error;

/// Errors that always terminate the run with no partial output.
#[derive(Error, Debug)]
pub enum NextverError {
    #[error(
        "couldn't find the latest tag: make sure at least one tag exists or provide a fallback tag"
    )]
    NoTagsFound,

    #[error("provided tag could not be found: {0}")]
    TagNotFound(String),

    #[error("provided tag is invalid (does not conform to semver): {0}")]
    InvalidTag(String),

    #[error(
        "none of the {fetched} latest tags are valid semver or match the specified prefix"
    )]
    NoTagMatchesPrefix { fetched: u64 },

    #[error("none of the {fetched} latest tags are valid semver")]
    NoValidSemverTag { fetched: u64 },

    #[error("latest tag is invalid (does not conform to semver): {0}")]
    LatestTagInvalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinguishes_prefix_and_semver_scan_failures() {
        let with_prefix = NextverError::NoTagMatchesPrefix { fetched: 10 };
        assert_eq!(
            with_prefix.to_string(),
            "none of the 10 latest tags are valid semver or match the specified prefix"
        );

        let without_prefix = NextverError::NoValidSemverTag { fetched: 10 };
        assert_eq!(
            without_prefix.to_string(),
            "none of the 10 latest tags are valid semver"
        );
    }

    #[test]
    fn direct_tag_errors_carry_the_tag_name() {
        let err = NextverError::TagNotFound("v9.9.9".into());
        assert!(err.to_string().contains("v9.9.9"));

        let err = NextverError::InvalidTag("not-a-version".into());
        assert!(err.to_string().contains("not-a-version"));
    }
}
