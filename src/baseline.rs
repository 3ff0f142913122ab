//! Baseline reference-tag resolution.
//!
//! Selects the version the commit range is diffed against: either a
//! caller-specified tag or the most recent tag satisfying prefix, filter,
//! and semver-validity constraints, with an optional fallback when no
//! candidate qualifies.

use log::*;
use regex::Regex;
use semver::Version;

use crate::{
    error::NextverError,
    forge::traits::Forge,
    result::Result,
};

/// Inputs governing baseline selection.
#[derive(Debug, Clone, Default)]
pub struct BaselineConfig {
    /// Direct tag lookup; disables the latest-tag scan when set.
    pub from_tag: Option<String>,
    /// Tag name prefix, stripped before semver validation.
    pub prefix: String,
    /// Candidate names must match this pattern when configured.
    pub tag_filter: Option<Regex>,
    /// Used when the scan finds no qualifying tag; must itself be valid
    /// semver to apply.
    pub fallback_tag: Option<String>,
    /// How many tags to scan, already clamped to [1, 100].
    pub fetch_limit: u64,
    /// Keep scanning past an invalid first candidate.
    pub skip_invalid_tags: bool,
}

/// A resolved baseline: bare validated semver plus the tag's target commit
/// when the baseline came from a real tag rather than the fallback value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Baseline {
    pub version: Version,
    pub sha: Option<String>,
}

/// Resolve the baseline reference tag through the forge.
pub async fn resolve(
    forge: &dyn Forge,
    config: &BaselineConfig,
) -> Result<Baseline> {
    match &config.from_tag {
        Some(from_tag) => resolve_direct(forge, config, from_tag).await,
        None => resolve_latest(forge, config).await,
    }
}

/// Direct-tag path: look up `{prefix}{from_tag}`, validate, no fallback.
async fn resolve_direct(
    forge: &dyn Forge,
    config: &BaselineConfig,
    from_tag: &str,
) -> Result<Baseline> {
    let qualified = format!("{}{}", config.prefix, from_tag);

    let tag = forge
        .get_tag_by_name(&qualified)
        .await?
        .ok_or(NextverError::TagNotFound(qualified.clone()))?;

    let bare = bare_name(&tag.name, &config.prefix);

    let version = Version::parse(bare)
        .map_err(|_| NextverError::InvalidTag(tag.name.clone()))?;

    info!("Comparing against provided tag: {}{version}", config.prefix);

    Ok(Baseline {
        version,
        sha: Some(tag.sha),
    })
}

/// Latest-tag path: scan fetched candidates most-recent-first and accept the
/// first valid bare semver. Candidate order of checks: prefix, filter,
/// strip, validity. An invalid first validated candidate stops the scan
/// unless skipping invalid tags was requested.
async fn resolve_latest(
    forge: &dyn Forge,
    config: &BaselineConfig,
) -> Result<Baseline> {
    let tags = forge.list_recent_tags(config.fetch_limit).await?;

    if tags.is_empty() {
        return fallback_or(config, NextverError::NoTagsFound);
    }

    let mut validated = 0u64;
    let mut first_invalid: Option<String> = None;

    for tag in &tags {
        if !config.prefix.is_empty() && !tag.name.starts_with(&config.prefix) {
            continue;
        }

        if let Some(filter) = &config.tag_filter
            && !filter.is_match(&tag.name)
        {
            continue;
        }

        let bare = bare_name(&tag.name, &config.prefix);
        validated += 1;

        if let Ok(version) = Version::parse(bare) {
            info!("Comparing against latest tag: {}{version}", config.prefix);
            return Ok(Baseline {
                version,
                sha: Some(tag.sha.clone()),
            });
        }

        if validated == 1 {
            first_invalid = Some(tag.name.clone());
            if !config.skip_invalid_tags {
                // older tags are not considered past an invalid latest tag
                break;
            }
        }
    }

    fallback_or(config, scan_failure(config, first_invalid))
}

/// Derive the bare name without mutating the fetched tag reference.
fn bare_name<'a>(name: &'a str, prefix: &str) -> &'a str {
    if prefix.is_empty() {
        name
    } else {
        name.strip_prefix(prefix).unwrap_or(name)
    }
}

fn scan_failure(
    config: &BaselineConfig,
    first_invalid: Option<String>,
) -> NextverError {
    if !config.prefix.is_empty() {
        return NextverError::NoTagMatchesPrefix {
            fetched: config.fetch_limit,
        };
    }

    match first_invalid {
        Some(name) if !config.skip_invalid_tags => {
            NextverError::LatestTagInvalid(name)
        }
        _ => NextverError::NoValidSemverTag {
            fetched: config.fetch_limit,
        },
    }
}

fn fallback_or(
    config: &BaselineConfig,
    error: NextverError,
) -> Result<Baseline> {
    if let Some(fallback) = &config.fallback_tag
        && let Ok(version) = Version::parse(fallback)
    {
        info!("Using fallback tag: {fallback}");
        return Ok(Baseline { version, sha: None });
    }

    Err(error.into())
}
