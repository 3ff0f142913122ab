//! Parsed run configuration for the version-decision engine.
//!
//! Raw CLI/environment inputs are strings; this module turns them into the
//! typed values the core consumes: bump type lists, fallback policies,
//! changelog section settings, and the clamped tag fetch limit.

use clap::ValueEnum;

/// Default number of tags fetched when scanning for the latest baseline.
pub const DEFAULT_FETCH_LIMIT: u64 = 10;
/// Maximum number of tags the forge is asked for in a single scan.
pub const MAX_FETCH_LIMIT: u64 = 100;

/// Mapping of conventional commit types to bump buckets.
#[derive(Debug, Clone, Default)]
pub struct BumpClassification {
    pub major: Vec<String>,
    pub minor: Vec<String>,
    pub patch: Vec<String>,
    /// Treat every type absent from the lists as a patch-level change.
    pub patch_all: bool,
}

impl BumpClassification {
    /// Build classification lists from comma-separated input strings.
    pub fn from_lists(
        major_list: &str,
        minor_list: &str,
        patch_list: &str,
        patch_all: bool,
    ) -> Self {
        Self {
            major: split_list(major_list),
            minor: split_list(minor_list),
            patch: split_list(patch_list),
            patch_all,
        }
    }
}

/// Behavior when a stage produces nothing to act on: no qualifying bump, or
/// no new commits at all. Exactly one policy is active per invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum FallbackBehavior {
    /// Terminate the run with an error.
    #[default]
    Fail,
    /// Emit a warning and stop without a next version.
    Warn,
    /// Stop without a next version, logging at info level only.
    Silent,
    /// Emit the baseline version unchanged as the next version.
    Current,
    /// Force a patch-level bump even though nothing qualified.
    Patch,
}

/// Title and emoji decoration for one changelog section.
#[derive(Debug, Clone)]
pub struct SectionConfig {
    pub title: String,
    pub emoji: String,
}

impl SectionConfig {
    pub fn new(title: impl Into<String>, emoji: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            emoji: emoji.into(),
        }
    }

    /// A section with an empty configured title is omitted from the document.
    pub fn is_enabled(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

/// Per-bucket and contributor section settings for the rendered changelog.
#[derive(Debug, Clone)]
pub struct ChangelogConfig {
    pub major: SectionConfig,
    pub minor: SectionConfig,
    pub patch: SectionConfig,
    pub contributors: SectionConfig,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            major: SectionConfig::new("Breaking Changes", "💥"),
            minor: SectionConfig::new("New Features", "🚀"),
            patch: SectionConfig::new("Fixes", "🐛"),
            contributors: SectionConfig::new("Contributors", "🙌"),
        }
    }
}

/// Clamp the requested tag fetch limit to [1, 100], defaulting to 10 for
/// out-of-range values.
pub fn clamp_fetch_limit(requested: i64) -> u64 {
    if requested < 1 || requested > MAX_FETCH_LIMIT as i64 {
        DEFAULT_FETCH_LIMIT
    } else {
        requested as u64
    }
}

/// Split a comma-separated list, trimming entries and dropping blanks.
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|entry| entry.trim().to_string())
        .filter(|entry| !entry.is_empty())
        .collect()
}

/// Split a newline-separated list, trimming lines and dropping blanks.
pub fn split_lines(input: &str) -> Vec<String> {
    input
        .lines()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}
