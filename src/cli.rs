//! CLI argument parsing and forge connection configuration.
use clap::Parser;
use color_eyre::eyre::{ContextCompat, WrapErr, eyre};
use regex::Regex;
use secrecy::SecretString;
use std::env;

use crate::{
    baseline::BaselineConfig,
    config::{
        BumpClassification, ChangelogConfig, FallbackBehavior, SectionConfig,
        clamp_fetch_limit, split_lines, split_list,
    },
    forge::config::RemoteConfig,
    result::Result,
};

/// Arguments for a single version-decision run.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value = "main")]
    /// Branch whose head terminates the commit range.
    pub branch: String,

    #[arg(long)]
    /// Compare against this tag instead of scanning for the latest one.
    /// Looked up with the prefix applied.
    pub from_tag: Option<String>,

    #[arg(long, default_value = "")]
    /// Tag name prefix, e.g. `v` or `app-v`.
    pub prefix: String,

    #[arg(long)]
    /// Regex that candidate tag names must match during the latest-tag scan.
    pub tag_filter: Option<String>,

    #[arg(long)]
    /// Version to fall back to when no qualifying tag is found.
    pub fallback_tag: Option<String>,

    #[arg(long, default_value_t = 10)]
    /// Number of tags to scan, clamped to [1, 100].
    pub max_tags_to_fetch: i64,

    #[arg(long, default_value_t = false)]
    /// Keep scanning past invalid tags instead of stopping at the first.
    pub skip_invalid_tags: bool,

    #[arg(long, value_enum, default_value_t = FallbackBehavior::Fail)]
    /// Behavior when no commit qualifies for a version bump.
    pub no_version_bump_behavior: FallbackBehavior,

    #[arg(long, value_enum, default_value_t = FallbackBehavior::Fail)]
    /// Behavior when the commit range is empty.
    pub no_new_commit_behavior: FallbackBehavior,

    #[arg(long, default_value = "")]
    /// Newline-separated synthetic commit messages appended to the range.
    pub additional_commits: String,

    #[arg(long, default_value = "")]
    /// Comma-separated commit types mapped to a major bump.
    pub major_list: String,

    #[arg(long, default_value = "feat,minor")]
    /// Comma-separated commit types mapped to a minor bump.
    pub minor_list: String,

    #[arg(long, default_value = "fix,bugfix,perf,refactor,test,tests")]
    /// Comma-separated commit types mapped to a patch bump.
    pub patch_list: String,

    #[arg(long, default_value_t = false)]
    /// Treat every type absent from the lists as a patch-level change.
    pub patch_all: bool,

    #[arg(long, default_value = "")]
    /// Comma-separated scope allow-list; empty allows all scopes.
    pub scope_list: String,

    #[arg(long, default_value_t = false)]
    /// Render a categorized changelog alongside the version outputs.
    pub with_changelog: bool,

    #[arg(long, default_value = "Breaking Changes")]
    pub major_section_title: String,

    #[arg(long, default_value = "💥")]
    pub major_section_emoji: String,

    #[arg(long, default_value = "New Features")]
    pub minor_section_title: String,

    #[arg(long, default_value = "🚀")]
    pub minor_section_emoji: String,

    #[arg(long, default_value = "Fixes")]
    pub patch_section_title: String,

    #[arg(long, default_value = "🐛")]
    pub patch_section_emoji: String,

    #[arg(long, default_value = "Contributors")]
    pub contributors_section_title: String,

    #[arg(long, default_value = "🙌")]
    pub contributors_section_emoji: String,

    #[arg(long, default_value = "")]
    /// Repository in `owner/repo` form. Falls back to GITHUB_REPOSITORY.
    pub repo: String,

    #[arg(long, default_value = "")]
    /// API access token. Falls back to GITHUB_TOKEN.
    pub token: String,

    #[arg(long, default_value = "")]
    /// API base URL for GitHub Enterprise. Falls back to GITHUB_API_URL.
    pub api_url: String,

    #[arg(long, default_value_t = false)]
    /// Enable debug logging.
    pub debug: bool,
}

impl Args {
    /// Configure the forge connection from CLI arguments and the runner
    /// environment.
    pub fn get_remote(&self) -> Result<RemoteConfig> {
        let mut repo = self.repo.clone();

        if repo.is_empty()
            && let Ok(env_repo) = env::var("GITHUB_REPOSITORY")
        {
            repo = env_repo;
        }

        if repo.is_empty() {
            return Err(eyre!("must configure a repository"));
        }

        let (owner, name) = repo
            .split_once('/')
            .wrap_err("repository must be in owner/repo form")?;

        let mut token = self.token.clone();

        if token.is_empty()
            && let Ok(env_token) = env::var("GITHUB_TOKEN")
        {
            token = env_token;
        }

        if token.is_empty() {
            return Err(eyre!("must set github token"));
        }

        let mut api_base_url = self.api_url.clone();

        if api_base_url.is_empty()
            && let Ok(env_url) = env::var("GITHUB_API_URL")
        {
            api_base_url = env_url;
        }

        if api_base_url.is_empty() {
            api_base_url = "https://api.github.com".to_string();
        }

        Ok(RemoteConfig {
            owner: owner.to_string(),
            repo: name.to_string(),
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            token: SecretString::from(token),
        })
    }

    /// Baseline-resolution settings, with the tag filter compiled.
    pub fn baseline_config(&self) -> Result<BaselineConfig> {
        let tag_filter = match &self.tag_filter {
            Some(pattern) if !pattern.is_empty() => Some(
                Regex::new(pattern).wrap_err("invalid tag filter pattern")?,
            ),
            _ => None,
        };

        Ok(BaselineConfig {
            from_tag: self.from_tag.clone().filter(|t| !t.is_empty()),
            prefix: self.prefix.clone(),
            tag_filter,
            fallback_tag: self
                .fallback_tag
                .clone()
                .filter(|t| !t.is_empty()),
            fetch_limit: clamp_fetch_limit(self.max_tags_to_fetch),
            skip_invalid_tags: self.skip_invalid_tags,
        })
    }

    pub fn classification(&self) -> BumpClassification {
        BumpClassification::from_lists(
            &self.major_list,
            &self.minor_list,
            &self.patch_list,
            self.patch_all,
        )
    }

    pub fn scopes(&self) -> Vec<String> {
        split_list(&self.scope_list)
    }

    pub fn additional_commit_messages(&self) -> Vec<String> {
        split_lines(&self.additional_commits)
    }

    pub fn changelog_config(&self) -> ChangelogConfig {
        ChangelogConfig {
            major: SectionConfig::new(
                &self.major_section_title,
                &self.major_section_emoji,
            ),
            minor: SectionConfig::new(
                &self.minor_section_title,
                &self.minor_section_emoji,
            ),
            patch: SectionConfig::new(
                &self.patch_section_title,
                &self.patch_section_emoji,
            ),
            contributors: SectionConfig::new(
                &self.contributors_section_title,
                &self.contributors_section_emoji,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> Args {
        let mut argv = vec!["nextver"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults_match_documented_behavior() {
        let args = parse(&[]);

        assert_eq!(args.branch, "main");
        assert_eq!(args.minor_list, "feat,minor");
        assert_eq!(args.patch_list, "fix,bugfix,perf,refactor,test,tests");
        assert!(args.major_list.is_empty());
        assert_eq!(args.no_version_bump_behavior, FallbackBehavior::Fail);
        assert_eq!(args.no_new_commit_behavior, FallbackBehavior::Fail);
        assert!(!args.with_changelog);
    }

    #[test]
    fn gets_remote_from_explicit_arguments() {
        let args = parse(&["--repo", "acme/widgets", "--token", "secret"]);

        let remote = args.get_remote().unwrap();

        assert_eq!(remote.owner, "acme");
        assert_eq!(remote.repo, "widgets");
        assert_eq!(remote.api_base_url, "https://api.github.com");
    }

    #[test]
    fn rejects_repository_without_owner() {
        let args = parse(&["--repo", "widgets", "--token", "secret"]);
        assert!(args.get_remote().is_err());
    }

    #[test]
    fn builds_baseline_config_with_compiled_filter() {
        let args = parse(&[
            "--prefix",
            "v",
            "--tag-filter",
            r"^v\d+\.\d+\.\d+$",
            "--max-tags-to-fetch",
            "250",
        ]);

        let config = args.baseline_config().unwrap();

        assert_eq!(config.prefix, "v");
        assert!(config.tag_filter.unwrap().is_match("v1.2.3"));
        assert_eq!(config.fetch_limit, 10);
    }

    #[test]
    fn rejects_invalid_tag_filter_patterns() {
        let args = parse(&["--tag-filter", "["]);
        assert!(args.baseline_config().is_err());
    }

    #[test]
    fn parses_fallback_behaviors() {
        let args = parse(&[
            "--no-version-bump-behavior",
            "silent",
            "--no-new-commit-behavior",
            "patch",
        ]);

        assert_eq!(args.no_version_bump_behavior, FallbackBehavior::Silent);
        assert_eq!(args.no_new_commit_behavior, FallbackBehavior::Patch);
    }

    #[test]
    fn splits_additional_commits_on_newlines() {
        let args = parse(&[
            "--additional-commits",
            "feat: forced\n\n fix: also forced ",
        ]);

        assert_eq!(
            args.additional_commit_messages(),
            vec!["feat: forced", "fix: also forced"]
        );
    }

    #[test]
    fn empty_section_title_disables_that_section() {
        let args = parse(&["--patch-section-title", ""]);
        let config = args.changelog_config();
        assert!(!config.patch.is_enabled());
        assert!(config.minor.is_enabled());
    }
}
