//! Conventional commit classification into bump buckets.
//!
//! Each commit message is parsed with `git-conventional`; messages that do
//! not conform to the grammar are logged and skipped, never fatal. A commit
//! contributes to at most one bucket through its type, and additionally to
//! the major bucket when it carries a breaking change marker or note.

use git_conventional::Commit as ConventionalCommit;
use log::*;

use crate::{
    analyzer::changeset::ChangeSet,
    config::BumpClassification,
    forge::request::ForgeCommit,
};

/// A contributor collected from qualifying commits, deduplicated by email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contributor {
    pub name: String,
    pub email: String,
    pub login: Option<String>,
    pub link: Option<String>,
}

/// Classification output: bucketed messages plus the unique contributors of
/// the commits that qualified for at least one bucket.
#[derive(Debug, Clone, Default)]
pub struct ClassifiedCommits {
    pub changes: ChangeSet,
    pub contributors: Vec<Contributor>,
}

/// Classifies commits against a bump configuration, with an optional scope
/// allow-list that excludes non-matching commits before type bucketing.
pub struct Classifier {
    types: BumpClassification,
    scopes: Vec<String>,
}

impl Classifier {
    pub fn new(types: BumpClassification, scopes: Vec<String>) -> Self {
        Self { types, scopes }
    }

    /// Bucket every commit in order, collecting contributors as commits
    /// qualify. Invalid and scope-filtered commits are excluded from every
    /// bucket.
    pub fn classify(&self, commits: &[ForgeCommit]) -> ClassifiedCommits {
        let mut result = ClassifiedCommits::default();

        for commit in commits {
            let parsed = match ConventionalCommit::parse(commit.message.trim_end())
            {
                Ok(parsed) => parsed,
                Err(_) => {
                    info!(
                        "[INVALID] Skipping commit {} as it doesn't follow conventional commit format.",
                        commit.id
                    );
                    continue;
                }
            };

            if !self.scope_allowed(&parsed) {
                info!(
                    "[SKIP] Commit {} has scope {:?} outside the allow-list and will not cause any version bump.",
                    commit.id,
                    parsed.scope().map(|s| s.to_string())
                );
                continue;
            }

            let commit_type = parsed.type_().as_str();
            let mut qualified = false;

            if self.types.major.iter().any(|t| t == commit_type) {
                result.changes.major.push(commit.message.clone());
                qualified = true;
                info!(
                    "[MAJOR] Commit {} of type {} will cause a major version bump.",
                    commit.id, commit_type
                );
            } else if self.types.minor.iter().any(|t| t == commit_type) {
                result.changes.minor.push(commit.message.clone());
                qualified = true;
                info!(
                    "[MINOR] Commit {} of type {} will cause a minor version bump.",
                    commit.id, commit_type
                );
            } else if self.types.patch_all
                || self.types.patch.iter().any(|t| t == commit_type)
            {
                result.changes.patch.push(commit.message.clone());
                qualified = true;
                info!(
                    "[PATCH] Commit {} of type {} will cause a patch version bump.",
                    commit.id, commit_type
                );
            } else {
                info!(
                    "[SKIP] Commit {} of type {} will not cause any version bump.",
                    commit.id, commit_type
                );
            }

            // A breaking change marker or BREAKING CHANGE note contributes to
            // the major bucket in addition to the type-based bucket.
            if parsed.breaking() {
                result.changes.major.push(commit.message.clone());
                qualified = true;
                info!(
                    "[MAJOR] Commit {} has a BREAKING CHANGE mention, causing a major version bump.",
                    commit.id
                );
            }

            if qualified {
                self.collect_contributor(&mut result.contributors, commit);
            }
        }

        result
    }

    fn scope_allowed(&self, parsed: &ConventionalCommit) -> bool {
        if self.scopes.is_empty() {
            return true;
        }

        match parsed.scope() {
            Some(scope) => self.scopes.iter().any(|s| s == scope.as_str()),
            None => false,
        }
    }

    fn collect_contributor(
        &self,
        contributors: &mut Vec<Contributor>,
        commit: &ForgeCommit,
    ) {
        if commit.is_synthetic() || commit.author_email.is_empty() {
            return;
        }

        if contributors.iter().any(|c| c.email == commit.author_email) {
            return;
        }

        contributors.push(Contributor {
            name: commit.author_name.clone(),
            email: commit.author_email.clone(),
            login: commit.author_login.clone(),
            link: commit.author_link.clone(),
        });
    }
}
