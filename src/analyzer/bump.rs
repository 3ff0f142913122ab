//! Bump severity resolution and fallback policy application.

use std::fmt;

use log::*;

use crate::{analyzer::changeset::ChangeSet, config::FallbackBehavior};

/// Bump severity, ordered by precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bump {
    Major,
    Minor,
    Patch,
}

impl fmt::Display for Bump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bump::Major => write!(f, "major"),
            Bump::Minor => write!(f, "minor"),
            Bump::Patch => write!(f, "patch"),
        }
    }
}

/// Outcome of applying a fallback policy to an empty result: either the run
/// proceeds with a bump, emits the baseline unchanged, or stops in one of the
/// policy-selected ways.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BumpOutcome {
    Proceed(Bump),
    EmitUnchanged,
    Warn(String),
    Silent(String),
    Fail(String),
}

/// Pick the single most severe non-empty bucket, or None when all are empty.
pub fn resolve(changes: &ChangeSet) -> Option<Bump> {
    if !changes.major.is_empty() {
        Some(Bump::Major)
    } else if !changes.minor.is_empty() {
        Some(Bump::Minor)
    } else if !changes.patch.is_empty() {
        Some(Bump::Patch)
    } else {
        None
    }
}

/// Resolve the change set to a policy outcome. When no bucket qualifies the
/// configured no-version-bump behavior decides how the run ends.
pub fn resolve_with_policy(
    changes: &ChangeSet,
    policy: FallbackBehavior,
) -> BumpOutcome {
    match resolve(changes) {
        Some(bump) => {
            info!("resolved bump severity: {bump}");
            BumpOutcome::Proceed(bump)
        }
        None => {
            apply_policy(policy, "No commit resulted in a version bump since last release!")
        }
    }
}

/// Policy outcome for the zero-commits condition, evaluated before
/// classification ever runs.
pub fn no_commits_outcome(policy: FallbackBehavior) -> BumpOutcome {
    apply_policy(
        policy,
        "Couldn't find any commits between branch HEAD and latest tag.",
    )
}

fn apply_policy(policy: FallbackBehavior, message: &str) -> BumpOutcome {
    match policy {
        FallbackBehavior::Current => {
            info!("{message} Exiting with current as next version...");
            BumpOutcome::EmitUnchanged
        }
        FallbackBehavior::Patch => {
            info!("{message} Defaulting to using PATCH...");
            BumpOutcome::Proceed(Bump::Patch)
        }
        FallbackBehavior::Silent => BumpOutcome::Silent(message.to_string()),
        FallbackBehavior::Warn => BumpOutcome::Warn(message.to_string()),
        FallbackBehavior::Fail => BumpOutcome::Fail(message.to_string()),
    }
}
