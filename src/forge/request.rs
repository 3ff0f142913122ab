//! Wire types shared between the forge boundary and the decision core.

/// Sentinel identifier carried by synthetic commit records supplied through
/// the additional-commits input. These have no author identity.
pub const SYNTHETIC_COMMIT_ID: &str = "manual";

/// A tag as it exists on the forge: raw (possibly prefixed) name plus the
/// commit-ish it points at. Never mutated after fetch; prefix stripping
/// derives a separate bare name during baseline resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRef {
    pub name: String,
    pub sha: String,
}

/// Represents a normalized commit returned from the forge.
#[derive(Debug, Clone, Default)]
pub struct ForgeCommit {
    pub id: String,
    pub message: String,
    pub author_name: String,
    pub author_email: String,
    /// Platform handle, when the forge can associate one.
    pub author_login: Option<String>,
    /// Profile URL for the platform handle.
    pub author_link: Option<String>,
}

impl ForgeCommit {
    /// Build a synthetic record for a manually supplied commit message.
    pub fn synthetic(message: impl Into<String>) -> Self {
        Self {
            id: SYNTHETIC_COMMIT_ID.to_string(),
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn is_synthetic(&self) -> bool {
        self.id == SYNTHETIC_COMMIT_ID
    }
}

/// One page of a commit-range comparison, along with the range's total commit
/// count as reported by the forge.
#[derive(Debug, Clone, Default)]
pub struct CommitPage {
    pub total_commits: u64,
    pub commits: Vec<ForgeCommit>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthetic_commits_carry_sentinel_id_and_no_author() {
        let commit = ForgeCommit::synthetic("fix: patched by hand");
        assert!(commit.is_synthetic());
        assert_eq!(commit.id, SYNTHETIC_COMMIT_ID);
        assert_eq!(commit.message, "fix: patched by hand");
        assert!(commit.author_name.is_empty());
        assert!(commit.author_email.is_empty());
        assert!(commit.author_login.is_none());
    }
}
