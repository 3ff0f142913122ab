//! Bucketed commit messages produced by classification.

/// Three ordered sequences of qualifying commit messages, insertion-ordered
/// as encountered in the input commit list. Built fresh per invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    pub major: Vec<String>,
    pub minor: Vec<String>,
    pub patch: Vec<String>,
}

impl ChangeSet {
    pub fn is_empty(&self) -> bool {
        self.major.is_empty() && self.minor.is_empty() && self.patch.is_empty()
    }
}
