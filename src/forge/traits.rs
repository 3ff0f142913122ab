//! Traits related to remote git forges
use async_trait::async_trait;

use crate::{
    forge::request::{CommitPage, TagRef},
    result::Result,
};

/// The retrieval operations the decision core needs from a forge. The core
/// treats these as blocking suspension points; retries and timeouts belong to
/// the implementation behind this trait.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Forge {
    /// List up to `limit` tags, most recent first by tag commit date.
    async fn list_recent_tags(&self, limit: u64) -> Result<Vec<TagRef>>;

    /// Look up a single tag by its fully qualified (prefixed) name.
    async fn get_tag_by_name(&self, name: &str) -> Result<Option<TagRef>>;

    /// Fetch one page of the commit range `base...head`. Pages are 1-based;
    /// the reported total covers the whole range.
    async fn compare_commit_range(
        &self,
        base: &str,
        head: &str,
        page: u64,
    ) -> Result<CommitPage>;
}
