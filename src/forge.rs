//! Remote forge boundary: the retrieval collaborators the decision core
//! consumes, specified as traits and implemented for the GitHub API.

/// Connection configuration and paging constants.
pub mod config;

/// GitHub API client implementation for GitHub.com and Enterprise.
pub mod github;

/// Wire types for tags, commits, and comparison pages.
pub mod request;

/// Retrieval traits consumed by the decision core.
pub mod traits;
