//! Commit classification, bump resolution, and version arithmetic.
//!
//! The decision core of nextver: conventional commit messages are bucketed
//! into a [`changeset::ChangeSet`], reduced to a single bump severity with a
//! configurable fallback policy, and combined with the baseline version into
//! the rendered output set.

pub mod bump;
pub mod changeset;
pub mod classifier;
pub mod version;
