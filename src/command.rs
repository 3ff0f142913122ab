//! Command execution for the version-decision pipeline.
pub mod next;
