//! Unified result type for nextver.
//!
//! All fallible operations return the `Result<T>` alias defined here, built on
//! `color-eyre` for contextual, human-readable error reports. Fatal conditions
//! with a distinguishable taxonomy use the concrete error enum in
//! [`crate::error`] and convert into this type via `?`.

use color_eyre::eyre::Result as EyreResult;

/// Standard result type used throughout nextver.
pub type Result<T> = EyreResult<T>;
