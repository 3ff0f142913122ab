//! GitHub Actions output and environment export.
//!
//! Values are appended to the files named by `GITHUB_OUTPUT` and
//! `GITHUB_ENV` in `key=value` form, with heredoc framing for multiline
//! values. Every key is written to both files so downstream steps can read
//! it either as a step output or an environment variable.

use log::*;
use std::{
    fs::OpenOptions,
    io::Write,
    path::PathBuf,
};

use crate::result::Result;

const MULTILINE_DELIMITER: &str = "NEXTVER_EOF";

/// Destination files for exported values. Paths are injected so tests can
/// point at temporary files; the runner supplies them through the
/// environment in production.
#[derive(Debug, Clone, Default)]
pub struct ActionOutputs {
    pub output_path: Option<PathBuf>,
    pub env_path: Option<PathBuf>,
}

impl ActionOutputs {
    /// Resolve destinations from the runner environment. Either file may be
    /// absent outside a workflow run; exports then log at debug level only.
    pub fn from_env() -> Self {
        Self {
            output_path: std::env::var("GITHUB_OUTPUT").ok().map(PathBuf::from),
            env_path: std::env::var("GITHUB_ENV").ok().map(PathBuf::from),
        }
    }

    /// Export a key to both destination files.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        info!("Output `{key}` set to `{value}`");

        for path in [&self.output_path, &self.env_path].into_iter().flatten() {
            let mut file =
                OpenOptions::new().create(true).append(true).open(path)?;
            write!(file, "{}", format_entry(key, value))?;
        }

        if self.output_path.is_none() && self.env_path.is_none() {
            debug!("No output destination configured; `{key}` not persisted");
        }

        Ok(())
    }
}

/// Single-line values use `key=value`; values containing a newline use the
/// heredoc form the runner requires.
fn format_entry(key: &str, value: &str) -> String {
    if value.contains('\n') {
        format!("{key}<<{MULTILINE_DELIMITER}\n{value}\n{MULTILINE_DELIMITER}\n")
    } else {
        format!("{key}={value}\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn writes_single_line_values_to_both_files() {
        let dir = tempdir().unwrap();
        let output_path = dir.path().join("output");
        let env_path = dir.path().join("env");

        let outputs = ActionOutputs {
            output_path: Some(output_path.clone()),
            env_path: Some(env_path.clone()),
        };

        outputs.set("next", "v2.0.1").unwrap();
        outputs.set("bump", "patch").unwrap();

        let output = std::fs::read_to_string(output_path).unwrap();
        let env = std::fs::read_to_string(env_path).unwrap();
        assert_eq!(output, "next=v2.0.1\nbump=patch\n");
        assert_eq!(env, output);
    }

    #[test]
    fn frames_multiline_values_as_heredocs() {
        let dir = tempdir().unwrap();
        let output_path = dir.path().join("output");

        let outputs = ActionOutputs {
            output_path: Some(output_path.clone()),
            env_path: None,
        };

        outputs.set("changelog", "### Fixes\n- fix: one").unwrap();

        let output = std::fs::read_to_string(output_path).unwrap();
        assert_eq!(
            output,
            "changelog<<NEXTVER_EOF\n### Fixes\n- fix: one\nNEXTVER_EOF\n"
        );
    }

    #[test]
    fn missing_destinations_are_not_an_error() {
        let outputs = ActionOutputs::default();
        outputs.set("next", "v1.0.0").unwrap();
    }
}
