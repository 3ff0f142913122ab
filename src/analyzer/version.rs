//! Version arithmetic and output rendering.

use semver::Version;

use crate::analyzer::bump::Bump;

/// The rendered version strings handed to the output boundary. Computed once
/// per invocation and never persisted by the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionOutputs {
    /// Baseline version with prefix re-applied.
    pub current: String,
    /// Chosen severity token, or "none" when no increment happened.
    pub bump: String,
    /// Prefixed-with-v form of the next version.
    pub next: String,
    /// Prefixed-strict form, no leading v.
    pub next_strict: String,
    /// Major-only analogue of `next`.
    pub next_major: String,
    /// Major-only analogue of `next_strict`.
    pub next_major_strict: String,
    /// Rendered changelog document, when enabled.
    pub changelog: Option<String>,
}

/// Increment a version by the given severity. Follows standard semver
/// increment rules; a version carrying a prerelease identifier is first
/// graduated, so e.g. patch on `1.2.3-alpha.1` yields `1.2.3`.
pub fn increment(base: &Version, bump: Bump) -> Version {
    let graduating = !base.pre.is_empty();
    match bump {
        Bump::Major => {
            if graduating && base.minor == 0 && base.patch == 0 {
                Version::new(base.major, 0, 0)
            } else {
                Version::new(base.major + 1, 0, 0)
            }
        }
        Bump::Minor => {
            if graduating && base.patch == 0 {
                Version::new(base.major, base.minor, 0)
            } else {
                Version::new(base.major, base.minor + 1, 0)
            }
        }
        Bump::Patch => {
            if graduating {
                Version::new(base.major, base.minor, base.patch)
            } else {
                Version::new(base.major, base.minor, base.patch + 1)
            }
        }
    }
}

/// A prefix following the v-convention ("v", "app-v") already carries the
/// leading v of the rendered next form; rendering it verbatim in front of
/// `v{version}` would double it. Returns the prefix with that trailing v
/// removed so the strict and v-forms compose cleanly.
fn strict_prefix(prefix: &str) -> &str {
    if prefix == "v" || prefix.ends_with("-v") {
        &prefix[..prefix.len() - 1]
    } else {
        prefix
    }
}

/// Combine baseline and chosen bump into the rendered output set. A `None`
/// bump emits the baseline unchanged with severity token "none".
pub fn compose(
    prefix: &str,
    base: &Version,
    bump: Option<Bump>,
) -> VersionOutputs {
    let next = match bump {
        Some(bump) => increment(base, bump),
        None => base.clone(),
    };

    let bump_token = bump
        .map(|b| b.to_string())
        .unwrap_or_else(|| "none".to_string());

    let strict = strict_prefix(prefix);

    VersionOutputs {
        current: format!("{prefix}{base}"),
        bump: bump_token,
        next: format!("{strict}v{next}"),
        next_strict: format!("{strict}{next}"),
        next_major: format!("{strict}v{}", next.major),
        next_major_strict: format!("{strict}{}", next.major),
        changelog: None,
    }
}
