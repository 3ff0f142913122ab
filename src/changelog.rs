//! Categorized release-notes rendering.
//!
//! Turns the classified change buckets and deduplicated contributor set into
//! an ordered markdown document: one titled, emoji-decorated section per
//! non-empty bucket (major, minor, patch, in that order), then contributors.

use serde::Serialize;

use crate::{
    analyzer::{changeset::ChangeSet, classifier::Contributor},
    config::{ChangelogConfig, SectionConfig},
    result::Result,
};

/// [Tera](https://github.com/Keats/tera) template for the rendered document.
/// Sections are precomputed; the template only handles layout.
const CHANGELOG_TEMPLATE: &str = r#"{% for section in sections %}### {{ section.emoji }} {{ section.title }}
{% for entry in section.entries %}- {{ entry }}
{% endfor %}
{% endfor %}"#;

#[derive(Debug, Serialize)]
struct Section {
    title: String,
    emoji: String,
    entries: Vec<String>,
}

#[derive(Debug, Serialize)]
struct Document {
    sections: Vec<Section>,
}

/// Render the changelog for a change set. Returns `None` when every section
/// is disabled or empty.
pub fn render(
    config: &ChangelogConfig,
    changes: &ChangeSet,
    contributors: &[Contributor],
) -> Result<Option<String>> {
    let mut sections = vec![];

    push_section(&mut sections, &config.major, changes.major.clone());
    push_section(&mut sections, &config.minor, changes.minor.clone());
    push_section(&mut sections, &config.patch, changes.patch.clone());
    push_section(
        &mut sections,
        &config.contributors,
        contributors.iter().map(contributor_entry).collect(),
    );

    if sections.is_empty() {
        return Ok(None);
    }

    let mut tera = tera::Tera::default();
    tera.add_raw_template("changelog", CHANGELOG_TEMPLATE)?;
    let context = tera::Context::from_serialize(Document { sections })?;
    let rendered = tera.render("changelog", &context)?;

    Ok(Some(rendered.trim_end().to_string()))
}

fn push_section(
    sections: &mut Vec<Section>,
    config: &SectionConfig,
    entries: Vec<String>,
) {
    if !config.is_enabled() || entries.is_empty() {
        return;
    }

    sections.push(Section {
        title: config.title.clone(),
        emoji: config.emoji.clone(),
        entries,
    });
}

/// Linked handle plus display name when the forge supplied both a handle and
/// a profile link, plain display name otherwise.
fn contributor_entry(contributor: &Contributor) -> String {
    match (&contributor.login, &contributor.link) {
        (Some(login), Some(link)) => {
            format!("[@{login}]({link}) ({})", contributor.name)
        }
        _ => contributor.name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn changes() -> ChangeSet {
        ChangeSet {
            major: vec!["feat!: drop legacy api".to_string()],
            minor: vec![
                "feat: add retries".to_string(),
                "feat(core): add caching".to_string(),
            ],
            patch: vec!["fix: correct off-by-one".to_string()],
        }
    }

    fn contributor(
        name: &str,
        login: Option<&str>,
        link: Option<&str>,
    ) -> Contributor {
        Contributor {
            name: name.to_string(),
            email: format!("{name}@example.com"),
            login: login.map(str::to_string),
            link: link.map(str::to_string),
        }
    }

    #[test]
    fn renders_buckets_in_severity_order() {
        let doc = render(&ChangelogConfig::default(), &changes(), &[])
            .unwrap()
            .unwrap();

        let major = doc.find("### 💥 Breaking Changes").unwrap();
        let minor = doc.find("### 🚀 New Features").unwrap();
        let patch = doc.find("### 🐛 Fixes").unwrap();
        assert!(major < minor && minor < patch);
        assert!(doc.contains("- feat: add retries"));
        assert!(doc.contains("- fix: correct off-by-one"));
    }

    #[test]
    fn omits_empty_buckets() {
        let changes = ChangeSet {
            minor: vec!["feat: only one".to_string()],
            ..ChangeSet::default()
        };

        let doc = render(&ChangelogConfig::default(), &changes, &[])
            .unwrap()
            .unwrap();

        assert!(!doc.contains("Breaking Changes"));
        assert!(!doc.contains("Fixes"));
        assert!(!doc.contains("Contributors"));
        assert!(doc.contains("### 🚀 New Features"));
    }

    #[test]
    fn omits_sections_with_empty_titles() {
        let config = ChangelogConfig {
            patch: SectionConfig::new("", "🐛"),
            ..ChangelogConfig::default()
        };

        let doc = render(&config, &changes(), &[]).unwrap().unwrap();

        assert!(!doc.contains("fix: correct off-by-one"));
        assert!(doc.contains("feat: add retries"));
    }

    #[test]
    fn links_contributors_only_when_handle_and_link_exist() {
        let contributors = vec![
            contributor(
                "Ada",
                Some("ada"),
                Some("https://github.com/ada"),
            ),
            contributor("Grace", Some("grace"), None),
        ];

        let doc = render(&ChangelogConfig::default(), &changes(), &contributors)
            .unwrap()
            .unwrap();

        assert!(doc.contains("- [@ada](https://github.com/ada) (Ada)"));
        assert!(doc.ends_with("- Grace"));
        assert!(!doc.contains("@grace"));
    }

    #[test]
    fn empty_change_set_renders_nothing() {
        let doc = render(&ChangelogConfig::default(), &ChangeSet::default(), &[])
            .unwrap();
        assert!(doc.is_none());
    }
}
