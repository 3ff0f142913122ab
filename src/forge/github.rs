//! Implements the Forge trait for GitHub
use async_trait::async_trait;
use color_eyre::eyre::eyre;
use log::*;
use octocrab::Octocrab;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::{
    forge::{
        config::{DEFAULT_PAGE_SIZE, RemoteConfig},
        request::{CommitPage, ForgeCommit, TagRef},
        traits::Forge,
    },
    result::Result,
};

const LAST_TAGS_QUERY: &str = r#"
query LastTags($owner: String!, $repo: String!, $fetch_limit: Int!) {
  repository(owner: $owner, name: $repo) {
    refs(
      first: $fetch_limit
      refPrefix: "refs/tags/"
      orderBy: { field: TAG_COMMIT_DATE, direction: DESC }
    ) {
      nodes {
        name
        target {
          oid
        }
      }
    }
  }
}"#;

const SINGLE_TAG_QUERY: &str = r#"
query SingleTag($owner: String!, $repo: String!, $tag: String!) {
  repository(owner: $owner, name: $repo) {
    ref(qualifiedName: $tag) {
      name
      target {
        oid
      }
    }
  }
}"#;

#[derive(Debug, Deserialize)]
struct RefTarget {
    pub oid: String,
}

#[derive(Debug, Deserialize)]
struct RefNode {
    pub name: String,
    pub target: RefTarget,
}

#[derive(Debug, Deserialize)]
struct RefsConnection {
    pub nodes: Vec<RefNode>,
}

#[derive(Debug, Deserialize)]
struct LastTagsRepository {
    pub refs: RefsConnection,
}

#[derive(Debug, Deserialize)]
struct LastTagsData {
    pub repository: LastTagsRepository,
}

#[derive(Debug, Deserialize)]
struct LastTagsResult {
    pub data: LastTagsData,
}

#[derive(Debug, Serialize)]
struct LastTagsVariables {
    pub owner: String,
    pub repo: String,
    pub fetch_limit: u64,
}

#[derive(Debug, Deserialize)]
struct SingleTagRepository {
    #[serde(rename = "ref")]
    pub tag_ref: Option<RefNode>,
}

#[derive(Debug, Deserialize)]
struct SingleTagData {
    pub repository: SingleTagRepository,
}

#[derive(Debug, Deserialize)]
struct SingleTagResult {
    pub data: SingleTagData,
}

#[derive(Debug, Serialize)]
struct SingleTagVariables {
    pub owner: String,
    pub repo: String,
    pub tag: String,
}

#[derive(Debug, Deserialize)]
struct CompareGitAuthor {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Deserialize)]
struct CompareGitCommit {
    pub message: String,
    pub author: Option<CompareGitAuthor>,
}

#[derive(Debug, Deserialize)]
struct CompareUser {
    pub login: String,
    pub html_url: String,
}

#[derive(Debug, Deserialize)]
struct CompareCommitNode {
    pub sha: String,
    pub commit: CompareGitCommit,
    pub author: Option<CompareUser>,
}

#[derive(Debug, Deserialize)]
struct CompareResult {
    pub total_commits: u64,
    pub commits: Vec<CompareCommitNode>,
}

/// GitHub forge implementation using Octocrab for tag queries and
/// commit-range comparisons.
pub struct Github {
    config: RemoteConfig,
    instance: Octocrab,
}

impl Github {
    /// Create GitHub client with personal access token authentication and API
    /// base URL configuration.
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let builder = Octocrab::builder()
            .personal_token(config.token.clone())
            .base_uri(config.api_base_url.clone())?;
        let instance = builder.build()?;

        Ok(Self { config, instance })
    }
}

#[async_trait]
impl Forge for Github {
    async fn list_recent_tags(&self, limit: u64) -> Result<Vec<TagRef>> {
        let vars = LastTagsVariables {
            owner: self.config.owner.clone(),
            repo: self.config.repo.clone(),
            fetch_limit: limit,
        };

        let json = serde_json::json!({
            "query": LAST_TAGS_QUERY,
            "variables": vars,
        });

        let result: LastTagsResult = self.instance.graphql(&json).await?;

        let tags = result
            .data
            .repository
            .refs
            .nodes
            .into_iter()
            .map(|node| TagRef {
                name: node.name,
                sha: node.target.oid,
            })
            .collect::<Vec<TagRef>>();

        debug!("fetched {} tags from github", tags.len());

        Ok(tags)
    }

    async fn get_tag_by_name(&self, name: &str) -> Result<Option<TagRef>> {
        let vars = SingleTagVariables {
            owner: self.config.owner.clone(),
            repo: self.config.repo.clone(),
            tag: format!("refs/tags/{name}"),
        };

        let json = serde_json::json!({
            "query": SINGLE_TAG_QUERY,
            "variables": vars,
        });

        let result: SingleTagResult = self.instance.graphql(&json).await?;

        Ok(result.data.repository.tag_ref.map(|node| TagRef {
            name: node.name,
            sha: node.target.oid,
        }))
    }

    async fn compare_commit_range(
        &self,
        base: &str,
        head: &str,
        page: u64,
    ) -> Result<CommitPage> {
        let endpoint = format!(
            "{}/repos/{}/{}/compare/{}...{}?page={}&per_page={}",
            self.config.api_base_url,
            self.config.owner,
            self.config.repo,
            base,
            head,
            page,
            DEFAULT_PAGE_SIZE,
        );

        let result: std::result::Result<CompareResult, octocrab::Error> =
            self.instance.get(endpoint, None::<&()>).await;

        let compared = match result {
            Err(octocrab::Error::GitHub { source, .. })
                if source.status_code == StatusCode::NOT_FOUND =>
            {
                return Err(eyre!(
                    "commit range {base}...{head} not found: check branch and tag names"
                ));
            }
            Err(err) => return Err(err.into()),
            Ok(compared) => compared,
        };

        let commits = compared
            .commits
            .into_iter()
            .map(|node| {
                let git_author = node.commit.author.unwrap_or(CompareGitAuthor {
                    name: "".into(),
                    email: "".into(),
                });
                ForgeCommit {
                    id: node.sha,
                    message: node.commit.message,
                    author_name: git_author.name,
                    author_email: git_author.email,
                    author_login: node.author.as_ref().map(|u| u.login.clone()),
                    author_link: node.author.map(|u| u.html_url),
                }
            })
            .collect::<Vec<ForgeCommit>>();

        Ok(CommitPage {
            total_commits: compared.total_commits,
            commits,
        })
    }
}
