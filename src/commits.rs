//! Commit-range collection between the baseline ref and the branch head.

use log::*;

use crate::{
    forge::{
        config::DEFAULT_PAGE_SIZE,
        request::ForgeCommit,
        traits::Forge,
    },
    result::Result,
};

/// Fetch every commit in `base..head`, walking compare pages until the
/// reported total is reached. Page boundaries never drop or duplicate
/// commits; the forge reports the range total on every page.
pub async fn fetch_range(
    forge: &dyn Forge,
    base: &str,
    head: &str,
) -> Result<Vec<ForgeCommit>> {
    let mut commits: Vec<ForgeCommit> = vec![];
    let mut page: u64 = 1;

    loop {
        let result = forge.compare_commit_range(base, head, page).await?;
        let page_len = result.commits.len() as u64;

        commits.extend(result.commits);

        if (page - 1) * DEFAULT_PAGE_SIZE + page_len >= result.total_commits {
            break;
        }

        page += 1;
    }

    debug!("Found {} commits between {base} and {head}", commits.len());

    Ok(commits)
}

/// Append caller-provided messages as synthetic commits carrying no author
/// identity. They classify like fetched commits but never contribute
/// contributors.
pub fn append_additional(
    commits: &mut Vec<ForgeCommit>,
    additional: &[String],
) {
    for message in additional {
        let message = message.trim();
        if message.is_empty() {
            continue;
        }
        commits.push(ForgeCommit::synthetic(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forge::{request::CommitPage, traits::MockForge};
    use mockall::predicate::eq;

    fn commit(id: &str) -> ForgeCommit {
        ForgeCommit {
            id: id.to_string(),
            message: format!("fix: {id}"),
            author_name: "Dev".to_string(),
            author_email: "dev@example.com".to_string(),
            author_login: None,
            author_link: None,
        }
    }

    #[tokio::test]
    async fn single_page_fetch_stops_after_one_request() {
        let mut forge = MockForge::new();
        forge
            .expect_compare_commit_range()
            .with(eq("v1.0.0"), eq("main"), eq(1u64))
            .times(1)
            .returning(|_, _, _| {
                Ok(CommitPage {
                    total_commits: 3,
                    commits: vec![commit("a"), commit("b"), commit("c")],
                })
            });

        let commits = fetch_range(&forge, "v1.0.0", "main").await.unwrap();

        assert_eq!(commits.len(), 3);
    }

    #[tokio::test]
    async fn walks_pages_until_the_total_is_reached() {
        let mut forge = MockForge::new();
        forge
            .expect_compare_commit_range()
            .with(eq("v1.0.0"), eq("main"), eq(1u64))
            .times(1)
            .returning(|_, _, _| {
                Ok(CommitPage {
                    total_commits: 150,
                    commits: (0..100)
                        .map(|i| commit(&format!("p1-{i}")))
                        .collect(),
                })
            });
        forge
            .expect_compare_commit_range()
            .with(eq("v1.0.0"), eq("main"), eq(2u64))
            .times(1)
            .returning(|_, _, _| {
                Ok(CommitPage {
                    total_commits: 150,
                    commits: (0..50)
                        .map(|i| commit(&format!("p2-{i}")))
                        .collect(),
                })
            });

        let commits = fetch_range(&forge, "v1.0.0", "main").await.unwrap();

        assert_eq!(commits.len(), 150);
        assert_eq!(commits[0].id, "p1-0");
        assert_eq!(commits[149].id, "p2-49");
    }

    #[tokio::test]
    async fn empty_range_yields_no_commits() {
        let mut forge = MockForge::new();
        forge
            .expect_compare_commit_range()
            .times(1)
            .returning(|_, _, _| {
                Ok(CommitPage {
                    total_commits: 0,
                    commits: vec![],
                })
            });

        let commits = fetch_range(&forge, "v1.0.0", "main").await.unwrap();

        assert!(commits.is_empty());
    }

    #[test]
    fn additional_commits_are_synthetic() {
        let mut commits = vec![commit("a")];

        append_additional(
            &mut commits,
            &["feat: forced feature".to_string(), "  ".to_string()],
        );

        assert_eq!(commits.len(), 2);
        assert!(commits[1].is_synthetic());
        assert_eq!(commits[1].message, "feat: forced feature");
    }
}
