//! Repository metadata.

use chrono::{DateTime, Utc};

/// Metadata of a listed repository, as rendered into its collection page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryMetadata {
    /// Repository name.
    pub name: String,

    /// Full repository name in "owner/name" format.
    pub full_name: String,

    /// Repository owner (user or organization).
    pub owner: String,

    pub description: Option<String>,

    /// Web URL of the repository.
    pub url: String,

    pub archived: bool,
    pub fork: bool,
    pub watchers: u32,
    pub forks: u32,
    pub stars: u32,
    pub open_issues: u32,

    pub pushed_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,

    /// SPDX identifier of the detected license.
    pub license: Option<String>,
}

impl From<octocrab::models::Repository> for RepositoryMetadata {
    fn from(repo: octocrab::models::Repository) -> Self {
        let owner = repo
            .owner
            .as_ref()
            .map(|owner| owner.login.clone())
            .or_else(|| {
                repo.full_name
                    .as_deref()
                    .and_then(|full| full.split_once('/'))
                    .map(|(owner, _)| owner.to_string())
            })
            .unwrap_or_default();
        let full_name = repo
            .full_name
            .clone()
            .unwrap_or_else(|| format!("{}/{}", owner, repo.name));

        Self {
            full_name,
            owner,
            description: repo.description,
            url: repo.html_url.map(|u| u.to_string()).unwrap_or_default(),
            archived: repo.archived.unwrap_or(false),
            fork: repo.fork.unwrap_or(false),
            watchers: repo.watchers_count.unwrap_or(0),
            forks: repo.forks_count.unwrap_or(0),
            stars: repo.stargazers_count.unwrap_or(0),
            open_issues: repo.open_issues_count.unwrap_or(0),
            pushed_at: repo.pushed_at,
            created_at: repo.created_at,
            updated_at: repo.updated_at,
            license: repo.license.map(|license| license.spdx_id),
            name: repo.name,
        }
    }
}
