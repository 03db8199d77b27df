//! GitHub-backed repository source.

use super::{RepositoryMetadata, RepositorySource, SourceError};
use async_trait::async_trait;
use octocrab::Octocrab;
use tracing::{debug, info, info_span, Instrument};

/// Results per page when listing repositories.
const RESULTS_PER_PAGE: u8 = 100;

/// Lists repositories and fetches READMEs through the GitHub REST API.
#[derive(Clone)]
pub struct GitHubSource {
    octocrab: Octocrab,
}

impl GitHubSource {
    /// Builds a source from an optional personal access token and API base URL.
    ///
    /// Without a token the client is anonymous and subject to the API's
    /// unauthenticated limits; listing the current user's repositories then
    /// fails with an authentication error.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the base URL is rejected or the client
    /// cannot be built.
    pub fn new(token: Option<&str>, base_url: Option<&str>) -> Result<Self, SourceError> {
        let mut builder = Octocrab::builder();
        if let Some(url) = base_url {
            builder = builder
                .base_uri(url)
                .map_err(|source| SourceError::InvalidBaseUrl {
                    url: url.to_string(),
                    source,
                })?;
        }
        if let Some(token) = token {
            builder = builder.personal_token(token.to_string());
        }
        Ok(Self::from_octocrab(builder.build()?))
    }

    /// Wraps an already configured client.
    #[must_use]
    pub fn from_octocrab(octocrab: Octocrab) -> Self {
        Self { octocrab }
    }
}

#[async_trait]
impl RepositorySource for GitHubSource {
    async fn list_public_repositories(&self) -> Result<Vec<RepositoryMetadata>, SourceError> {
        async {
            info!("Listing public repositories");

            let first_page = self
                .octocrab
                .current()
                .list_repos_for_authenticated_user()
                .visibility("public")
                .per_page(RESULTS_PER_PAGE)
                .send()
                .await?;
            let repositories = self.octocrab.all_pages(first_page).await?;

            info!(count = repositories.len(), "Listing complete");
            Ok(repositories
                .into_iter()
                .map(RepositoryMetadata::from)
                .collect())
        }
        .instrument(info_span!("list_repositories"))
        .await
    }

    async fn fetch_readme(&self, repository: &RepositoryMetadata) -> Result<String, SourceError> {
        debug!(repo = %repository.full_name, "Fetching README");

        let content = self
            .octocrab
            .repos(&repository.owner, &repository.name)
            .get_readme()
            .send()
            .await
            .map_err(|e| {
                if is_not_found(&e) {
                    SourceError::MissingReadme {
                        repository: repository.full_name.clone(),
                    }
                } else {
                    SourceError::GitHubError(e)
                }
            })?;

        content
            .decoded_content()
            .ok_or_else(|| SourceError::InvalidContent {
                repository: repository.full_name.clone(),
            })
    }
}

/// Checks if an API error is a 404 response.
fn is_not_found(error: &octocrab::Error) -> bool {
    match error {
        octocrab::Error::GitHub { source, .. } => source.status_code.as_u16() == 404,
        _ => false,
    }
}

