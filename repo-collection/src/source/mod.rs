//! Repository listing and README retrieval.
//!
//! [`RepositorySource`] is the seam between the collection builder and the
//! hosting provider. [`GitHubSource`] implements it on top of the GitHub
//! REST API.

mod error;
mod github;
mod repository;

pub use error::SourceError;
pub use github::GitHubSource;
pub use repository::RepositoryMetadata;

use async_trait::async_trait;

/// Provides the repositories of the current account and their README content.
#[async_trait]
pub trait RepositorySource: Send + Sync {
    /// Lists every repository with public visibility for the current account.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the listing request fails. No retry is attempted.
    async fn list_public_repositories(&self) -> Result<Vec<RepositoryMetadata>, SourceError>;

    /// Fetches the README text of a single repository.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::MissingReadme`] if the repository has no README,
    /// or another [`SourceError`] if the request or decoding fails.
    async fn fetch_readme(&self, repository: &RepositoryMetadata) -> Result<String, SourceError>;
}
