//! Repository source error types.

use thiserror::Error;

/// Errors that can occur while talking to the hosting provider.
#[derive(Debug, Error)]
pub enum SourceError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// The repository has no README.
    #[error("No README found for {repository}")]
    MissingReadme { repository: String },

    /// The README payload could not be decoded as UTF-8 text.
    #[error("README of {repository} is not valid base64-encoded UTF-8")]
    InvalidContent { repository: String },

    /// The configured API base URL was rejected by the client.
    #[error("Invalid API base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: octocrab::Error,
    },
}
