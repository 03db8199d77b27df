//! Runner configuration.

use crate::page::{DateFormat, PageOptions};
use std::path::{Path, PathBuf};

/// Number of repositories processed concurrently.
pub const DEFAULT_CONCURRENCY: usize = 5;

/// Configuration for a collection build, constructed once at start-up.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Directory the pages are written to.
    destination: PathBuf,
    /// Layout name and timestamp format of every page.
    page_options: PageOptions,
    /// GitHub token; anonymous access when absent.
    token: Option<String>,
    /// GitHub API base URL override.
    api_url: Option<String>,
    /// Maximum number of repositories processed at once.
    concurrency: usize,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(
        destination: PathBuf,
        layout: String,
        date_format: DateFormat,
        token: Option<String>,
    ) -> Self {
        Self {
            destination,
            page_options: PageOptions {
                layout,
                date_format,
            },
            token,
            api_url: None,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    /// Sets a custom GitHub API base URL.
    pub fn with_api_url(mut self, api_url: String) -> Self {
        self.api_url = Some(api_url);
        self
    }

    /// Returns the destination directory.
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Returns the page options.
    pub fn page_options(&self) -> &PageOptions {
        &self.page_options
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns the GitHub API base URL override.
    pub fn api_url(&self) -> Option<&str> {
        self.api_url.as_deref()
    }

    /// Returns the max number of repositories processed at once.
    pub fn concurrency(&self) -> usize {
        self.concurrency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_five_workers() {
        let config = RunnerConfig::new(
            PathBuf::from("repos"),
            "repo".to_string(),
            DateFormat::default(),
            None,
        );

        assert_eq!(config.concurrency(), DEFAULT_CONCURRENCY);
        assert_eq!(config.token(), None);
        assert_eq!(config.api_url(), None);
        assert_eq!(config.page_options().layout, "repo");
    }
}
