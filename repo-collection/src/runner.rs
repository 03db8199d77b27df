//! Orchestrates a collection build.

mod config;
mod error;

pub use config::{RunnerConfig, DEFAULT_CONCURRENCY};
pub use error::{RunnerError, TaskError};

use crate::page::{write_page, PageRenderer};
use crate::source::{GitHubSource, RepositoryMetadata, RepositorySource};
use crate::summary::{PageResult, RunSummary};
use chrono::Local;
use futures::stream::{self, StreamExt};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, info_span, Instrument};

/// Lists repositories, then renders and writes one page per repository.
pub struct Runner<S = GitHubSource> {
    config: RunnerConfig,
    source: S,
    renderer: PageRenderer,
}

impl Runner<GitHubSource> {
    /// Builds a runner backed by the GitHub API.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let source = GitHubSource::new(config.token(), config.api_url())?;
        Ok(Self::with_source(config, source))
    }
}

impl<S: RepositorySource> Runner<S> {
    /// Builds a runner on top of any repository source.
    pub fn with_source(config: RunnerConfig, source: S) -> Self {
        Self {
            config,
            source,
            renderer: PageRenderer::new(),
        }
    }

    /// Executes the full build.
    ///
    /// Per-repository failures are logged and recorded in the summary; only
    /// destination and listing errors abort the run.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        prepare_destination(self.config.destination()).await?;

        let repositories = self.source.list_public_repositories().await?;
        info!(count = repositories.len(), "Found repositories");

        let mut summary = RunSummary::new(repositories.len());
        let mut results = stream::iter(&repositories)
            .map(|repository| self.process_repository(repository))
            .buffer_unordered(self.config.concurrency());

        while let Some(result) = results.next().await {
            log_result(&result);
            summary.record_result(result);
        }

        debug!(
            listed = summary.repositories_listed,
            written = summary.pages_written,
            failed = summary.pages_failed,
            bytes = summary.bytes_written,
            "Run complete"
        );
        Ok(summary)
    }

    async fn process_repository(&self, repository: &RepositoryMetadata) -> PageResult {
        let span = info_span!("render_page", repo = %repository.full_name);
        match self.build_page(repository).instrument(span).await {
            Ok((path, bytes)) => PageResult::Written {
                repository: repository.full_name.clone(),
                path,
                bytes,
            },
            Err(e) => PageResult::Failed {
                repository: repository.full_name.clone(),
                error: e.to_string(),
            },
        }
    }

    async fn build_page(&self, repository: &RepositoryMetadata) -> Result<(PathBuf, u64), TaskError> {
        let readme = self.source.fetch_readme(repository).await?;
        let page = self
            .renderer
            .render(
                repository,
                &readme,
                self.config.page_options(),
                &Local::now(),
            )?;
        Ok(write_page(self.config.destination(), &repository.name, &page).await?)
    }
}

/// Checks that the destination is not a regular file and creates it.
///
/// An existing directory is reused so that re-runs overwrite earlier pages.
async fn prepare_destination(destination: &Path) -> Result<(), RunnerError> {
    let is_file = tokio::fs::metadata(destination)
        .await
        .map(|metadata| metadata.is_file())
        .unwrap_or(false);
    if is_file {
        return Err(RunnerError::DestinationIsFile {
            path: destination.display().to_string(),
        });
    }

    tokio::fs::create_dir_all(destination)
        .await
        .map_err(|source| RunnerError::CreateDestination {
            path: destination.display().to_string(),
            source,
        })
}

fn log_result(result: &PageResult) {
    match result {
        PageResult::Written {
            repository, bytes, ..
        } => info!("{bytes} bytes written for {repository} completed"),
        PageResult::Failed { repository, error } => {
            error!("{repository} generated an exception: {error}")
        }
    }
}
