//! Builds a static-site collection from a GitHub account's public repositories.
//!
//! Every public repository of the authenticated user becomes one
//! `<dest>/<repo-name>.md` page: a front-matter block with the repository's
//! metadata, a blank line, and the repository's README. The pages are meant to
//! be consumed as a Jekyll collection.

pub mod page;
pub mod runner;
pub mod source;
pub mod summary;

pub use page::{
    create_handlebars_registry, page_path, write_page, DateFormat, DateFormatError, FrontMatter,
    PageError, PageOptions, PageRenderer, TemplateError, DEFAULT_DATE_FORMAT, DEFAULT_LAYOUT,
};
pub use runner::{Runner, RunnerConfig, RunnerError, TaskError, DEFAULT_CONCURRENCY};
pub use source::{GitHubSource, RepositoryMetadata, RepositorySource, SourceError};
pub use summary::{PageResult, RunSummary};
