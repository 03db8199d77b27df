//! Runner error types.

use crate::page::PageError;
use crate::source::SourceError;

/// Errors that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// The destination path exists and is a regular file.
    #[error("Destination directory is an existing file: {path}")]
    DestinationIsFile { path: String },

    /// The destination directory could not be created.
    #[error("Failed to create destination directory '{path}': {source}")]
    CreateDestination {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Client initialization or repository listing errors.
    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Errors attributed to a single repository. They never abort the run.
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    /// README retrieval errors.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Rendering and writing errors.
    #[error(transparent)]
    Page(#[from] PageError),
}
