//! Page rendering error types.

use thiserror::Error;

/// Template rendering error.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Handlebars rendering error.
    #[error("Template rendering error: {0}")]
    RenderError(#[from] handlebars::RenderError),
}

/// Errors that can occur while producing a single page.
#[derive(Debug, Error)]
pub enum PageError {
    /// The repository name cannot be used as a file name.
    #[error("Repository name '{name}' is not a valid file name")]
    InvalidName { name: String },

    /// Front matter rendering failed.
    #[error(transparent)]
    TemplateError(#[from] TemplateError),

    /// A timestamp could not be formatted.
    #[error(transparent)]
    DateFormat(#[from] super::DateFormatError),

    /// Failed to write the page.
    #[error("Failed to write file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
