//! Collection page rendering and writing.
//!
//! A page is a front-matter block describing the repository, a blank line,
//! and the repository's README verbatim. One page is written per repository
//! as `<dest>/<repo-name>.md`.

mod date_format;
mod error;
mod renderer;

pub use date_format::{DateFormat, DateFormatError, DEFAULT_DATE_FORMAT};
pub use error::{PageError, TemplateError};
pub use renderer::{create_handlebars_registry, FrontMatter, PageRenderer};

use std::path::{Path, PathBuf};
use tracing::debug;

/// Default page layout name.
pub const DEFAULT_LAYOUT: &str = "repo";

/// Options shared by every page rendered in a run.
#[derive(Debug, Clone)]
pub struct PageOptions {
    /// Layout name written into the front matter.
    pub layout: String,
    /// Format used for every timestamp in the front matter.
    pub date_format: DateFormat,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            layout: DEFAULT_LAYOUT.to_string(),
            date_format: DateFormat::default(),
        }
    }
}

/// Returns the path of the page for a repository named `name`.
///
/// # Errors
///
/// Returns [`PageError::InvalidName`] if the name is not a single plain path
/// component.
pub fn page_path(dest: &Path, name: &str) -> Result<PathBuf, PageError> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\'])
        || name.contains('\0');
    if invalid {
        return Err(PageError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(dest.join(format!("{name}.md")))
}

/// Writes a rendered page for the repository named `name`, replacing any
/// existing file.
///
/// Returns the written path and the number of bytes written.
///
/// # Errors
///
/// Returns [`PageError`] if the name is invalid or the file cannot be written.
pub async fn write_page(dest: &Path, name: &str, contents: &str) -> Result<(PathBuf, u64), PageError> {
    let path = page_path(dest, name)?;
    tokio::fs::write(&path, contents)
        .await
        .map_err(|source| PageError::IoError {
            path: path.display().to_string(),
            source,
        })?;

    let bytes = contents.len() as u64;
    debug!(path = %path.display(), bytes, "Page written");
    Ok((path, bytes))
}
