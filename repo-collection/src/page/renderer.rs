//! Front matter renderer.

use super::{DateFormatError, PageError, PageOptions, TemplateError};
use crate::source::RepositoryMetadata;
use chrono::{DateTime, Local};
use handlebars::{no_escape, Handlebars};
use serde::Serialize;

/// Sentinel written for absent optional values.
const NONE: &str = "None";

/// Spelling of boolean values in the front matter.
fn bool_value(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// Front matter template. Key order is fixed.
const FRONT_MATTER_TEMPLATE: &str = "---
layout: {{layout}}
name: {{name}}
full_name: {{full_name}}
description: {{description}}
url: {{url}}
is_archived: {{is_archived}}
is_fork: {{is_fork}}
watchers: {{watchers}}
forks: {{forks}}
stars: {{stars}}
pushed_at: {{pushed_at}}
created_at: {{created_at}}
updated_at: {{updated_at}}
open_issues: {{open_issues}}
license: {{license}}
checked_at: {{checked_at}}
---

";

/// Creates a configured Handlebars registry.
///
/// The registry is configured with:
/// - No HTML escaping (values are written verbatim)
/// - Strict mode (catches missing variables)
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();
    hbs.register_escape_fn(no_escape);
    hbs.set_strict_mode(true);
    hbs
}

/// Values substituted into the front matter template.
#[derive(Debug, Clone, Serialize)]
pub struct FrontMatter<'a> {
    pub layout: &'a str,
    pub name: &'a str,
    pub full_name: &'a str,
    pub description: &'a str,
    pub url: &'a str,
    pub is_archived: &'static str,
    pub is_fork: &'static str,
    pub watchers: u32,
    pub forks: u32,
    pub stars: u32,
    pub pushed_at: String,
    pub created_at: String,
    pub updated_at: String,
    pub open_issues: u32,
    pub license: &'a str,
    pub checked_at: String,
}

impl<'a> FrontMatter<'a> {
    /// Collects the front matter values of a repository.
    ///
    /// Repository timestamps are formatted in UTC; `checked_at` keeps the
    /// local offset of the render time.
    ///
    /// # Errors
    ///
    /// Returns [`DateFormatError`] if a timestamp cannot be formatted.
    pub fn new(
        repository: &'a RepositoryMetadata,
        options: &'a PageOptions,
        checked_at: &DateTime<Local>,
    ) -> Result<Self, DateFormatError> {
        let format = &options.date_format;
        let timestamp = |time: Option<&chrono::DateTime<chrono::Utc>>| match time {
            Some(t) => format.format(t),
            None => Ok(NONE.to_string()),
        };

        Ok(Self {
            layout: &options.layout,
            name: &repository.name,
            full_name: &repository.full_name,
            description: repository.description.as_deref().unwrap_or(NONE),
            url: &repository.url,
            is_archived: bool_value(repository.archived),
            is_fork: bool_value(repository.fork),
            watchers: repository.watchers,
            forks: repository.forks,
            stars: repository.stars,
            pushed_at: timestamp(repository.pushed_at.as_ref())?,
            created_at: timestamp(repository.created_at.as_ref())?,
            updated_at: timestamp(repository.updated_at.as_ref())?,
            open_issues: repository.open_issues,
            license: repository.license.as_deref().unwrap_or(NONE),
            checked_at: format.format(checked_at)?,
        })
    }
}

/// Renders collection pages.
pub struct PageRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for PageRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PageRenderer {
    /// Creates a new page renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlebars: create_handlebars_registry(),
        }
    }

    /// Renders only the front matter block, including the trailing blank line.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_front_matter(&self, front_matter: &FrontMatter<'_>) -> Result<String, TemplateError> {
        Ok(self
            .handlebars
            .render_template(FRONT_MATTER_TEMPLATE, front_matter)?)
    }

    /// Renders a full page: front matter, blank line, README.
    ///
    /// # Errors
    ///
    /// Returns an error if a timestamp cannot be formatted or template
    /// rendering fails.
    pub fn render(
        &self,
        repository: &RepositoryMetadata,
        readme: &str,
        options: &PageOptions,
        checked_at: &DateTime<Local>,
    ) -> Result<String, PageError> {
        let front_matter = FrontMatter::new(repository, options, checked_at)?;
        let mut page = self.render_front_matter(&front_matter)?;
        page.push_str(readme);
        Ok(page)
    }
}
