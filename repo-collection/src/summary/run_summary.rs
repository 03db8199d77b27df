//! Run summary types.

use super::result::PageResult;

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of repositories listed.
    pub repositories_listed: usize,

    /// Number of pages written.
    pub pages_written: usize,

    /// Number of pages that failed.
    pub pages_failed: usize,

    /// Total bytes written across all pages.
    pub bytes_written: u64,

    /// Per-repository results in completion order.
    pub results: Vec<PageResult>,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(repositories_listed: usize) -> Self {
        Self {
            repositories_listed,
            ..Default::default()
        }
    }

    /// Updates the summary with a page result.
    pub fn record_result(&mut self, result: PageResult) {
        match &result {
            PageResult::Written { bytes, .. } => {
                self.pages_written += 1;
                self.bytes_written += bytes;
            }
            PageResult::Failed { .. } => self.pages_failed += 1,
        }
        self.results.push(result);
    }

    /// Returns true if any page failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.pages_failed > 0
    }
}
