//! Page result types.

use std::path::PathBuf;

/// Result of producing the page for a single repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageResult {
    /// The page was written.
    Written {
        /// Repository full name.
        repository: String,
        /// Path of the written page.
        path: PathBuf,
        /// Number of bytes written.
        bytes: u64,
    },

    /// Fetching, rendering or writing failed.
    Failed {
        /// Repository full name.
        repository: String,
        /// Error message.
        error: String,
    },
}
