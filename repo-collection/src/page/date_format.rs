//! Validated strftime-style timestamp formats.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone, Utc};
use std::fmt::{self, Write};
use std::str::FromStr;
use thiserror::Error;

/// Default timestamp format, e.g. `2024-01-02 03:04:05`.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Error returned for a format string chrono cannot interpret.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateFormatError {
    #[error("Invalid date format '{format}'")]
    Invalid { format: String },
}

/// A strftime-style format string checked once up front, so formatting
/// never fails mid-run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat(String);

impl DateFormat {
    /// Parses and validates a format string.
    ///
    /// # Errors
    ///
    /// Returns [`DateFormatError::Invalid`] if any specifier is unknown or
    /// can only be used for parsing (e.g. `%#z`).
    pub fn new(format: impl Into<String>) -> Result<Self, DateFormatError> {
        let format = format.into();
        if StrftimeItems::new(&format).any(|item| matches!(item, Item::Error)) {
            return Err(DateFormatError::Invalid { format });
        }
        let format = Self(format);
        format.format(&DateTime::<Utc>::UNIX_EPOCH)?;
        Ok(format)
    }

    /// Returns the raw format string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Formats a timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`DateFormatError::Invalid`] if chrono cannot format a
    /// specifier of this format.
    pub fn format<Tz>(&self, time: &DateTime<Tz>) -> Result<String, DateFormatError>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let mut out = String::new();
        write!(out, "{}", time.format(&self.0)).map_err(|_| DateFormatError::Invalid {
            format: self.0.clone(),
        })?;
        Ok(out)
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self(DEFAULT_DATE_FORMAT.to_string())
    }
}

impl FromStr for DateFormat {
    type Err = DateFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
