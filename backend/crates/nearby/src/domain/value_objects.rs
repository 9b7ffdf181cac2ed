//! Domain Value Objects
//!
//! Immutable value types for the nearby domain.

use std::fmt;

/// Requested location, compared case-insensitively
///
/// The raw text is kept for logging; comparisons use the lowercase form.
/// No trimming or other normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    raw: String,
    folded: String,
}

impl Location {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let folded = raw.to_lowercase();
        Self { raw, folded }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Case-insensitive equality against a stored location
    pub fn matches(&self, other: &str) -> bool {
        // Fast path for ASCII avoids an allocation per record.
        if self.folded.is_ascii() && other.is_ascii() {
            return self.folded.eq_ignore_ascii_case(other);
        }
        other.to_lowercase() == self.folded
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for Location {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Location {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}
