//! Ignore patterns value object
//!
//! Gitignore-style patterns for asset names skipped while collecting
//! source directories.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::fmt;
use std::path::Path;

/// Maximum number of patterns allowed
const MAX_PATTERNS: usize = 1000;

/// Patterns from the `[staticfiles] ignore` setting.
#[derive(Debug)]
pub struct IgnorePatterns {
    matcher: Gitignore,
    pattern_count: usize,
}

impl Default for IgnorePatterns {
    fn default() -> Self {
        Self::empty()
    }
}

impl IgnorePatterns {
    /// Create an empty pattern set (matches nothing).
    pub fn empty() -> Self {
        Self {
            matcher: Gitignore::empty(),
            pattern_count: 0,
        }
    }

    /// Build a matcher from configured patterns.
    ///
    /// Blank entries and `#` comments are skipped.
    pub fn from_patterns<S: AsRef<str>>(patterns: &[S]) -> Result<Self, IgnoreError> {
        let mut builder = GitignoreBuilder::new("");
        let mut pattern_count = 0;

        for (index, pattern) in patterns.iter().enumerate() {
            let pattern = pattern.as_ref();
            let trimmed = pattern.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            pattern_count += 1;
            if pattern_count > MAX_PATTERNS {
                return Err(IgnoreError::TooManyPatterns {
                    count: pattern_count,
                    limit: MAX_PATTERNS,
                });
            }

            if let Err(e) = builder.add_line(None, trimmed) {
                return Err(IgnoreError::InvalidPattern {
                    index,
                    pattern: pattern.to_string(),
                    message: e.to_string(),
                });
            }
        }

        let matcher = builder
            .build()
            .map_err(|e| IgnoreError::BuildFailed(e.to_string()))?;

        Ok(Self {
            matcher,
            pattern_count,
        })
    }

    /// Check if a slash-separated asset name should be ignored.
    pub fn is_ignored(&self, name: &str) -> bool {
        if self.pattern_count == 0 {
            return false;
        }
        self.matcher
            .matched_path_or_any_parents(Path::new(name), false)
            .is_ignore()
    }

    /// Get the number of patterns loaded.
    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    /// Check if this is an empty pattern set.
    pub fn is_empty(&self) -> bool {
        self.pattern_count == 0
    }
}

/// Errors that can occur when building ignore patterns.
#[derive(Debug)]
pub enum IgnoreError {
    /// Too many patterns configured.
    TooManyPatterns { count: usize, limit: usize },
    /// A pattern has invalid syntax.
    InvalidPattern {
        index: usize,
        pattern: String,
        message: String,
    },
    /// Failed to build the gitignore matcher.
    BuildFailed(String),
}

impl fmt::Display for IgnoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyPatterns { count, limit } => {
                write!(f, "{} ignore patterns exceed the {} limit", count, limit)
            }
            Self::InvalidPattern {
                index,
                pattern,
                message,
            } => {
                write!(
                    f,
                    "invalid pattern #{}: '{}' - {}",
                    index + 1,
                    pattern,
                    message
                )
            }
            Self::BuildFailed(msg) => write!(f, "failed to build ignore matcher: {}", msg),
        }
    }
}

impl std::error::Error for IgnoreError {}
