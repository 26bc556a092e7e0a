//! Configuration validation.
//!
//! Merging never rejects input; problems are corrected in place. This module
//! names those problems so they can be reported instead of vanishing.
//! Every problem is returned, not just the first.

use std::fmt;

use crate::config::schema::{ConfigOptions, LevelSetting};

/// A problem found in a set of options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `min_level` names no known level; DEBUG is used instead.
    UnknownLevel(LevelSetting),
    /// Business tag is empty, contains a path separator, or contains `..`.
    InvalidBusiness(String),
    /// Log directory had trailing characters stripped during normalization.
    LogDirNormalized { given: String, normalized: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::UnknownLevel(LevelSetting::Code(code)) => {
                write!(f, "unknown level code {}, falling back to DEBUG", code)
            }
            ValidationError::UnknownLevel(LevelSetting::Name(name)) => {
                write!(f, "unknown level name '{}', falling back to DEBUG", name)
            }
            ValidationError::InvalidBusiness(b) => {
                write!(f, "business tag '{}' cannot name a file inside the log directory", b)
            }
            ValidationError::LogDirNormalized { given, normalized } => {
                write!(f, "log directory '{}' normalized to '{}'", given, normalized)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Whether `tag` can name a log file inside the log directory.
pub fn is_usable_business(tag: &str) -> bool {
    !tag.is_empty() && !tag.contains(['/', '\\']) && !tag.contains("..")
}

/// Trim trailing tabs, line breaks, NUL, vertical tabs and slashes of
/// either direction, then append one `/`. Spaces are kept.
/// An empty directory stays empty (relative to the working directory).
pub fn normalize_log_dir(dir: &str) -> String {
    if dir.is_empty() {
        return String::new();
    }
    let trimmed = dir.trim_end_matches(['\t', '\n', '\r', '\0', '\x0B', '/', '\\']);
    format!("{}/", trimmed)
}

/// Check a set of options, collecting every problem.
pub fn validate_options(options: &ConfigOptions) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Some(level) = &options.min_level {
        if level.resolve().is_none() {
            errors.push(ValidationError::UnknownLevel(level.clone()));
        }
    }

    if let Some(business) = &options.business {
        if !is_usable_business(business) {
            errors.push(ValidationError::InvalidBusiness(business.clone()));
        }
    }

    if let Some(dir) = &options.log_dir {
        let normalized = normalize_log_dir(dir);
        // A bare missing slash is expected and not worth reporting.
        if !dir.is_empty() && normalized != *dir && normalized != format!("{}/", dir) {
            errors.push(ValidationError::LogDirNormalized {
                given: dir.clone(),
                normalized,
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
