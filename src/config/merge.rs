//! Merging options over the current configuration.

use crate::config::schema::{ConfigOptions, LogConfig};
use crate::config::validation::{
    is_usable_business, normalize_log_dir, validate_options, ValidationError,
};
use crate::logging::Level;

impl LogConfig {
    /// Merge `options` over `self`.
    ///
    /// Never fails. An unknown level falls back to DEBUG, an unusable
    /// business tag keeps the current one, and the directory is normalized.
    /// Each correction is logged as a warning and returned.
    pub fn merge(&mut self, options: ConfigOptions) -> Vec<ValidationError> {
        let problems = validate_options(&options).err().unwrap_or_default();
        for problem in &problems {
            tracing::warn!(problem = %problem, "Corrected logger configuration");
        }

        if let Some(dir) = options.log_dir {
            self.log_dir = normalize_log_dir(&dir);
        }

        if let Some(business) = options.business {
            if is_usable_business(&business) {
                self.business = business;
            }
        }

        if let Some(level) = options.min_level {
            self.min_level = level.resolve().unwrap_or(Level::Debug);
        }

        if let Some(split) = options.split_by_business {
            self.split_by_business = split;
        }

        problems
    }
}

/// Build a configuration by merging `options` over the built-in defaults.
pub fn configure(options: ConfigOptions) -> LogConfig {
    let mut config = LogConfig::default();
    config.merge(options);
    config
}
