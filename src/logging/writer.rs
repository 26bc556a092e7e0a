//! Destination selection and append-only file output.
//!
//! Every record opens its file in append mode, hands the whole line to the
//! OS in a single write, and closes it again. Concurrent processes sharing a
//! file rely on `O_APPEND` for line integrity; no handle outlives a call.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::validation::is_usable_business;
use crate::config::LogConfig;
use crate::logging::error::{LogError, LogResult};
use crate::logging::Level;

/// File a record at `level` for `business` is appended to.
///
/// Without per-business splitting, or with a business tag that is empty or
/// could leave the log directory, the default business names the file.
pub fn destination(config: &LogConfig, level: Level, business: &str) -> PathBuf {
    let name = if !config.split_by_business || !is_usable_business(business) {
        config.business.as_str()
    } else {
        business
    };
    PathBuf::from(format!(
        "{}{}_{}.log",
        config.log_dir,
        name,
        level.tier().as_str()
    ))
}

/// Append one rendered line, creating the file if needed.
pub fn append_line(path: &Path, line: &str) -> LogResult<()> {
    let result = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut file| file.write_all(line.as_bytes()));

    result.map_err(|source| {
        tracing::error!(path = %path.display(), error = %source, "Failed to append log line");
        LogError::Write {
            path: path.to_path_buf(),
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{configure, ConfigOptions};

    fn split_config() -> LogConfig {
        configure(
            ConfigOptions::default()
                .log_dir("/var/log/app")
                .split_by_business(true),
        )
    }

    #[test]
    fn test_destination_by_business_and_tier() {
        let config = split_config();
        assert_eq!(
            destination(&config, Level::Error, "math"),
            PathBuf::from("/var/log/app/math_ERROR.log")
        );
        assert_eq!(
            destination(&config, Level::Info, "math"),
            PathBuf::from("/var/log/app/math_INFO.log")
        );
        assert_eq!(
            destination(&config, Level::Alert, ""),
            PathBuf::from("/var/log/app/default_ERROR.log")
        );
    }

    #[test]
    fn test_destination_rejects_path_like_business() {
        let config = split_config();
        for tag in ["../up", "a/b", "a\\b", ".."] {
            assert_eq!(
                destination(&config, Level::Info, tag),
                PathBuf::from("/var/log/app/default_INFO.log")
            );
        }
    }

    #[test]
    fn test_destination_without_split_ignores_business() {
        let config = configure(ConfigOptions::default().business("shop"));
        assert_eq!(
            destination(&config, Level::Debug, "math"),
            PathBuf::from("/tmp/shop_INFO.log")
        );
    }

    #[test]
    fn test_append_creates_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("default_INFO.log");

        append_line(&path, "one\n").unwrap();
        append_line(&path, "two\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn test_append_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("default_INFO.log");

        let err = append_line(&path, "lost\n").unwrap_err();
        assert!(matches!(err, LogError::Write { .. }));
    }
}
