//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::merge::configure;
use crate::config::schema::{ConfigOptions, LogConfig};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}

/// Parse options from TOML text.
pub fn parse_options(content: &str) -> Result<ConfigOptions, ConfigError> {
    toml::from_str(content).map_err(ConfigError::Parse)
}

/// Read options from a TOML file.
pub fn load_options(path: &Path) -> Result<ConfigOptions, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    parse_options(&content)
}

/// Load a TOML file and merge it over the defaults.
pub fn load_config(path: &Path) -> Result<LogConfig, ConfigError> {
    let options = load_options(path)?;
    tracing::debug!(path = %path.display(), "Loaded logger configuration");
    Ok(configure(options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::LevelSetting;
    use crate::logging::Level;

    #[test]
    fn test_parse_legacy_keys() {
        let options = parse_options(
            r#"
            logDir = "/data/logs"
            yewu = "math"
            level = 300
            multi = true
            "#,
        )
        .unwrap();
        assert_eq!(options.log_dir.as_deref(), Some("/data/logs"));
        assert_eq!(options.business.as_deref(), Some("math"));
        assert_eq!(options.min_level, Some(LevelSetting::Code(300)));
        assert_eq!(options.split_by_business, Some(true));
    }

    #[test]
    fn test_parse_rust_keys_and_level_name() {
        let options = parse_options(
            r#"
            log_dir = "/data/logs/"
            min_level = "error"
            "#,
        )
        .unwrap();
        assert_eq!(options.min_level.unwrap().resolve(), Some(Level::Error));
        assert!(options.business.is_none());
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let options = parse_options("").unwrap();
        assert_eq!(options, ConfigOptions::default());
    }

    #[test]
    fn test_parse_error() {
        let err = parse_options("multi = \"yes\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tierlog.toml");
        fs::write(&path, "logDir = \"/srv/app\"\nlevel = 250\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.log_dir, "/srv/app/");
        assert_eq!(config.min_level, Level::Notice);
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/nonexistent/tierlog.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
