//! Configuration schema definitions.
//!
//! `LogConfig` is the settled configuration a logger runs with.
//! `ConfigOptions` is the partial input merged over it: every field is
//! optional and accepts both the Rust field name and the short legacy key.

use serde::{Deserialize, Serialize};

use crate::logging::Level;

/// Default output directory.
pub const DEFAULT_LOG_DIR: &str = "/tmp/";

/// Default business tag.
pub const DEFAULT_BUSINESS: &str = "default";

/// Settled logger configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Output directory; always empty or ending in exactly one `/`.
    pub log_dir: String,

    /// Business tag used when a call gives none, or when splitting is off.
    pub business: String,

    /// Records below this level are not written.
    pub min_level: Level,

    /// Write each business tag to its own pair of files.
    pub split_by_business: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: DEFAULT_LOG_DIR.to_string(),
            business: DEFAULT_BUSINESS.to_string(),
            min_level: Level::Debug,
            split_by_business: false,
        }
    }
}

/// A level given either as its numeric code or as its name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum LevelSetting {
    Code(i64),
    Name(String),
}

impl LevelSetting {
    pub fn resolve(&self) -> Option<Level> {
        match self {
            LevelSetting::Code(code) => Level::from_code(*code),
            LevelSetting::Name(name) => Level::from_name(name),
        }
    }
}

impl From<Level> for LevelSetting {
    fn from(level: Level) -> Self {
        LevelSetting::Code(i64::from(level.code()))
    }
}

/// Partial configuration merged over the current settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ConfigOptions {
    /// Output directory (`logDir`).
    #[serde(alias = "logDir")]
    pub log_dir: Option<String>,

    /// Default business tag (`yewu`).
    #[serde(alias = "yewu")]
    pub business: Option<String>,

    /// Minimum level, code or name (`level`).
    #[serde(alias = "level")]
    pub min_level: Option<LevelSetting>,

    /// Per-business file splitting (`multi`).
    #[serde(alias = "multi")]
    pub split_by_business: Option<bool>,
}

impl ConfigOptions {
    pub fn log_dir(mut self, dir: impl Into<String>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    pub fn business(mut self, business: impl Into<String>) -> Self {
        self.business = Some(business.into());
        self
    }

    pub fn min_level(mut self, level: impl Into<LevelSetting>) -> Self {
        self.min_level = Some(level.into());
        self
    }

    pub fn split_by_business(mut self, split: bool) -> Self {
        self.split_by_business = Some(split);
        self
    }
}
