//! Severity levels and the file tier they map to.

use std::fmt;
use std::str::FromStr;

/// Record severity. Discriminants are the wire codes written by callers.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Debug = 100,
    Info = 200,
    Notice = 250,
    Warning = 300,
    Error = 400,
    Critical = 500,
    Alert = 550,
    Emergency = 600,
}

impl Level {
    /// Every level, ordered by increasing severity.
    pub const ALL: [Level; 8] = [
        Level::Debug,
        Level::Info,
        Level::Notice,
        Level::Warning,
        Level::Error,
        Level::Critical,
        Level::Alert,
        Level::Emergency,
    ];

    pub fn code(self) -> u16 {
        self as u16
    }

    pub fn name(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Notice => "NOTICE",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
            Level::Alert => "ALERT",
            Level::Emergency => "EMERGENCY",
        }
    }

    /// Look up a level by numeric code.
    pub fn from_code(code: i64) -> Option<Level> {
        Self::ALL.into_iter().find(|l| i64::from(l.code()) == code)
    }

    /// Look up a level by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Level> {
        let upper = name.trim().to_ascii_uppercase();
        Self::ALL.into_iter().find(|l| l.name() == upper)
    }

    /// File bucket this level is appended to.
    pub fn tier(self) -> Tier {
        if self >= Level::Error {
            Tier::Error
        } else {
            Tier::Info
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string does not name a level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLevel(pub String);

impl fmt::Display for UnknownLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown level name: {}", self.0)
    }
}

impl std::error::Error for UnknownLevel {}

impl FromStr for Level {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::from_name(s).ok_or_else(|| UnknownLevel(s.to_string()))
    }
}

/// Coarse file bucket: everything at ERROR or above goes to the `ERROR` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Info,
    Error,
}

impl Tier {
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Info => "INFO",
            Tier::Error => "ERROR",
        }
    }
}
