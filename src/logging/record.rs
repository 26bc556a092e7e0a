//! Record construction and line rendering.

use std::borrow::Cow;
use std::fmt::Write as _;
use std::panic::Location;

use chrono::{DateTime, Local};

use crate::logging::Level;

/// Placeholder for an unknown caller file, line or method.
pub const UNKNOWN_POSITION: &str = "-";

/// Where a record was emitted from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub file: String,
    pub line: String,
    pub method: String,
}

impl Default for Caller {
    fn default() -> Self {
        Self {
            file: UNKNOWN_POSITION.to_string(),
            line: UNKNOWN_POSITION.to_string(),
            method: UNKNOWN_POSITION.to_string(),
        }
    }
}

impl Caller {
    /// Empty parts fall back to `-`.
    pub fn new(file: impl Into<String>, line: impl ToString, method: impl Into<String>) -> Self {
        Self {
            file: or_unknown(file.into()),
            line: or_unknown(line.to_string()),
            method: or_unknown(method.into()),
        }
    }

    /// File and line of the calling code.
    #[track_caller]
    pub fn here() -> Self {
        let location = Location::caller();
        Self::new(location.file(), location.line(), UNKNOWN_POSITION)
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = or_unknown(method.into());
        self
    }
}

fn or_unknown(value: String) -> String {
    if value.is_empty() {
        UNKNOWN_POSITION.to_string()
    } else {
        value
    }
}

/// One log line before rendering. Built per call and discarded.
#[derive(Debug, Clone)]
pub struct LogRecord<'a> {
    pub timestamp: DateTime<Local>,
    pub business: &'a str,
    pub level: Level,
    pub correlation_id: &'a str,
    pub host: &'a str,
    pub client_addr: &'a str,
    pub method: &'a str,
    pub caller: &'a Caller,
    pub elapsed_micros: u64,
    pub memory_delta_bytes: i64,
    pub message: &'a str,
}

impl LogRecord<'_> {
    /// Render as one newline-terminated line, fields space-separated.
    ///
    /// Whitespace inside single-token fields becomes `_`, and line breaks in
    /// the message are escaped, so every record stays one line with fixed
    /// field positions.
    pub fn render(&self) -> String {
        let mut line = String::with_capacity(160 + self.message.len());
        let _ = write!(
            line,
            "[{}] {} {} {} {} {} {} {}:{} {} {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            token(self.business),
            self.level.name(),
            token(self.correlation_id),
            token(self.host),
            token(self.client_addr),
            token(self.method),
            token(&self.caller.file),
            token(&self.caller.line),
            token(&self.caller.method),
            format_millis(self.elapsed_micros),
            self.memory_delta_bytes,
            escape_message(self.message),
        );
        line.push('\n');
        line
    }
}

fn token(value: &str) -> Cow<'_, str> {
    if value.contains(char::is_whitespace) {
        Cow::Owned(value.replace(char::is_whitespace, "_"))
    } else {
        Cow::Borrowed(value)
    }
}

fn escape_message(message: &str) -> Cow<'_, str> {
    if message.contains(['\n', '\r']) {
        Cow::Owned(message.replace('\r', "\\r").replace('\n', "\\n"))
    } else {
        Cow::Borrowed(message)
    }
}

/// Microseconds as milliseconds with three decimals.
pub fn format_millis(micros: u64) -> String {
    format!("{}.{:03}", micros / 1000, micros % 1000)
}
