//! Leveled file logger with per-request correlation ids.
//!
//! Records are rendered as single space-separated lines and appended to
//! `{dir}{business}_INFO.log` or `{dir}{business}_ERROR.log` depending on
//! severity.
//!
//! ```no_run
//! use tierlog::{configure, Caller, ConfigOptions, Logger, RequestInfo};
//!
//! let config = configure(ConfigOptions::default().log_dir("/var/log/app"));
//! let logger = Logger::new(config, RequestInfo::from_cgi_env());
//! logger.info("order accepted", &Caller::here(), "shop")?;
//! # Ok::<(), tierlog::LogError>(())
//! ```

pub mod config;
pub mod context;
pub mod logging;
pub mod observability;

pub use config::{configure, ConfigOptions, LogConfig};
pub use context::{current_time_micros, RequestContext, RequestInfo};
pub use logging::{install, instance, Caller, Level, LogError, LogResult, Logger, WriteOutcome};
