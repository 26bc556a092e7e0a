//! Leveled file logging.
//!
//! # Data Flow
//! ```text
//! Logger::{info, error, ..} / write / write_code / dispatch
//!     → level.rs (code or name → Level, Level → Tier)
//!     → record.rs (LogRecord rendered to one line)
//!     → writer.rs ({dir}{business}_{tier}.log, append and close)
//! ```
//!
//! # Design Decisions
//! - One open/append/close per record; nothing is buffered
//! - Bad levels are answered with an ERROR notice line and a typed error
//! - I/O failures are returned, never swallowed

pub mod error;
pub mod level;
pub mod logger;
pub mod record;
pub mod writer;

pub use error::{LogError, LogResult};
pub use level::{Level, Tier};
pub use logger::{install, instance, Logger, WriteOutcome};
pub use record::Caller;
