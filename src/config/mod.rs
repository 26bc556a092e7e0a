//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML) or ConfigOptions built in code
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks, every problem reported)
//!     → merge.rs (corrections applied over defaults)
//!     → LogConfig (settled, owned by a Logger)
//! ```
//!
//! # Design Decisions
//! - Configuration is settled once, before the first record is written
//! - All fields have defaults so an empty file is a valid config
//! - Invalid values are corrected, never rejected; corrections are logged

pub mod loader;
pub mod merge;
pub mod schema;
pub mod validation;

pub use merge::configure;
pub use schema::{ConfigOptions, LevelSetting, LogConfig};
pub use validation::ValidationError;
