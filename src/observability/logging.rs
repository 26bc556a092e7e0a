//! Diagnostics for the logger itself.
//!
//! # Responsibilities
//! - Initialize the `tracing` subscriber the binary reports through
//! - Keep library diagnostics (config corrections, write failures) off the
//!   log files being written
//!
//! # Design Decisions
//! - `RUST_LOG` wins when set; otherwise the given default filter applies
//! - Diagnostics go to stderr so stdout stays clean for scripting

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "tierlog=info";

/// Install a stderr `fmt` subscriber. Safe to call more than once; only the
/// first call installs anything.
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
