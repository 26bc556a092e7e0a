//! Observability subsystem.
//!
//! The crate's own diagnostics flow through `tracing`; the records it writes
//! for callers never do.

pub mod logging;

pub use logging::init_tracing;
