//! Request identity subsystem.
//!
//! # Data Flow
//! ```text
//! RequestInfo (explicit, query string, or CGI env)
//!     → identity.rs (correlation id + time/memory baselines)
//!     → RequestContext (created once per Logger, immutable)
//!     → read by every record the Logger renders
//! ```

pub mod identity;
pub mod probe;
pub mod request;

pub use identity::RequestContext;
pub use probe::current_time_micros;
pub use request::RequestInfo;
