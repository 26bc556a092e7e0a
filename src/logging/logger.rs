//! The logger facade: level checks, record assembly, dispatch by name.

use std::sync::OnceLock;

use chrono::Local;

use crate::config::LogConfig;
use crate::context::{RequestContext, RequestInfo};
use crate::logging::error::{LogError, LogResult};
use crate::logging::record::{Caller, LogRecord};
use crate::logging::writer;
use crate::logging::Level;

/// What a successful call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// One line was appended.
    Written,
    /// The level is below the configured minimum; nothing was written.
    Filtered,
}

/// Writes leveled records for one run or request.
///
/// The request context (correlation id, start time, start memory) is created
/// on first use and fixed for the logger's lifetime. A `Logger` holds no open
/// files and is safe to share between threads.
#[derive(Debug)]
pub struct Logger {
    config: LogConfig,
    request: RequestInfo,
    context: OnceLock<RequestContext>,
}

impl Logger {
    pub fn new(config: LogConfig, request: RequestInfo) -> Self {
        Self {
            config,
            request,
            context: OnceLock::new(),
        }
    }

    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    pub fn request(&self) -> &RequestInfo {
        &self.request
    }

    /// Context for this run, created on first call.
    pub fn context(&self) -> &RequestContext {
        self.context
            .get_or_init(|| RequestContext::capture(&self.request))
    }

    /// Correlation id tagging every line this logger writes.
    pub fn correlation_id(&self) -> &str {
        self.context().correlation_id()
    }

    /// Write one record at `level`.
    pub fn write(
        &self,
        level: Level,
        message: &str,
        caller: &Caller,
        business: &str,
    ) -> LogResult<WriteOutcome> {
        if level < self.config.min_level {
            return Ok(WriteOutcome::Filtered);
        }

        self.append(level, message, caller, business)
    }

    /// Render and append without the minimum-level check. Fallback notices
    /// are written through here.
    fn append(
        &self,
        level: Level,
        message: &str,
        caller: &Caller,
        business: &str,
    ) -> LogResult<WriteOutcome> {
        let context = self.context();
        let record = LogRecord {
            timestamp: Local::now(),
            business: if business.is_empty() {
                self.config.business.as_str()
            } else {
                business
            },
            level,
            correlation_id: context.correlation_id(),
            host: context.hostname(),
            client_addr: self.request.client_addr(),
            method: self.request.method(),
            caller,
            elapsed_micros: context.elapsed_micros(),
            memory_delta_bytes: context.memory_delta_bytes(),
            message,
        };

        let path = writer::destination(&self.config, level, business);
        writer::append_line(&path, &record.render())?;
        Ok(WriteOutcome::Written)
    }

    /// Write one record at a numeric level.
    ///
    /// An unknown code writes a single ERROR notice in place of the message,
    /// whatever the minimum level, and returns [`LogError::InvalidLevel`].
    pub fn write_code(
        &self,
        code: i64,
        message: &str,
        caller: &Caller,
        business: &str,
    ) -> LogResult<WriteOutcome> {
        match Level::from_code(code) {
            Some(level) => self.write(level, message, caller, business),
            None => {
                let err = LogError::InvalidLevel(code);
                tracing::warn!(code, "Rejected record with invalid level");
                self.append(Level::Error, &err.to_string(), caller, business)?;
                Err(err)
            }
        }
    }

    /// Write a record at the level named `name`, ignoring case.
    ///
    /// `args` are positional: message, file, line, method, business. Missing
    /// or empty entries default to `""`, `"-"`, `"-"`, `"-"`, `""`. An unknown
    /// name writes an ERROR notice and returns [`LogError::UnknownLevelName`].
    pub fn dispatch(&self, name: &str, args: &[&str]) -> LogResult<WriteOutcome> {
        let arg = |i: usize| args.get(i).copied().filter(|a| !a.is_empty());
        let message = arg(0).unwrap_or("");
        let caller = Caller::new(
            arg(1).unwrap_or("-"),
            arg(2).unwrap_or("-"),
            arg(3).unwrap_or("-"),
        );
        let business = arg(4).unwrap_or("");

        match Level::from_name(name) {
            Some(level) => self.write(level, message, &caller, business),
            None => {
                let err = LogError::UnknownLevelName(name.to_string());
                tracing::warn!(level_name = %name, "Rejected record with unknown level name");
                self.append(Level::Error, &err.to_string(), &caller, business)?;
                Err(err)
            }
        }
    }
}

macro_rules! leveled {
    ($($fn_name:ident => $level:expr, $name:literal;)*) => {
        impl Logger {
            $(
                #[doc = concat!("Write one record at ", $name, ".")]
                pub fn $fn_name(
                    &self,
                    message: &str,
                    caller: &Caller,
                    business: &str,
                ) -> LogResult<WriteOutcome> {
                    self.write($level, message, caller, business)
                }
            )*
        }
    };
}

leveled! {
    debug => Level::Debug, "DEBUG";
    info => Level::Info, "INFO";
    notice => Level::Notice, "NOTICE";
    warning => Level::Warning, "WARNING";
    error => Level::Error, "ERROR";
    critical => Level::Critical, "CRITICAL";
    alert => Level::Alert, "ALERT";
    emergency => Level::Emergency, "EMERGENCY";
}

static INSTANCE: OnceLock<Logger> = OnceLock::new();

/// The process-wide logger.
///
/// The first call without a prior [`install`] builds one from the default
/// configuration and the CGI environment. Later calls return the same value.
pub fn instance() -> &'static Logger {
    INSTANCE.get_or_init(|| Logger::new(LogConfig::default(), RequestInfo::from_cgi_env()))
}

/// Install `logger` as the process-wide logger.
///
/// Fails if an instance already exists, including one created lazily by
/// [`instance`].
pub fn install(logger: Logger) -> LogResult<&'static Logger> {
    INSTANCE
        .set(logger)
        .map_err(|_| LogError::AlreadyInstalled)?;
    Ok(instance())
}
