//! Ambient inputs of the request being logged.
//!
//! A web front end or CGI wrapper supplies the inbound `LOGID`, the client
//! address and the request method. Outside a request all three are absent
//! and the CLI defaults apply.

/// Name of the inbound parameter that seeds the correlation id.
pub const LOGID_PARAM: &str = "LOGID";

/// Client address used when none is known.
pub const DEFAULT_CLIENT_ADDR: &str = "127.0.0.1";

/// Request method used outside a network request.
pub const DEFAULT_METHOD: &str = "CLI";

/// Inputs read from the execution context. Empty values count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestInfo {
    logid: Option<String>,
    client_addr: Option<String>,
    method: Option<String>,
}

impl RequestInfo {
    /// No inbound request.
    pub fn cli() -> Self {
        Self::default()
    }

    pub fn with_logid(mut self, logid: impl Into<String>) -> Self {
        self.logid = non_empty(logid.into());
        self
    }

    pub fn with_client_addr(mut self, addr: impl Into<String>) -> Self {
        self.client_addr = non_empty(addr.into());
        self
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = non_empty(method.into());
        self
    }

    /// Take `LOGID` from a URL query string, if present.
    pub fn with_query(mut self, query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        if let Some((_, value)) = url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == LOGID_PARAM)
        {
            self.logid = non_empty(value.into_owned());
        }
        self
    }

    /// Read the CGI variables of the current process.
    pub fn from_cgi_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build from CGI-style variables. An explicit `LOGID` variable wins
    /// over one in `QUERY_STRING`.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut info = Self::cli();
        if let Some(query) = lookup("QUERY_STRING") {
            info = info.with_query(&query);
        }
        if let Some(logid) = lookup(LOGID_PARAM) {
            if !logid.trim().is_empty() {
                info = info.with_logid(logid);
            }
        }
        if let Some(addr) = lookup("REMOTE_ADDR") {
            info = info.with_client_addr(addr);
        }
        if let Some(method) = lookup("REQUEST_METHOD") {
            info = info.with_method(method);
        }
        info
    }

    /// Inbound correlation id, trimmed, if it is non-empty.
    pub fn logid(&self) -> Option<&str> {
        self.logid
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }

    pub fn client_addr(&self) -> &str {
        self.client_addr.as_deref().unwrap_or(DEFAULT_CLIENT_ADDR)
    }

    pub fn method(&self) -> &str {
        self.method.as_deref().unwrap_or(DEFAULT_METHOD)
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
