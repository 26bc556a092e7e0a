//! Per-run identity: correlation id plus the time and memory baselines
//! every record is measured against.

use std::net::IpAddr;

use rand::Rng;

use crate::context::probe;
use crate::context::request::RequestInfo;

/// Identity and baselines captured once per logger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    correlation_id: String,
    start_time_micros: u64,
    start_memory_bytes: u64,
    hostname: String,
}

impl RequestContext {
    /// Capture baselines now and settle the correlation id.
    pub fn capture(info: &RequestInfo) -> Self {
        let start_time_micros = probe::current_time_micros();
        let correlation_id = match info.logid() {
            Some(id) => id.to_string(),
            None => synthesize_correlation_id(start_time_micros, info.client_addr()),
        };

        tracing::debug!(correlation_id = %correlation_id, "Request context created");

        Self {
            correlation_id,
            start_time_micros,
            start_memory_bytes: probe::memory_usage_bytes(),
            hostname: probe::hostname(),
        }
    }

    pub fn correlation_id(&self) -> &str {
        &self.correlation_id
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn start_time_micros(&self) -> u64 {
        self.start_time_micros
    }

    /// Microseconds since capture. Zero if the wall clock stepped back.
    pub fn elapsed_micros(&self) -> u64 {
        probe::current_time_micros().saturating_sub(self.start_time_micros)
    }

    /// Resident memory gained (or lost) since capture.
    pub fn memory_delta_bytes(&self) -> i64 {
        probe::memory_usage_bytes() as i64 - self.start_memory_bytes as i64
    }
}

/// Numeric form of an address: IPv4 as `u32`, IPv6 as `u128`.
/// Unparsable input yields an empty string.
pub fn numeric_addr(addr: &str) -> String {
    match addr.trim().parse::<IpAddr>() {
        Ok(IpAddr::V4(v4)) => u32::from(v4).to_string(),
        Ok(IpAddr::V6(v6)) => u128::from(v6).to_string(),
        Err(_) => String::new(),
    }
}

/// Timestamp, numeric client address and a four-digit random suffix.
pub fn synthesize_correlation_id(now_micros: u64, client_addr: &str) -> String {
    let suffix: u16 = rand::thread_rng().gen_range(1000..=9999);
    format!("{}{}{}", now_micros, numeric_addr(client_addr), suffix)
}
