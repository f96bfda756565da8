use std::time::SystemTime;

use serde::Serialize;

/// Error descriptions longer than this are cut before reporting.
const MAX_ERROR_CHARS: usize = 300;

/// Result of one probe against one monitor.
///
/// Exactly one of two shapes exists: a response outcome (`status_code`
/// present, `ok` reflecting the expected-status match, no `error_reason`)
/// or a transport failure (`status_code` absent, `ok == false`,
/// `error_reason` present). The constructors below are the only way these
/// are built.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    /// Id of the monitor that was probed
    pub monitor_id: i64,

    /// When the probe concluded. The store assigns the persisted timestamp
    /// itself, so this is not part of the report body.
    #[serde(skip)]
    pub timestamp: SystemTime,

    /// Observed HTTP status, absent when no response was received
    pub status_code: Option<u16>,

    /// Wall-clock duration of the attempt, in milliseconds (2 dp)
    pub latency_ms: f64,

    /// Whether a response was received and its status matched the spec
    pub ok: bool,

    /// Transport failure description, absent for any received response
    pub error_reason: Option<String>,
}

impl CheckResult {
    /// A response was received; `ok` carries the expected-status verdict.
    pub fn response(monitor_id: i64, status_code: u16, ok: bool, latency_ms: f64) -> Self {
        Self {
            monitor_id,
            timestamp: SystemTime::now(),
            status_code: Some(status_code),
            latency_ms,
            ok,
            error_reason: None,
        }
    }

    /// The probe failed before a classifiable response arrived.
    pub fn failure(monitor_id: i64, reason: &str, latency_ms: f64) -> Self {
        Self {
            monitor_id,
            timestamp: SystemTime::now(),
            status_code: None,
            latency_ms,
            ok: false,
            error_reason: Some(truncate_reason(reason)),
        }
    }
}

fn truncate_reason(reason: &str) -> String {
    reason.chars().take(MAX_ERROR_CHARS).collect()
}
