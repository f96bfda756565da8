use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Monitor model - a configured probe target
#[derive(Debug, Clone, Serialize)]
pub struct Monitor {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub method: String,
    pub interval_sec: u64,
    pub timeout_ms: u64,
    pub expected_statuses: String,
    pub is_enabled: bool,
    pub created_at: i64,
}

/// Request body for creating a monitor
#[derive(Debug, Clone, Deserialize)]
pub struct NewMonitor {
    pub name: String,
    pub url: String,
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default = "default_interval_sec")]
    pub interval_sec: u64,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_expected_statuses")]
    pub expected_statuses: String,
    #[serde(default = "default_enabled")]
    pub is_enabled: bool,
}

/// Check model - one recorded probe outcome, immutable once written
#[derive(Debug, Clone, Serialize)]
pub struct Check {
    pub id: i64,
    pub monitor_id: i64,
    pub ts: i64,
    pub status_code: Option<u16>,
    pub latency_ms: Option<f64>,
    pub ok: bool,
    pub error_reason: Option<String>,
}

/// Request body for recording a check
#[derive(Debug, Clone, Deserialize)]
pub struct NewCheck {
    pub monitor_id: i64,
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub latency_ms: Option<f64>,
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub error_reason: Option<String>,
}

/// Current time as unix seconds; row timestamps are stamped at insert.
pub fn now_unix() -> i64 {
    SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_secs() as i64
}

fn default_method() -> String {
    "GET".into()
}

fn default_interval_sec() -> u64 {
    60
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_expected_statuses() -> String {
    "200-399".into()
}

fn default_enabled() -> bool {
    true
}
