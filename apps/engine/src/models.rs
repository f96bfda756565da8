use serde::Deserialize;

/// Monitor snapshot fetched from the store at the start of a cycle.
///
/// The engine never mutates a monitor; it only reads the snapshot to decide
/// how to probe. Fields the store may omit fall back to the same defaults
/// the store applies on creation.
#[derive(Debug, Clone, Deserialize)]
pub struct Monitor {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    pub url: String,
    #[serde(default = "default_method")]
    pub method: String,
    /// Intended per-monitor cadence. Stored and carried through, but the
    /// poll loop currently runs every monitor on one shared interval.
    #[serde(default = "default_interval_sec")]
    pub interval_sec: u64,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_expected_statuses")]
    pub expected_statuses: String,
    #[serde(default = "default_enabled")]
    pub is_enabled: bool,
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
