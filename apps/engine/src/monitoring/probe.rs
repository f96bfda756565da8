use std::time::{Duration, Instant};

use anyhow::Result;
use reqwest::Method;
use tracing::debug;

use super::expect::status_matches;
use super::types::CheckResult;
use crate::models::Monitor;

/// Executes individual probes.
///
/// One pooled client is shared by every probe in a cycle; the client is
/// only read, so concurrent probes need no synchronization. Per-monitor
/// timeouts are applied per request rather than on the client.
pub struct Prober {
    client: reqwest::Client,
}

impl Prober {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("upwatch-engine/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }

    /// Probe one monitor and classify the outcome.
    ///
    /// This never returns an error: a timeout, connect failure, DNS failure
    /// or protocol error all terminate in a `CheckResult` with `ok == false`
    /// and a populated `error_reason`, so one broken monitor cannot abort
    /// the rest of the cycle.
    pub async fn probe(&self, monitor: &Monitor) -> CheckResult {
        let method = parse_method(&monitor.method);
        let timeout = Duration::from_millis(monitor.timeout_ms);
        debug!(monitor = %monitor.name, url = %monitor.url, "Probing");

        let start = Instant::now();
        let outcome =
            self.client.request(method, monitor.url.as_str()).timeout(timeout).send().await;
        let latency_ms = round2(start.elapsed().as_secs_f64() * 1000.0);

        match outcome {
            Ok(response) => {
                let status_code = response.status().as_u16();
                let ok = status_matches(status_code, &monitor.expected_statuses);
                CheckResult::response(monitor.id, status_code, ok, latency_ms)
            }
            Err(error) => CheckResult::failure(monitor.id, &error.to_string(), latency_ms),
        }
    }
}

/// Unknown verbs degrade to GET; a typo in the configured method should
/// still produce a classifiable probe.
fn parse_method(method: &str) -> Method {
    Method::from_bytes(method.to_ascii_uppercase().as_bytes()).unwrap_or(Method::GET)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
