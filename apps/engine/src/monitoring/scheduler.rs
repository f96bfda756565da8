use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tracing::{debug, error, info};

use super::probe::Prober;
use super::reporter::Reporter;
use super::types::CheckResult;
use crate::store::Store;

/// Drives the fetch → probe → report cycle.
///
/// The engine holds no state between cycles: every cycle re-fetches the
/// monitor set, probes each enabled monitor concurrently, waits for all
/// probes to finish, reports the results, and sleeps one fixed interval.
pub struct PollEngine {
    store: Arc<dyn Store>,
    prober: Prober,
    reporter: Reporter,
    interval: Duration,
}

impl PollEngine {
    pub fn new(store: Arc<dyn Store>, prober: Prober, interval: Duration) -> Self {
        let reporter = Reporter::new(store.clone());
        Self { store, prober, reporter, interval }
    }

    /// Run cycles until the process is terminated.
    pub async fn run(&self) {
        info!("Poll engine started (cycle interval: {:?})", self.interval);

        loop {
            self.run_cycle().await;
            // Single shared interval; per-monitor interval_sec is not
            // consulted yet.
            tokio::time::sleep(self.interval).await;
        }
    }

    /// Execute one cycle.
    ///
    /// A failed monitor fetch skips the whole cycle (zero probes) and is
    /// not retried until the next one. Probes are launched one per enabled
    /// monitor with no concurrency cap, and the cycle joins on all of them
    /// before reporting.
    pub async fn run_cycle(&self) {
        let monitors = match self.store.enabled_monitors().await {
            Ok(monitors) => monitors,
            Err(error) => {
                error!("Failed to fetch monitor set, skipping cycle: {error:#}");
                return;
            }
        };

        let probes = monitors
            .iter()
            .filter(|monitor| monitor.is_enabled)
            .map(|monitor| self.prober.probe(monitor));
        let results: Vec<CheckResult> = join_all(probes).await;

        debug!(probes = results.len(), "Cycle complete, reporting results");
        for result in &results {
            self.reporter.report(result).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use anyhow::{Result, anyhow};
    use async_trait::async_trait;

    use super::*;
    use crate::models::Monitor;

    struct MockStore {
        monitors: Vec<Monitor>,
        fail_fetch: bool,
        fail_delivery: bool,
        fetches: Mutex<usize>,
        delivered: Mutex<Vec<CheckResult>>,
        attempts: Mutex<usize>,
    }

    impl MockStore {
        fn with_monitors(monitors: Vec<Monitor>) -> Self {
            Self {
                monitors,
                fail_fetch: false,
                fail_delivery: false,
                fetches: Mutex::new(0),
                delivered: Mutex::new(Vec::new()),
                attempts: Mutex::new(0),
            }
        }
    }

    #[async_trait]
    impl Store for MockStore {
        async fn enabled_monitors(&self) -> Result<Vec<Monitor>> {
            *self.fetches.lock().unwrap() += 1;
            if self.fail_fetch {
                return Err(anyhow!("store unreachable"));
            }
            Ok(self.monitors.clone())
        }

        async fn create_check(&self, check: &CheckResult) -> Result<()> {
            *self.attempts.lock().unwrap() += 1;
            if self.fail_delivery {
                return Err(anyhow!("store unreachable"));
            }
            self.delivered.lock().unwrap().push(check.clone());
            Ok(())
        }
    }

    fn monitor(id: i64, enabled: bool) -> Monitor {
        Monitor {
            id,
            name: format!("monitor-{id}"),
            // Nothing listens on port 1; every probe completes as a
            // classified transport failure without leaving localhost.
            url: "http://127.0.0.1:1/".into(),
            method: "GET".into(),
            interval_sec: 60,
            timeout_ms: 1000,
            expected_statuses: "200-399".into(),
            is_enabled: enabled,
        }
    }

    fn engine(store: Arc<MockStore>) -> PollEngine {
        PollEngine::new(store, Prober::new().unwrap(), Duration::from_secs(60))
    }

    #[tokio::test]
    async fn test_cycle_reports_one_check_per_enabled_monitor() {
        let store =
            Arc::new(MockStore::with_monitors(vec![monitor(1, true), monitor(2, true), monitor(3, true)]));
        engine(store.clone()).run_cycle().await;

        let delivered = store.delivered.lock().unwrap();
        assert_eq!(delivered.len(), 3);
        let mut ids: Vec<i64> = delivered.iter().map(|check| check.monitor_id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(delivered.iter().all(|check| !check.ok && check.status_code.is_none()));
    }

    #[tokio::test]
    async fn test_disabled_monitors_are_not_probed() {
        let store = Arc::new(MockStore::with_monitors(vec![monitor(1, true), monitor(2, false)]));
        engine(store.clone()).run_cycle().await;

        let delivered = store.delivered.lock().unwrap();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].monitor_id, 1);
    }

    #[tokio::test]
    async fn test_fetch_failure_skips_the_cycle() {
        let mut mock = MockStore::with_monitors(vec![monitor(1, true)]);
        mock.fail_fetch = true;
        let store = Arc::new(mock);

        engine(store.clone()).run_cycle().await;

        assert_eq!(*store.fetches.lock().unwrap(), 1);
        assert_eq!(*store.attempts.lock().unwrap(), 0);
        assert!(store.delivered.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delivery_failures_do_not_stop_the_cycle() {
        let mut mock = MockStore::with_monitors(vec![monitor(1, true), monitor(2, true)]);
        mock.fail_delivery = true;
        let store = Arc::new(mock);

        engine(store.clone()).run_cycle().await;

        // Every result got its single delivery attempt; none survived.
        assert_eq!(*store.attempts.lock().unwrap(), 2);
        assert!(store.delivered.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_monitor_set_is_a_quiet_cycle() {
        let store = Arc::new(MockStore::with_monitors(Vec::new()));
        engine(store.clone()).run_cycle().await;

        assert_eq!(*store.attempts.lock().unwrap(), 0);
    }
}
