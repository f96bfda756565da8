use std::sync::Arc;

use tracing::warn;

use super::types::CheckResult;
use crate::store::Store;

/// Hands probe outcomes to the store.
///
/// Delivery is one attempt per result. A failed delivery is logged and the
/// result dropped; the engine does not queue or retry samples.
pub struct Reporter {
    store: Arc<dyn Store>,
}

impl Reporter {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub async fn report(&self, result: &CheckResult) {
        if let Err(error) = self.store.create_check(result).await {
            warn!(monitor_id = result.monitor_id, "Failed to deliver check result: {error:#}");
        }
    }
}
