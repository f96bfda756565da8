use anyhow::{Context, Result};
use async_trait::async_trait;
use url::Url;

use crate::models::Monitor;
use crate::monitoring::types::CheckResult;

/// Store interface the engine consumes.
///
/// The engine only ever needs two operations from the outside world: the
/// current enabled-monitor set going in, check results going out.
#[async_trait]
pub trait Store: Send + Sync {
    /// Fetch the monitors currently enabled for probing.
    async fn enabled_monitors(&self) -> Result<Vec<Monitor>>;

    /// Persist one check result.
    async fn create_check(&self, check: &CheckResult) -> Result<()>;
}

/// Store implementation backed by the HTTP store API.
pub struct HttpStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStore {
    pub fn new(base_url: &str) -> Result<Self> {
        Url::parse(base_url).with_context(|| format!("invalid store base URL: {base_url}"))?;

        Ok(Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }
}

#[async_trait]
impl Store for HttpStore {
    async fn enabled_monitors(&self) -> Result<Vec<Monitor>> {
        let response = self
            .client
            .get(self.endpoint("public/monitors"))
            .send()
            .await
            .context("monitor fetch failed")?
            .error_for_status()
            .context("monitor fetch was rejected")?;

        response.json().await.context("malformed monitor list")
    }

    async fn create_check(&self, check: &CheckResult) -> Result<()> {
        self.client
            .post(self.endpoint("checks"))
            .json(check)
            .send()
            .await
            .context("check delivery failed")?
            .error_for_status()
            .context("check delivery was rejected")?;

        Ok(())
    }
}
