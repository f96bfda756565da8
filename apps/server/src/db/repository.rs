use anyhow::Result;
use async_trait::async_trait;
use libsql::params;

use super::models::{Check, Monitor, NewCheck, NewMonitor, now_unix};
use super::pool::LibsqlPool;

/// Database trait for abstracting storage operations
#[async_trait]
pub trait Database: Send + Sync {
    /// Create a monitor and return the stored row
    async fn create_monitor(&self, monitor: &NewMonitor) -> Result<Monitor>;

    /// Get all monitors, newest first
    async fn list_monitors(&self) -> Result<Vec<Monitor>>;

    /// Get all enabled monitors
    async fn list_enabled_monitors(&self) -> Result<Vec<Monitor>>;

    /// Get a monitor by id
    async fn get_monitor(&self, id: i64) -> Result<Option<Monitor>>;

    /// Record a check outcome and return the stored row
    async fn create_check(&self, check: &NewCheck) -> Result<Check>;

    /// Get recent checks for a monitor, newest first
    async fn list_checks(&self, monitor_id: i64, limit: usize) -> Result<Vec<Check>>;
}

/// LibSQL database implementation
pub struct DatabaseImpl {
    pool: LibsqlPool,
}

impl DatabaseImpl {
    /// Create a new database instance from a pool
    pub fn new_from_pool(pool: LibsqlPool) -> Self {
        Self { pool }
    }

    /// Get a connection from the pool
    async fn get_conn(&self) -> Result<deadpool::managed::Object<super::pool::LibsqlManager>> {
        Ok(self.pool.get().await?)
    }
}

const MONITOR_COLUMNS: &str =
    "id, name, url, method, interval_sec, timeout_ms, expected_statuses, is_enabled, created_at";
const CHECK_COLUMNS: &str = "id, monitor_id, ts, status_code, latency_ms, ok, error_reason";

fn monitor_from_row(row: &libsql::Row) -> Result<Monitor> {
    Ok(Monitor {
        id: row.get(0)?,
        name: row.get(1)?,
        url: row.get(2)?,
        method: row.get(3)?,
        interval_sec: row.get::<i64>(4)? as u64,
        timeout_ms: row.get::<i64>(5)? as u64,
        expected_statuses: row.get(6)?,
        is_enabled: row.get::<i64>(7)? != 0,
        created_at: row.get(8)?,
    })
}

fn check_from_row(row: &libsql::Row) -> Result<Check> {
    Ok(Check {
        id: row.get(0)?,
        monitor_id: row.get(1)?,
        ts: row.get(2)?,
        status_code: row.get::<Option<i64>>(3)?.map(|v| v as u16),
        latency_ms: row.get(4)?,
        ok: row.get::<i64>(5)? != 0,
        error_reason: row.get(6)?,
    })
}

#[async_trait]
impl Database for DatabaseImpl {
    async fn create_monitor(&self, monitor: &NewMonitor) -> Result<Monitor> {
        let conn = self.get_conn().await?;
        let created_at = now_unix();

        conn.execute(
            "INSERT INTO monitors (name, url, method, interval_sec, timeout_ms, expected_statuses, is_enabled, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                monitor.name.clone(),
                monitor.url.clone(),
                monitor.method.clone(),
                monitor.interval_sec as i64,
                monitor.timeout_ms as i64,
                monitor.expected_statuses.clone(),
                if monitor.is_enabled { 1 } else { 0 },
                created_at
            ],
        )
        .await?;

        Ok(Monitor {
            id: conn.last_insert_rowid(),
            name: monitor.name.clone(),
            url: monitor.url.clone(),
            method: monitor.method.clone(),
            interval_sec: monitor.interval_sec,
            timeout_ms: monitor.timeout_ms,
            expected_statuses: monitor.expected_statuses.clone(),
            is_enabled: monitor.is_enabled,
            created_at,
        })
    }

    async fn list_monitors(&self) -> Result<Vec<Monitor>> {
        let conn = self.get_conn().await?;
        let mut stmt = conn
            .prepare(&format!("SELECT {MONITOR_COLUMNS} FROM monitors ORDER BY id DESC"))
            .await?;

        let mut rows = stmt.query(()).await?;
        let mut monitors = Vec::new();
        while let Some(row) = rows.next().await? {
            monitors.push(monitor_from_row(&row)?);
        }

        Ok(monitors)
    }

    async fn list_enabled_monitors(&self) -> Result<Vec<Monitor>> {
        let conn = self.get_conn().await?;
        let mut stmt = conn
            .prepare(&format!("SELECT {MONITOR_COLUMNS} FROM monitors WHERE is_enabled = 1"))
            .await?;

        let mut rows = stmt.query(()).await?;
        let mut monitors = Vec::new();
        while let Some(row) = rows.next().await? {
            monitors.push(monitor_from_row(&row)?);
        }

        Ok(monitors)
    }

    async fn get_monitor(&self, id: i64) -> Result<Option<Monitor>> {
        let conn = self.get_conn().await?;
        let mut stmt =
            conn.prepare(&format!("SELECT {MONITOR_COLUMNS} FROM monitors WHERE id = ?")).await?;

        let mut rows = stmt.query(params![id]).await?;
        match rows.next().await? {
            Some(row) => Ok(Some(monitor_from_row(&row)?)),
            None => Ok(None),
        }
    }

    async fn create_check(&self, check: &NewCheck) -> Result<Check> {
        let conn = self.get_conn().await?;
        let ts = now_unix();

        conn.execute(
            "INSERT INTO checks (monitor_id, ts, status_code, latency_ms, ok, error_reason) VALUES (?, ?, ?, ?, ?, ?)",
            params![
                check.monitor_id,
                ts,
                check.status_code.map(|v| v as i64),
                check.latency_ms,
                if check.ok { 1 } else { 0 },
                check.error_reason.clone()
            ],
        )
        .await?;

        Ok(Check {
            id: conn.last_insert_rowid(),
            monitor_id: check.monitor_id,
            ts,
            status_code: check.status_code,
            latency_ms: check.latency_ms,
            ok: check.ok,
            error_reason: check.error_reason.clone(),
        })
    }

    async fn list_checks(&self, monitor_id: i64, limit: usize) -> Result<Vec<Check>> {
        let conn = self.get_conn().await?;
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {CHECK_COLUMNS} FROM checks WHERE monitor_id = ? ORDER BY ts DESC, id DESC LIMIT ?"
            ))
            .await?;

        let mut rows = stmt.query(params![monitor_id, limit as i64]).await?;
        let mut checks = Vec::new();
        while let Some(row) = rows.next().await? {
            checks.push(check_from_row(&row)?);
        }

        Ok(checks)
    }
}
