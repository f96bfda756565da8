use deadpool::managed::{self, Metrics, Pool, RecycleResult};
use libsql::{Connection, Database, Error as LibsqlError};

/// Hands out libsql connections to the request handlers.
pub struct LibsqlManager {
    database: Database,
}

impl LibsqlManager {
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

impl managed::Manager for LibsqlManager {
    type Type = Connection;
    type Error = LibsqlError;

    async fn create(&self) -> Result<Connection, LibsqlError> {
        self.database.connect()
    }

    /// Ping recycled connections before they are handed out again.
    async fn recycle(&self, conn: &mut Connection, _: &Metrics) -> RecycleResult<LibsqlError> {
        conn.query("SELECT 1", ())
            .await?
            .next()
            .await?
            .ok_or(LibsqlError::QueryReturnedNoRows)?;
        Ok(())
    }
}

pub type LibsqlPool = Pool<LibsqlManager>;
