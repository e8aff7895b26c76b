//! PostgreSQL connection manager.
//!
//! Owns the single shared `tokio_postgres` client. The connection task is
//! spawned onto the runtime and lives for the process lifetime; repository
//! structs borrow the manager through an `Arc`.

use std::time::Duration;

use shiftclock_domain::{Result, ShiftClockError};
use tokio_postgres::{Client, NoTls};
use tracing::{error, info};

use crate::errors::InfraError;

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Database manager that wraps a shared [`Client`].
pub struct PgDatabase {
    client: Client,
}

impl PgDatabase {
    /// Connect and verify the database responds within the timeout.
    ///
    /// The probe runs `SELECT 1` so an unreachable or unhealthy server is
    /// detected here, at startup, rather than on the first request.
    pub async fn connect(url: &str, timeout: Duration) -> Result<Self> {
        let connect = tokio_postgres::connect(url, NoTls);
        let (client, connection) = tokio::time::timeout(timeout, connect)
            .await
            .map_err(|_| {
                ShiftClockError::Database(format!(
                    "connection attempt timed out after {}s",
                    timeout.as_secs()
                ))
            })?
            .map_err(|err| ShiftClockError::from(InfraError::from(err)))?;

        tokio::spawn(async move {
            if let Err(err) = connection.await {
                error!(error = %err, "postgres connection terminated");
            }
        });

        let db = Self { client };
        db.health_check().await?;
        info!("postgres connection established");
        Ok(db)
    }

    /// Borrow the underlying client.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Ensure the full schema exists on the current database.
    pub async fn run_migrations(&self) -> Result<()> {
        self.client
            .batch_execute(SCHEMA_SQL)
            .await
            .map_err(|err| ShiftClockError::from(InfraError::from(err)))?;
        Ok(())
    }

    /// Perform a health check to verify database connectivity.
    pub async fn health_check(&self) -> Result<()> {
        self.client
            .query_one("SELECT 1", &[])
            .await
            .map_err(|err| ShiftClockError::from(InfraError::from(err)))?;
        Ok(())
    }
}
