//! Storage implementations and the startup backend selection.
//!
//! The fallback decision is made exactly once, here, at construction: the
//! probe outcome is carried as an explicit [`StorageBackend`] value on the
//! returned [`Storage`] rather than a process-wide mutable flag, and no
//! per-call fallback happens afterwards.

mod memory;
mod pg_payroll_repository;
mod pg_time_entry_repository;
mod pg_user_repository;
mod postgres;

use std::sync::Arc;
use std::time::Duration;

pub use memory::MemoryStorage;
pub use pg_payroll_repository::PgPayrollPeriodRepository;
pub use pg_time_entry_repository::PgTimeEntryRepository;
pub use pg_user_repository::PgUserRepository;
pub use postgres::PgDatabase;
use shiftclock_core::{PayrollPeriodRepository, TimeEntryRepository, UserRepository};
use shiftclock_domain::{DatabaseConfig, Result};
use tracing::{info, warn};

/// Which backend the startup probe selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::Memory => "memory",
        }
    }
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The storage collaborator handed to the application context.
pub struct Storage {
    pub backend: StorageBackend,
    pub users: Arc<dyn UserRepository>,
    pub entries: Arc<dyn TimeEntryRepository>,
    pub periods: Arc<dyn PayrollPeriodRepository>,
}

impl Storage {
    /// Storage over an established PostgreSQL connection.
    pub fn postgres(db: Arc<PgDatabase>) -> Self {
        Self {
            backend: StorageBackend::Postgres,
            users: Arc::new(PgUserRepository::new(Arc::clone(&db))),
            entries: Arc::new(PgTimeEntryRepository::new(Arc::clone(&db))),
            periods: Arc::new(PgPayrollPeriodRepository::new(db)),
        }
    }

    /// Storage over a fresh in-memory store.
    pub fn memory() -> Self {
        let store = Arc::new(MemoryStorage::new());
        Self {
            backend: StorageBackend::Memory,
            users: Arc::clone(&store) as Arc<dyn UserRepository>,
            entries: Arc::clone(&store) as Arc<dyn TimeEntryRepository>,
            periods: store as Arc<dyn PayrollPeriodRepository>,
        }
    }
}

/// Probe the configured database once and select the backend.
///
/// Any failure along the PostgreSQL path (connect, health check, migration)
/// degrades to in-memory storage with a warning; the service still comes up.
pub async fn connect(config: &DatabaseConfig) -> Storage {
    let Some(url) = &config.url else {
        info!("no database url configured, using in-memory storage");
        return Storage::memory();
    };

    match connect_postgres(url, Duration::from_secs(config.connect_timeout_seconds)).await {
        Ok(db) => {
            info!("storage backend selected: postgres");
            Storage::postgres(db)
        }
        Err(err) => {
            warn!(error = %err, "database connection failed, using in-memory storage");
            Storage::memory()
        }
    }
}

async fn connect_postgres(url: &str, timeout: Duration) -> Result<Arc<PgDatabase>> {
    let db = PgDatabase::connect(url, timeout).await?;
    db.run_migrations().await?;
    Ok(Arc::new(db))
}
