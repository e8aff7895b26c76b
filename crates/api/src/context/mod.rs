//! Application context - dependency injection container

use std::sync::Arc;

use shiftclock_core::{PayrollService, TimesheetService, UserRepository};
use shiftclock_domain::{Config, Result};
use shiftclock_infra::database::{self, Storage, StorageBackend};
use shiftclock_infra::{seed, SessionManager};
use tracing::info;

/// Type alias for user repository port trait object
type DynUserRepository = dyn UserRepository + 'static;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    /// Outcome of the one-time startup storage probe.
    pub storage_backend: StorageBackend,
    pub users: Arc<DynUserRepository>,
    pub sessions: Arc<SessionManager>,
    pub timesheet_service: Arc<TimesheetService>,
    pub payroll_service: Arc<PayrollService>,
}

impl AppContext {
    /// Construct the context for a running service: probe storage once,
    /// seed when configured, wire the services.
    pub async fn new(config: Config) -> Result<Self> {
        let storage = database::connect(&config.database).await;

        if config.seed.enabled {
            seed::ensure_seed_data(&storage).await?;
        }

        info!(backend = %storage.backend, "application context initialised");
        Ok(Self::from_storage(config, storage))
    }

    /// Wire services over an already-selected storage backend.
    ///
    /// Split out of [`new`](Self::new) so tests can inject in-memory storage
    /// directly.
    pub fn from_storage(config: Config, storage: Storage) -> Self {
        let timesheet_service = Arc::new(TimesheetService::new(Arc::clone(&storage.entries)));
        let payroll_service = Arc::new(PayrollService::new(
            Arc::clone(&storage.periods),
            Arc::clone(&storage.entries),
        ));

        Self {
            config,
            storage_backend: storage.backend,
            users: storage.users,
            sessions: Arc::new(SessionManager::new()),
            timesheet_service,
            payroll_service,
        }
    }
}
