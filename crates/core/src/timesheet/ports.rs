//! Port interfaces for timesheet storage
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations.

use async_trait::async_trait;
use chrono::NaiveDate;
use shiftclock_domain::{NewTimeEntry, NewUser, Result, TimeEntry, TimeEntryChanges, User};
use uuid::Uuid;

/// Trait for persisting and querying user accounts
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Look up a user by id
    async fn get_user(&self, id: Uuid) -> Result<Option<User>>;

    /// Look up a user by unique username
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Create a user. The repository stores `password_hash`, never the
    /// plaintext carried by `user`.
    async fn create_user(&self, user: &NewUser, password_hash: &str) -> Result<User>;
}

/// Trait for persisting and querying time entries
#[async_trait]
pub trait TimeEntryRepository: Send + Sync {
    /// Fetch the entry for one user-day, if it exists
    async fn get_entry(&self, user_id: Uuid, date: NaiveDate) -> Result<Option<TimeEntry>>;

    /// Create a day's entry from defaults (lazy creation on first
    /// punch-or-view)
    async fn create_entry(&self, defaults: NewTimeEntry) -> Result<TimeEntry>;

    /// Apply a partial update and return the updated entry
    async fn update_entry(&self, id: Uuid, changes: TimeEntryChanges) -> Result<TimeEntry>;

    /// All entries for a user, descending by date
    async fn entries_for_user(&self, user_id: Uuid) -> Result<Vec<TimeEntry>>;

    /// Entries for a user within an inclusive date range, descending by date
    async fn entries_in_range(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<TimeEntry>>;
}
