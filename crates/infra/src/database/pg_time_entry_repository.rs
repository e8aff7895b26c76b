//! PostgreSQL-backed time entry repository.
//!
//! Updates are read-modify-write: the partial change set is applied to the
//! freshly loaded row and the mutable columns are written back wholesale.
//! Two concurrent punches for the same user-day therefore race with
//! last-write-wins semantics, matching the documented concurrency model.

use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use shiftclock_core::timesheet::ports::TimeEntryRepository;
use shiftclock_domain::{
    EntryStatus, NewTimeEntry, Result, ShiftClockError, TimeEntry, TimeEntryChanges,
};
use tokio_postgres::Row;
use uuid::Uuid;

use super::postgres::PgDatabase;
use crate::errors::InfraError;

const ENTRY_COLUMNS: &str = "id, user_id, date, clock_in, lunch_out, lunch_in, clock_out, \
                             total_hours, status, flags, is_locked, created_at, updated_at";

/// PostgreSQL-backed time entry repository.
pub struct PgTimeEntryRepository {
    db: Arc<PgDatabase>,
}

impl PgTimeEntryRepository {
    /// Construct a repository backed by the shared database manager.
    pub fn new(db: Arc<PgDatabase>) -> Self {
        Self { db }
    }

    async fn fetch_by_id(&self, id: Uuid) -> Result<TimeEntry> {
        let row = self
            .db
            .client()
            .query_opt(
                &format!("SELECT {ENTRY_COLUMNS} FROM time_entries WHERE id = $1"),
                &[&id.to_string()],
            )
            .await
            .map_err(map_pg_error)?
            .ok_or_else(|| ShiftClockError::NotFound(format!("time entry {id}")))?;

        row_to_entry(&row)
    }
}

#[async_trait]
impl TimeEntryRepository for PgTimeEntryRepository {
    async fn get_entry(&self, user_id: Uuid, date: NaiveDate) -> Result<Option<TimeEntry>> {
        let row = self
            .db
            .client()
            .query_opt(
                &format!(
                    "SELECT {ENTRY_COLUMNS} FROM time_entries WHERE user_id = $1 AND date = $2"
                ),
                &[&user_id.to_string(), &date.to_string()],
            )
            .await
            .map_err(map_pg_error)?;

        row.as_ref().map(row_to_entry).transpose()
    }

    async fn create_entry(&self, defaults: NewTimeEntry) -> Result<TimeEntry> {
        let entry = defaults.into_entry(Uuid::new_v4(), Utc::now());

        self.db
            .client()
            .execute(
                "INSERT INTO time_entries (id, user_id, date, clock_in, lunch_out, lunch_in, \
                 clock_out, total_hours, status, flags, is_locked, created_at, updated_at)
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)",
                &[
                    &entry.id.to_string(),
                    &entry.user_id.to_string(),
                    &entry.date.to_string(),
                    &entry.clock_in,
                    &entry.lunch_out,
                    &entry.lunch_in,
                    &entry.clock_out,
                    &entry.total_hours,
                    &entry.status.as_str(),
                    &entry.flags,
                    &entry.is_locked,
                    &entry.created_at,
                    &entry.updated_at,
                ],
            )
            .await
            .map_err(map_pg_error)?;

        Ok(entry)
    }

    async fn update_entry(&self, id: Uuid, changes: TimeEntryChanges) -> Result<TimeEntry> {
        let current = self.fetch_by_id(id).await?;
        let updated = changes.apply(current, Utc::now());

        self.db
            .client()
            .execute(
                "UPDATE time_entries SET clock_in = $2, lunch_out = $3, lunch_in = $4, \
                 clock_out = $5, total_hours = $6, status = $7, flags = $8, is_locked = $9, \
                 updated_at = $10 WHERE id = $1",
                &[
                    &updated.id.to_string(),
                    &updated.clock_in,
                    &updated.lunch_out,
                    &updated.lunch_in,
                    &updated.clock_out,
                    &updated.total_hours,
                    &updated.status.as_str(),
                    &updated.flags,
                    &updated.is_locked,
                    &updated.updated_at,
                ],
            )
            .await
            .map_err(map_pg_error)?;

        Ok(updated)
    }

    async fn entries_for_user(&self, user_id: Uuid) -> Result<Vec<TimeEntry>> {
        let rows = self
            .db
            .client()
            .query(
                &format!(
                    "SELECT {ENTRY_COLUMNS} FROM time_entries WHERE user_id = $1 \
                     ORDER BY date DESC"
                ),
                &[&user_id.to_string()],
            )
            .await
            .map_err(map_pg_error)?;

        rows.iter().map(row_to_entry).collect()
    }

    async fn entries_in_range(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<TimeEntry>> {
        let rows = self
            .db
            .client()
            .query(
                &format!(
                    "SELECT {ENTRY_COLUMNS} FROM time_entries \
                     WHERE user_id = $1 AND date >= $2 AND date <= $3 ORDER BY date DESC"
                ),
                &[&user_id.to_string(), &start.to_string(), &end.to_string()],
            )
            .await
            .map_err(map_pg_error)?;

        rows.iter().map(row_to_entry).collect()
    }
}

fn row_to_entry(row: &Row) -> Result<TimeEntry> {
    let id: String = row.get("id");
    let user_id: String = row.get("user_id");
    let date: String = row.get("date");
    let status: String = row.get("status");

    Ok(TimeEntry {
        id: Uuid::from_str(&id)
            .map_err(|e| ShiftClockError::Database(format!("invalid entry id: {e}")))?,
        user_id: Uuid::from_str(&user_id)
            .map_err(|e| ShiftClockError::Database(format!("invalid entry user id: {e}")))?,
        date: NaiveDate::from_str(&date)
            .map_err(|e| ShiftClockError::Database(format!("invalid entry date: {e}")))?,
        clock_in: row.get::<_, Option<DateTime<Utc>>>("clock_in"),
        lunch_out: row.get::<_, Option<DateTime<Utc>>>("lunch_out"),
        lunch_in: row.get::<_, Option<DateTime<Utc>>>("lunch_in"),
        clock_out: row.get::<_, Option<DateTime<Utc>>>("clock_out"),
        total_hours: row.get("total_hours"),
        status: EntryStatus::from_str(&status)?,
        flags: row.get("flags"),
        is_locked: row.get("is_locked"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}

fn map_pg_error(err: tokio_postgres::Error) -> ShiftClockError {
    ShiftClockError::from(InfraError::from(err))
}
