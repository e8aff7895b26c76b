//! Timesheet service - core business logic

use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};
use shiftclock_domain::constants::RECENT_ENTRIES_LIMIT;
use shiftclock_domain::{
    NewTimeEntry, PunchRequest, PunchType, Result, ShiftClockError, TimeEntry, TimeEntryChanges,
};
use tracing::info;
use uuid::Uuid;

use super::ports::TimeEntryRepository;
use crate::punch::{calculate_hours, derive_status, detect_missing_punches, validate_sequence};

/// Timesheet service
///
/// Orchestrates one punch atomically within a handler invocation:
/// get-or-create today's entry, lock check, sequence validation, timestamp
/// application, hours recomputation, missing-punch detection, status
/// derivation, persistence.
pub struct TimesheetService {
    entries: Arc<dyn TimeEntryRepository>,
}

impl TimesheetService {
    /// Create a new timesheet service
    pub fn new(entries: Arc<dyn TimeEntryRepository>) -> Self {
        Self { entries }
    }

    /// Today's entry for the user, lazily created on first punch-or-view.
    pub async fn today_entry(&self, user_id: Uuid) -> Result<TimeEntry> {
        self.entry_for_date(user_id, Local::now().date_naive()).await
    }

    /// The entry for a specific user-day, lazily created.
    pub async fn entry_for_date(&self, user_id: Uuid, date: NaiveDate) -> Result<TimeEntry> {
        match self.entries.get_entry(user_id, date).await? {
            Some(entry) => Ok(entry),
            None => self.entries.create_entry(NewTimeEntry::new(user_id, date)).await,
        }
    }

    /// Record a punch against today's entry using the caller's wall clock.
    pub async fn record_punch(&self, user_id: Uuid, request: PunchRequest) -> Result<TimeEntry> {
        self.record_punch_at(user_id, request, Local::now().naive_local()).await
    }

    /// Record a punch with an explicit local "now".
    ///
    /// Split out from [`record_punch`](Self::record_punch) so the
    /// missing-punch cutoff is deterministic under test.
    pub async fn record_punch_at(
        &self,
        user_id: Uuid,
        request: PunchRequest,
        now_local: NaiveDateTime,
    ) -> Result<TimeEntry> {
        let entry = self.entry_for_date(user_id, now_local.date()).await?;

        // Locked entries reject every punch type before sequence validation.
        if entry.is_locked {
            return Err(ShiftClockError::LockedPeriod);
        }

        let violations = validate_sequence(&entry, request.punch_type);
        if let Some(first) = violations.into_iter().next() {
            return Err(ShiftClockError::SequenceViolation(first));
        }

        let mut changes = TimeEntryChanges::default();
        changes.set_punch(request.punch_type, request.timestamp);

        // Preview of the entry as it will look after this punch; derived
        // fields are computed against it and persisted alongside.
        let updated = changes.apply(entry.clone(), Utc::now());

        if request.punch_type == PunchType::ClockOut || entry.clock_out.is_some() {
            changes.total_hours = Some(calculate_hours(
                updated.clock_in,
                updated.clock_out,
                updated.lunch_out,
                updated.lunch_in,
            ));
        }

        let flags = detect_missing_punches(&updated, now_local);
        changes.status = Some(derive_status(&updated, &flags));
        changes.flags = Some(flags);

        info!(
            user_id = %user_id,
            punch = %request.punch_type,
            date = %entry.date,
            "recording punch"
        );

        self.entries.update_entry(entry.id, changes).await
    }

    /// Latest entries for the user, most recent first.
    pub async fn recent_entries(&self, user_id: Uuid) -> Result<Vec<TimeEntry>> {
        let mut entries = self.entries.entries_for_user(user_id).await?;
        entries.truncate(RECENT_ENTRIES_LIMIT);
        Ok(entries)
    }

    /// Live "worked so far" hours for today's entry.
    pub async fn worked_hours_today(&self, user_id: Uuid, now: DateTime<Utc>) -> Result<String> {
        let entry = self.today_entry(user_id).await?;
        Ok(crate::punch::worked_hours_so_far(&entry, now))
    }
}
