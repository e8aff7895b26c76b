//! In-memory storage.
//!
//! The degraded-mode backend selected when no database is configured or the
//! startup probe fails, and the backend integration tests run against. Data
//! lives for the process lifetime only. Observable behavior (ordering,
//! uniqueness, lazy defaults) matches the PostgreSQL repositories.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use parking_lot::RwLock;
use shiftclock_core::payroll::ports::PayrollPeriodRepository;
use shiftclock_core::timesheet::ports::{TimeEntryRepository, UserRepository};
use shiftclock_domain::{
    NewPayrollPeriod, NewTimeEntry, NewUser, PayrollPeriod, PeriodStatus, Result, ShiftClockError,
    TimeEntry, TimeEntryChanges, User,
};
use uuid::Uuid;

/// In-memory implementation of every storage port.
#[derive(Default)]
pub struct MemoryStorage {
    users: RwLock<Vec<User>>,
    entries: RwLock<Vec<TimeEntry>>,
    periods: RwLock<Vec<PayrollPeriod>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryStorage {
    async fn get_user(&self, id: Uuid) -> Result<Option<User>> {
        Ok(self.users.read().iter().find(|user| user.id == id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        Ok(self.users.read().iter().find(|user| user.username == username).cloned())
    }

    async fn create_user(&self, user: &NewUser, password_hash: &str) -> Result<User> {
        let mut users = self.users.write();
        if users
            .iter()
            .any(|existing| existing.username == user.username)
        {
            return Err(ShiftClockError::Database("unique constraint violation".into()));
        }
        if users.iter().any(|existing| existing.employee_id == user.employee_id) {
            return Err(ShiftClockError::Database("unique constraint violation".into()));
        }

        let created = User {
            id: Uuid::new_v4(),
            username: user.username.clone(),
            password_hash: password_hash.to_string(),
            name: user.name.clone(),
            employee_id: user.employee_id.clone(),
        };
        users.push(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl TimeEntryRepository for MemoryStorage {
    async fn get_entry(&self, user_id: Uuid, date: NaiveDate) -> Result<Option<TimeEntry>> {
        Ok(self
            .entries
            .read()
            .iter()
            .find(|entry| entry.user_id == user_id && entry.date == date)
            .cloned())
    }

    async fn create_entry(&self, defaults: NewTimeEntry) -> Result<TimeEntry> {
        let mut entries = self.entries.write();
        if entries
            .iter()
            .any(|entry| entry.user_id == defaults.user_id && entry.date == defaults.date)
        {
            return Err(ShiftClockError::Database("unique constraint violation".into()));
        }

        let entry = defaults.into_entry(Uuid::new_v4(), Utc::now());
        entries.push(entry.clone());
        Ok(entry)
    }

    async fn update_entry(&self, id: Uuid, changes: TimeEntryChanges) -> Result<TimeEntry> {
        let mut entries = self.entries.write();
        let slot = entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or_else(|| ShiftClockError::NotFound(format!("time entry {id}")))?;
        *slot = changes.apply(slot.clone(), Utc::now());
        Ok(slot.clone())
    }

    async fn entries_for_user(&self, user_id: Uuid) -> Result<Vec<TimeEntry>> {
        let mut entries: Vec<TimeEntry> =
            self.entries.read().iter().filter(|entry| entry.user_id == user_id).cloned().collect();
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(entries)
    }

    async fn entries_in_range(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<TimeEntry>> {
        let mut entries: Vec<TimeEntry> = self
            .entries
            .read()
            .iter()
            .filter(|entry| entry.user_id == user_id && entry.date >= start && entry.date <= end)
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(entries)
    }
}

#[async_trait]
impl PayrollPeriodRepository for MemoryStorage {
    async fn current_period(&self) -> Result<Option<PayrollPeriod>> {
        Ok(self
            .periods
            .read()
            .iter()
            .find(|period| period.status == PeriodStatus::Active)
            .cloned())
    }

    async fn previous_period(&self) -> Result<Option<PayrollPeriod>> {
        Ok(self
            .periods
            .read()
            .iter()
            .find(|period| period.status == PeriodStatus::Review)
            .cloned())
    }

    async fn create_period(&self, period: NewPayrollPeriod) -> Result<PayrollPeriod> {
        let created = PayrollPeriod {
            id: Uuid::new_v4(),
            start_date: period.start_date,
            end_date: period.end_date,
            status: period.status,
            reserve_start_date: period.reserve_start_date,
            reserve_end_date: period.reserve_end_date,
        };
        self.periods.write().push(created.clone());
        Ok(created)
    }

    async fn update_period(
        &self,
        id: Uuid,
        status: PeriodStatus,
        reserve: Option<(NaiveDate, NaiveDate)>,
    ) -> Result<PayrollPeriod> {
        let mut periods = self.periods.write();
        let slot = periods
            .iter_mut()
            .find(|period| period.id == id)
            .ok_or_else(|| ShiftClockError::NotFound(format!("payroll period {id}")))?;
        slot.status = status;
        if let Some((start, end)) = reserve {
            slot.reserve_start_date = Some(start);
            slot.reserve_end_date = Some(end);
        }
        Ok(slot.clone())
    }
}
