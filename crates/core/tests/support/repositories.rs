//! Mock repository implementations for testing
//!
//! Provides in-memory mocks for the core repository ports, enabling
//! deterministic unit tests without database dependencies.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use parking_lot::Mutex;
use shiftclock_core::payroll::ports::PayrollPeriodRepository;
use shiftclock_core::timesheet::ports::TimeEntryRepository;
use shiftclock_domain::{
    NewPayrollPeriod, NewTimeEntry, PayrollPeriod, PeriodStatus, Result as DomainResult,
    ShiftClockError, TimeEntry, TimeEntryChanges,
};
use uuid::Uuid;

/// In-memory mock for `TimeEntryRepository`.
///
/// Stores entries behind a mutex and mirrors the ordering contract of the
/// real repositories (descending by date).
#[derive(Default)]
pub struct MockTimeEntryRepository {
    entries: Mutex<Vec<TimeEntry>>,
}

impl MockTimeEntryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience helper for seeding a single entry into the mock.
    pub fn with_entry(self, entry: TimeEntry) -> Self {
        self.entries.lock().push(entry);
        self
    }

    pub fn entry_count(&self) -> usize {
        self.entries.lock().len()
    }
}

#[async_trait]
impl TimeEntryRepository for MockTimeEntryRepository {
    async fn get_entry(&self, user_id: Uuid, date: NaiveDate) -> DomainResult<Option<TimeEntry>> {
        Ok(self
            .entries
            .lock()
            .iter()
            .find(|entry| entry.user_id == user_id && entry.date == date)
            .cloned())
    }

    async fn create_entry(&self, defaults: NewTimeEntry) -> DomainResult<TimeEntry> {
        let entry = defaults.into_entry(Uuid::new_v4(), Utc::now());
        self.entries.lock().push(entry.clone());
        Ok(entry)
    }

    async fn update_entry(&self, id: Uuid, changes: TimeEntryChanges) -> DomainResult<TimeEntry> {
        let mut entries = self.entries.lock();
        let slot = entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or_else(|| ShiftClockError::NotFound(format!("time entry {id}")))?;
        *slot = changes.apply(slot.clone(), Utc::now());
        Ok(slot.clone())
    }

    async fn entries_for_user(&self, user_id: Uuid) -> DomainResult<Vec<TimeEntry>> {
        let mut entries: Vec<TimeEntry> =
            self.entries.lock().iter().filter(|entry| entry.user_id == user_id).cloned().collect();
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(entries)
    }

    async fn entries_in_range(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DomainResult<Vec<TimeEntry>> {
        let mut entries: Vec<TimeEntry> = self
            .entries
            .lock()
            .iter()
            .filter(|entry| entry.user_id == user_id && entry.date >= start && entry.date <= end)
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(entries)
    }
}

/// In-memory mock for `PayrollPeriodRepository`.
#[derive(Default)]
pub struct MockPayrollPeriodRepository {
    periods: Mutex<Vec<PayrollPeriod>>,
}

impl MockPayrollPeriodRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience helper for seeding a single period into the mock.
    pub fn with_period(self, period: PayrollPeriod) -> Self {
        self.periods.lock().push(period);
        self
    }
}

#[async_trait]
impl PayrollPeriodRepository for MockPayrollPeriodRepository {
    async fn current_period(&self) -> DomainResult<Option<PayrollPeriod>> {
        Ok(self
            .periods
            .lock()
            .iter()
            .find(|period| period.status == PeriodStatus::Active)
            .cloned())
    }

    async fn previous_period(&self) -> DomainResult<Option<PayrollPeriod>> {
        Ok(self
            .periods
            .lock()
            .iter()
            .find(|period| period.status == PeriodStatus::Review)
            .cloned())
    }

    async fn create_period(&self, period: NewPayrollPeriod) -> DomainResult<PayrollPeriod> {
        let created = PayrollPeriod {
            id: Uuid::new_v4(),
            start_date: period.start_date,
            end_date: period.end_date,
            status: period.status,
            reserve_start_date: period.reserve_start_date,
            reserve_end_date: period.reserve_end_date,
        };
        self.periods.lock().push(created.clone());
        Ok(created)
    }

    async fn update_period(
        &self,
        id: Uuid,
        status: PeriodStatus,
        reserve: Option<(NaiveDate, NaiveDate)>,
    ) -> DomainResult<PayrollPeriod> {
        let mut periods = self.periods.lock();
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
