//! Payroll service - period summaries

use std::sync::Arc;

use shiftclock_domain::{EntryStatus, PayrollSummary, Result, TimeEntry};
use uuid::Uuid;

use super::ports::PayrollPeriodRepository;
use crate::timesheet::ports::TimeEntryRepository;

/// Payroll service
pub struct PayrollService {
    periods: Arc<dyn PayrollPeriodRepository>,
    entries: Arc<dyn TimeEntryRepository>,
}

impl PayrollService {
    /// Create a new payroll service
    pub fn new(
        periods: Arc<dyn PayrollPeriodRepository>,
        entries: Arc<dyn TimeEntryRepository>,
    ) -> Self {
        Self { periods, entries }
    }

    /// Summary of the active period for one user: entries, summed hours,
    /// and days worked (entries with status `complete`).
    pub async fn current_summary(&self, user_id: Uuid) -> Result<Option<PayrollSummary>> {
        let Some(period) = self.periods.current_period().await? else {
            return Ok(None);
        };

        let entries =
            self.entries.entries_in_range(user_id, period.start_date, period.end_date).await?;
        let total_hours = sum_hours(&entries);
        let days_worked =
            entries.iter().filter(|entry| entry.status == EntryStatus::Complete).count();

        Ok(Some(PayrollSummary { period, entries, total_hours, days_worked: Some(days_worked) }))
    }

    /// Summary of the period under review, if any. Absence is not an error.
    pub async fn previous_summary(&self, user_id: Uuid) -> Result<Option<PayrollSummary>> {
        let Some(period) = self.periods.previous_period().await? else {
            return Ok(None);
        };

        let entries =
            self.entries.entries_in_range(user_id, period.start_date, period.end_date).await?;
        let total_hours = sum_hours(&entries);

        Ok(Some(PayrollSummary { period, entries, total_hours, days_worked: None }))
    }
}

/// Sum entry hours, one fractional digit. Unparseable stored values count as
/// zero rather than failing the whole summary.
fn sum_hours(entries: &[TimeEntry]) -> String {
    let total: f64 =
        entries.iter().map(|entry| entry.total_hours.parse::<f64>().unwrap_or(0.0)).sum();
    format!("{total:.1}")
}
