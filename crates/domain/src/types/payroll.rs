//! Payroll period types
//!
//! A payroll period is a contiguous biweekly date range. At most one period
//! is active at a time; after its end date it moves to `review` (the reserve
//! week) and entries inside it are locked. Transitions are administrative,
//! not time-driven inside this service.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::TimeEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodStatus {
    Active,
    Review,
    Closed,
}

impl PeriodStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Review => "review",
            Self::Closed => "closed",
        }
    }
}

impl std::str::FromStr for PeriodStatus {
    type Err = crate::errors::ShiftClockError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "active" => Ok(Self::Active),
            "review" => Ok(Self::Review),
            "closed" => Ok(Self::Closed),
            other => Err(crate::errors::ShiftClockError::InvalidInput(format!(
                "unknown period status: {other}"
            ))),
        }
    }
}

/// A contiguous payroll date range.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollPeriod {
    pub id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: PeriodStatus,
    /// Start of the 7-day reserve window following `end_date`.
    pub reserve_start_date: Option<NaiveDate>,
    pub reserve_end_date: Option<NaiveDate>,
}

impl PayrollPeriod {
    /// Whether a calendar day falls inside this period (inclusive bounds).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

/// Payload for administrative period creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPayrollPeriod {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: PeriodStatus,
    pub reserve_start_date: Option<NaiveDate>,
    pub reserve_end_date: Option<NaiveDate>,
}

/// A period together with one user's entries and derived totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollSummary {
    pub period: PayrollPeriod,
    pub entries: Vec<TimeEntry>,
    /// Sum of entry hours, one fractional digit.
    pub total_hours: String,
    /// Count of entries with status `complete`. Only reported for the
    /// current period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_worked: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(start: &str, end: &str) -> PayrollPeriod {
        PayrollPeriod {
            id: Uuid::new_v4(),
            start_date: start.parse().unwrap(),
            end_date: end.parse().unwrap(),
            status: PeriodStatus::Active,
            reserve_start_date: None,
            reserve_end_date: None,
        }
    }

    #[test]
    fn contains_is_inclusive_on_both_bounds() {
        let p = period("2026-07-20", "2026-08-02");
        assert!(p.contains("2026-07-20".parse().unwrap()));
        assert!(p.contains("2026-08-02".parse().unwrap()));
        assert!(!p.contains("2026-08-03".parse().unwrap()));
    }
}
