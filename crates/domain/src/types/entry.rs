//! Time entry types
//!
//! A [`TimeEntry`] aggregates the four daily work-boundary punches for one
//! user on one calendar date. Timestamps are set exactly once under valid
//! sequencing and never edited afterwards; only the derived fields
//! (`total_hours`, `status`, `flags`) are recomputed on each new punch.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::ZERO_HOURS;

/// One of the four daily work-boundary actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PunchType {
    ClockIn,
    LunchOut,
    LunchIn,
    ClockOut,
}

impl PunchType {
    /// Stable identifier used in logs and storage columns.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ClockIn => "clockIn",
            Self::LunchOut => "lunchOut",
            Self::LunchIn => "lunchIn",
            Self::ClockOut => "clockOut",
        }
    }
}

impl std::fmt::Display for PunchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived entry state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    #[default]
    Incomplete,
    Complete,
    Flagged,
}

impl EntryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Incomplete => "incomplete",
            Self::Complete => "complete",
            Self::Flagged => "flagged",
        }
    }
}

impl std::str::FromStr for EntryStatus {
    type Err = crate::errors::ShiftClockError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "incomplete" => Ok(Self::Incomplete),
            "complete" => Ok(Self::Complete),
            "flagged" => Ok(Self::Flagged),
            other => Err(crate::errors::ShiftClockError::InvalidInput(format!(
                "unknown entry status: {other}"
            ))),
        }
    }
}

/// The aggregate record of all punches for one user on one calendar date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Calendar day, unique per user.
    pub date: NaiveDate,
    pub clock_in: Option<DateTime<Utc>>,
    pub lunch_out: Option<DateTime<Utc>>,
    pub lunch_in: Option<DateTime<Utc>>,
    pub clock_out: Option<DateTime<Utc>>,
    /// Derived net worked hours, one fractional digit.
    pub total_hours: String,
    pub status: EntryStatus,
    /// Machine-detected anomaly strings, ordered for human review.
    pub flags: Vec<String>,
    /// True once the owning payroll period enters its review window.
    pub is_locked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TimeEntry {
    /// Read the recorded instant for a punch type, if any.
    pub fn punch(&self, punch_type: PunchType) -> Option<DateTime<Utc>> {
        match punch_type {
            PunchType::ClockIn => self.clock_in,
            PunchType::LunchOut => self.lunch_out,
            PunchType::LunchIn => self.lunch_in,
            PunchType::ClockOut => self.clock_out,
        }
    }

    /// Whether the punch type has already been recorded.
    pub fn has_punch(&self, punch_type: PunchType) -> bool {
        self.punch(punch_type).is_some()
    }
}

/// Defaults for lazily creating a day's entry on first punch-or-view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTimeEntry {
    pub user_id: Uuid,
    pub date: NaiveDate,
}

impl NewTimeEntry {
    pub fn new(user_id: Uuid, date: NaiveDate) -> Self {
        Self { user_id, date }
    }

    /// Materialize the default entry record the storage layer persists.
    pub fn into_entry(self, id: Uuid, now: DateTime<Utc>) -> TimeEntry {
        TimeEntry {
            id,
            user_id: self.user_id,
            date: self.date,
            clock_in: None,
            lunch_out: None,
            lunch_in: None,
            clock_out: None,
            total_hours: ZERO_HOURS.to_string(),
            status: EntryStatus::Incomplete,
            flags: Vec::new(),
            is_locked: false,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update applied after a successful punch.
///
/// Punch timestamps only ever move from `None` to `Some`; the derived fields
/// replace their previous values wholesale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntryChanges {
    pub clock_in: Option<DateTime<Utc>>,
    pub lunch_out: Option<DateTime<Utc>>,
    pub lunch_in: Option<DateTime<Utc>>,
    pub clock_out: Option<DateTime<Utc>>,
    pub total_hours: Option<String>,
    pub status: Option<EntryStatus>,
    pub flags: Option<Vec<String>>,
    pub is_locked: Option<bool>,
}

impl TimeEntryChanges {
    /// Record the instant for the given punch type.
    pub fn set_punch(&mut self, punch_type: PunchType, at: DateTime<Utc>) {
        match punch_type {
            PunchType::ClockIn => self.clock_in = Some(at),
            PunchType::LunchOut => self.lunch_out = Some(at),
            PunchType::LunchIn => self.lunch_in = Some(at),
            PunchType::ClockOut => self.clock_out = Some(at),
        }
    }

    /// Apply the changes to an entry, returning the updated record.
    pub fn apply(&self, mut entry: TimeEntry, now: DateTime<Utc>) -> TimeEntry {
        if let Some(at) = self.clock_in {
            entry.clock_in = Some(at);
        }
        if let Some(at) = self.lunch_out {
            entry.lunch_out = Some(at);
        }
        if let Some(at) = self.lunch_in {
            entry.lunch_in = Some(at);
        }
        if let Some(at) = self.clock_out {
            entry.clock_out = Some(at);
        }
        if let Some(hours) = &self.total_hours {
            entry.total_hours = hours.clone();
        }
        if let Some(status) = self.status {
            entry.status = status;
        }
        if let Some(flags) = &self.flags {
            entry.flags = flags.clone();
        }
        if let Some(locked) = self.is_locked {
            entry.is_locked = locked;
        }
        entry.updated_at = now;
        entry
    }
}

/// Punch request as received from the client, validated at the boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PunchRequest {
    #[serde(rename = "type")]
    pub punch_type: PunchType,
    /// Client-supplied instant. Not checked for monotonicity against
    /// previously recorded punches; inverted punches clamp to zero hours
    /// downstream.
    pub timestamp: DateTime<Utc>,
}
