//! Timesheet service workflow tests over mock repositories.
//!
//! Every test pins the local "now" explicitly so the missing-punch cutoff
//! never depends on the wall clock of the machine running the suite.

mod support;

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};
use shiftclock_domain::{
    EntryStatus, NewTimeEntry, PunchRequest, PunchType, ShiftClockError, TimeEntry,
};
use shiftclock_core::TimesheetService;
use support::repositories::MockTimeEntryRepository;
use uuid::Uuid;

const DAY: &str = "2026-08-03";

fn date() -> NaiveDate {
    DAY.parse().unwrap()
}

fn local(hour: u32, minute: u32) -> NaiveDateTime {
    date().and_hms_opt(hour, minute, 0).unwrap()
}

fn punch(punch_type: PunchType, hour: u32, minute: u32) -> PunchRequest {
    PunchRequest {
        punch_type,
        timestamp: Utc.with_ymd_and_hms(2026, 8, 3, hour, minute, 0).unwrap(),
    }
}

fn service() -> (TimesheetService, Arc<MockTimeEntryRepository>) {
    let repo = Arc::new(MockTimeEntryRepository::new());
    let entries: Arc<dyn shiftclock_core::TimeEntryRepository> = repo.clone();
    (TimesheetService::new(entries), repo)
}

fn locked_entry(user_id: Uuid) -> TimeEntry {
    let mut entry = NewTimeEntry::new(user_id, date())
        .into_entry(Uuid::new_v4(), Utc.with_ymd_and_hms(2026, 8, 3, 7, 0, 0).unwrap());
    entry.is_locked = true;
    entry
}

#[tokio::test]
async fn entry_is_created_lazily_on_first_view() {
    let (service, repo) = service();
    let user_id = Uuid::new_v4();

    let entry = service.entry_for_date(user_id, date()).await.unwrap();
    assert_eq!(entry.total_hours, "0.0");
    assert_eq!(entry.status, EntryStatus::Incomplete);
    assert_eq!(repo.entry_count(), 1);

    // A second view reuses the record instead of creating a duplicate.
    let again = service.entry_for_date(user_id, date()).await.unwrap();
    assert_eq!(again.id, entry.id);
    assert_eq!(repo.entry_count(), 1);
}

#[tokio::test]
async fn full_day_computes_hours_and_completes() {
    let (service, _repo) = service();
    let user_id = Uuid::new_v4();

    service.record_punch_at(user_id, punch(PunchType::ClockIn, 9, 0), local(9, 0)).await.unwrap();
    service
        .record_punch_at(user_id, punch(PunchType::LunchOut, 12, 0), local(12, 0))
        .await
        .unwrap();
    service
        .record_punch_at(user_id, punch(PunchType::LunchIn, 12, 30), local(12, 30))
        .await
        .unwrap();
    let entry = service
        .record_punch_at(user_id, punch(PunchType::ClockOut, 17, 0), local(17, 0))
        .await
        .unwrap();

    assert_eq!(entry.total_hours, "7.5");
    assert_eq!(entry.status, EntryStatus::Complete);
    assert!(entry.flags.is_empty());
}

#[tokio::test]
async fn duplicate_clock_in_is_rejected_without_mutation() {
    let (service, _repo) = service();
    let user_id = Uuid::new_v4();

    let first = service
        .record_punch_at(user_id, punch(PunchType::ClockIn, 9, 0), local(9, 0))
        .await
        .unwrap();

    let err = service
        .record_punch_at(user_id, punch(PunchType::ClockIn, 9, 30), local(9, 30))
        .await
        .unwrap_err();
    match err {
        ShiftClockError::SequenceViolation(message) => {
            assert_eq!(message, "Already clocked in");
        }
        other => panic!("expected sequence violation, got {other:?}"),
    }

    // The original clock-in instant survives the rejected punch.
    let entry = service.entry_for_date(user_id, date()).await.unwrap();
    assert_eq!(entry.clock_in, first.clock_in);
}

#[tokio::test]
async fn clock_out_rejected_while_break_is_open() {
    let (service, _repo) = service();
    let user_id = Uuid::new_v4();

    service.record_punch_at(user_id, punch(PunchType::ClockIn, 9, 0), local(9, 0)).await.unwrap();
    service
        .record_punch_at(user_id, punch(PunchType::LunchOut, 12, 0), local(12, 0))
        .await
        .unwrap();

    let err = service
        .record_punch_at(user_id, punch(PunchType::ClockOut, 17, 0), local(17, 0))
        .await
        .unwrap_err();
    match err {
        ShiftClockError::SequenceViolation(message) => {
            assert_eq!(message, "Must end break before clocking out");
        }
        other => panic!("expected sequence violation, got {other:?}"),
    }
}

#[tokio::test]
async fn locked_entry_rejects_every_punch_type() {
    let user_id = Uuid::new_v4();
    let repo = Arc::new(MockTimeEntryRepository::new().with_entry(locked_entry(user_id)));
    let entries: Arc<dyn shiftclock_core::TimeEntryRepository> = repo.clone();
    let service = TimesheetService::new(entries);

    for punch_type in
        [PunchType::ClockIn, PunchType::LunchOut, PunchType::LunchIn, PunchType::ClockOut]
    {
        let err = service
            .record_punch_at(user_id, punch(punch_type, 9, 0), local(9, 0))
            .await
            .unwrap_err();
        assert!(
            matches!(err, ShiftClockError::LockedPeriod),
            "{punch_type} should be rejected on a locked entry"
        );
    }
}

#[tokio::test]
async fn same_day_clock_in_before_cutoff_stays_incomplete() {
    let (service, _repo) = service();
    let user_id = Uuid::new_v4();

    let entry = service
        .record_punch_at(user_id, punch(PunchType::ClockIn, 9, 0), local(10, 0))
        .await
        .unwrap();

    assert_eq!(entry.status, EntryStatus::Incomplete);
    assert!(entry.flags.is_empty());
}

#[tokio::test]
async fn same_day_clock_in_after_cutoff_is_flagged() {
    let (service, _repo) = service();
    let user_id = Uuid::new_v4();

    let entry = service
        .record_punch_at(user_id, punch(PunchType::ClockIn, 9, 0), local(19, 0))
        .await
        .unwrap();

    assert_eq!(entry.status, EntryStatus::Flagged);
    assert_eq!(entry.flags, vec!["Missing clock out time"]);
}

#[tokio::test]
async fn recent_entries_are_capped_and_newest_first() {
    let (service, _repo) = service();
    let user_id = Uuid::new_v4();

    for day in 1..=12 {
        let date = NaiveDate::from_ymd_opt(2026, 7, day).unwrap();
        service.entry_for_date(user_id, date).await.unwrap();
    }

    let recent = service.recent_entries(user_id).await.unwrap();
    assert_eq!(recent.len(), 10);
    assert_eq!(recent[0].date, NaiveDate::from_ymd_opt(2026, 7, 12).unwrap());
    assert!(recent.windows(2).all(|pair| pair[0].date > pair[1].date));
}

#[tokio::test]
async fn worked_hours_today_reflects_open_entry() {
    let (service, _repo) = service();
    let user_id = Uuid::new_v4();

    // No entry yet: zero hours and the view lazily creates today's record.
    let hours = service.worked_hours_today(user_id, Utc::now()).await.unwrap();
    assert_eq!(hours, "0.0");
}
