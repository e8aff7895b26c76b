//! Idempotent startup seed data.
//!
//! Creates the admin account and the active biweekly payroll period when
//! they are absent, so a fresh deployment (or a degraded in-memory run) is
//! immediately usable.

use chrono::{Datelike, Duration, Local, NaiveDate};
use shiftclock_domain::constants::PAYROLL_PERIOD_DAYS;
use shiftclock_domain::{NewPayrollPeriod, NewUser, PeriodStatus, Result};
use tracing::info;

use crate::auth::hash_password;
use crate::database::Storage;

const SEED_USERNAME: &str = "admin";
const SEED_PASSWORD: &str = "admin123";

/// Ensure the admin user and an active payroll period exist.
pub async fn ensure_seed_data(storage: &Storage) -> Result<()> {
    seed_admin_user(storage).await?;
    seed_payroll_period(storage, Local::now().date_naive()).await?;
    Ok(())
}

async fn seed_admin_user(storage: &Storage) -> Result<()> {
    if storage.users.get_user_by_username(SEED_USERNAME).await?.is_some() {
        return Ok(());
    }

    let user = NewUser {
        username: SEED_USERNAME.to_string(),
        password: SEED_PASSWORD.to_string(),
        name: "Admin User".to_string(),
        employee_id: "EMP001".to_string(),
    };
    let password_hash = hash_password(SEED_PASSWORD)?;
    let created = storage.users.create_user(&user, &password_hash).await?;
    info!(username = %created.username, "created seed user");
    Ok(())
}

/// Seed the active period covering `today`: the most recent Monday through
/// thirteen days later.
pub async fn seed_payroll_period(storage: &Storage, today: NaiveDate) -> Result<()> {
    if storage.periods.current_period().await?.is_some() {
        return Ok(());
    }

    let days_since_monday = i64::from(today.weekday().num_days_from_monday());
    let start_date = today - Duration::days(days_since_monday);
    let end_date = start_date + Duration::days(PAYROLL_PERIOD_DAYS - 1);

    storage
        .periods
        .create_period(NewPayrollPeriod {
            start_date,
            end_date,
            status: PeriodStatus::Active,
            reserve_start_date: None,
            reserve_end_date: None,
        })
        .await?;
    info!(%start_date, %end_date, "created active payroll period");
    Ok(())
}
