//! PostgreSQL-backed payroll period repository.

use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use shiftclock_core::payroll::ports::PayrollPeriodRepository;
use shiftclock_domain::{NewPayrollPeriod, PayrollPeriod, PeriodStatus, Result, ShiftClockError};
use tokio_postgres::Row;
use uuid::Uuid;

use super::postgres::PgDatabase;
use crate::errors::InfraError;

const PERIOD_COLUMNS: &str =
    "id, start_date, end_date, status, reserve_start_date, reserve_end_date";

/// PostgreSQL-backed payroll period repository.
pub struct PgPayrollPeriodRepository {
    db: Arc<PgDatabase>,
}

impl PgPayrollPeriodRepository {
    /// Construct a repository backed by the shared database manager.
    pub fn new(db: Arc<PgDatabase>) -> Self {
        Self { db }
    }

    async fn period_by_status(&self, status: PeriodStatus) -> Result<Option<PayrollPeriod>> {
        let row = self
            .db
            .client()
            .query_opt(
                &format!("SELECT {PERIOD_COLUMNS} FROM payroll_periods WHERE status = $1"),
                &[&status.as_str()],
            )
            .await
            .map_err(map_pg_error)?;

        row.as_ref().map(row_to_period).transpose()
    }
}

#[async_trait]
impl PayrollPeriodRepository for PgPayrollPeriodRepository {
    async fn current_period(&self) -> Result<Option<PayrollPeriod>> {
        self.period_by_status(PeriodStatus::Active).await
    }

    async fn previous_period(&self) -> Result<Option<PayrollPeriod>> {
        self.period_by_status(PeriodStatus::Review).await
    }

    async fn create_period(&self, period: NewPayrollPeriod) -> Result<PayrollPeriod> {
        let id = Uuid::new_v4();
        self.db
            .client()
            .execute(
                "INSERT INTO payroll_periods (id, start_date, end_date, status, \
                 reserve_start_date, reserve_end_date) VALUES ($1, $2, $3, $4, $5, $6)",
                &[
                    &id.to_string(),
                    &period.start_date.to_string(),
                    &period.end_date.to_string(),
                    &period.status.as_str(),
                    &period.reserve_start_date.map(|d| d.to_string()),
                    &period.reserve_end_date.map(|d| d.to_string()),
                ],
            )
            .await
            .map_err(map_pg_error)?;

        Ok(PayrollPeriod {
            id,
            start_date: period.start_date,
            end_date: period.end_date,
            status: period.status,
            reserve_start_date: period.reserve_start_date,
            reserve_end_date: period.reserve_end_date,
        })
    }

    async fn update_period(
        &self,
        id: Uuid,
        status: PeriodStatus,
        reserve: Option<(NaiveDate, NaiveDate)>,
    ) -> Result<PayrollPeriod> {
        let (reserve_start, reserve_end) = match reserve {
            Some((start, end)) => (Some(start.to_string()), Some(end.to_string())),
            None => (None, None),
        };

        let row = self
            .db
            .client()
            .query_opt(
                &format!(
                    "UPDATE payroll_periods SET status = $2, \
                     reserve_start_date = COALESCE($3, reserve_start_date), \
                     reserve_end_date = COALESCE($4, reserve_end_date) \
                     WHERE id = $1 RETURNING {PERIOD_COLUMNS}"
                ),
                &[&id.to_string(), &status.as_str(), &reserve_start, &reserve_end],
            )
            .await
            .map_err(map_pg_error)?
            .ok_or_else(|| ShiftClockError::NotFound(format!("payroll period {id}")))?;

        row_to_period(&row)
    }
}

fn row_to_period(row: &Row) -> Result<PayrollPeriod> {
    let id: String = row.get("id");
    let start_date: String = row.get("start_date");
    let end_date: String = row.get("end_date");
    let status: String = row.get("status");
    let reserve_start: Option<String> = row.get("reserve_start_date");
    let reserve_end: Option<String> = row.get("reserve_end_date");

    Ok(PayrollPeriod {
        id: Uuid::from_str(&id)
            .map_err(|e| ShiftClockError::Database(format!("invalid period id: {e}")))?,
        start_date: parse_date(&start_date)?,
        end_date: parse_date(&end_date)?,
        status: PeriodStatus::from_str(&status)?,
        reserve_start_date: reserve_start.as_deref().map(parse_date).transpose()?,
        reserve_end_date: reserve_end.as_deref().map(parse_date).transpose()?,
    })
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::from_str(value)
        .map_err(|e| ShiftClockError::Database(format!("invalid period date: {e}")))
}

fn map_pg_error(err: tokio_postgres::Error) -> ShiftClockError {
    ShiftClockError::from(InfraError::from(err))
}
