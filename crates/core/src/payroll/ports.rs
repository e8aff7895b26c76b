//! Port interface for payroll period storage

use async_trait::async_trait;
use chrono::NaiveDate;
use shiftclock_domain::{NewPayrollPeriod, PayrollPeriod, PeriodStatus, Result};
use uuid::Uuid;

/// Trait for persisting and querying payroll periods
///
/// Period transitions (active -> review -> closed) are administrative
/// operations performed through `update_period`; nothing in this service
/// drives them on a clock.
#[async_trait]
pub trait PayrollPeriodRepository: Send + Sync {
    /// The single period with status `active`, if any
    async fn current_period(&self) -> Result<Option<PayrollPeriod>>;

    /// The period with status `review`, if any
    async fn previous_period(&self) -> Result<Option<PayrollPeriod>>;

    /// Administrative period creation (seed/admin action)
    async fn create_period(&self, period: NewPayrollPeriod) -> Result<PayrollPeriod>;

    /// Administrative status transition, optionally setting the reserve
    /// window
    async fn update_period(
        &self,
        id: Uuid,
        status: PeriodStatus,
        reserve: Option<(NaiveDate, NaiveDate)>,
    ) -> Result<PayrollPeriod>;
}
