use chrono::NaiveDate;
use hourglass_rs::{SafeTimeProvider, TimeSource};
use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};
use crate::deposit::FixedDeposit;
use crate::types::DepositStatus;

/// days per year for simple daily interest (actual/365, fixed by product)
const YEAR_BASIS: u32 = 365;

/// engine for computing accrued simple daily interest on a deposit
///
/// Interest is recomputed from first principles on every read: there is no
/// background accrual job, and the reported figure is always consistent
/// with "now" however long the deposit has been dormant.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccrualEngine;

impl AccrualEngine {
    pub fn new() -> Self {
        Self
    }

    /// date on which accrual stops, by lifecycle status
    ///
    /// A broken deposit missing its broken date falls back to today; the
    /// anomaly is masked rather than surfaced.
    pub fn accrual_cutoff(
        &self,
        deposit: &FixedDeposit,
        time_provider: &SafeTimeProvider,
    ) -> NaiveDate {
        let today = time_provider.now().date_naive();

        match deposit.status {
            DepositStatus::Active => today,
            DepositStatus::Broken => deposit.broken_date.unwrap_or(today),
            DepositStatus::Matured => deposit.maturity_date,
        }
    }

    /// simple daily interest on `amount` between `start` and `cutoff`
    ///
    /// Whole-day count; a cutoff before the start short-circuits to zero.
    /// The multiply chain stays in full decimal precision and rounds
    /// half-up to 2 places only at the end, then clamps to zero.
    pub fn accrued_between(
        &self,
        amount: Money,
        annual_rate: Rate,
        start: NaiveDate,
        cutoff: NaiveDate,
    ) -> Money {
        let days = (cutoff - start).num_days();
        if days < 0 {
            return Money::ZERO;
        }

        let accrued = amount.as_decimal()
            * annual_rate.as_decimal()
            * Decimal::from(days)
            / Decimal::from(YEAR_BASIS);

        Money::from_decimal(accrued).round_display().max(Money::ZERO)
    }

    /// accrued interest on a deposit as of the provider's clock
    pub fn accrued_interest(
        &self,
        deposit: &FixedDeposit,
        time_provider: &SafeTimeProvider,
    ) -> Money {
        let cutoff = self.accrual_cutoff(deposit, time_provider);
        self.accrued_between(
            deposit.amount,
            deposit.interest_rate,
            deposit.start_date,
            cutoff,
        )
    }

    /// accrued interest with system time
    pub fn accrued_interest_now(&self, deposit: &FixedDeposit) -> Money {
        let time = SafeTimeProvider::new(TimeSource::System);
        self.accrued_interest(deposit, &time)
    }
}
