use chrono::{DateTime, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{DepositError, Result};
use crate::types::{DepositId, DepositStatus, UserId};

/// a user's fixed deposit
///
/// `accrued_interest` is advisory: every read path recomputes it before
/// returning, so the stored figure is never treated as a source of truth.
/// `interest_rate` is fixed at booking time; later rate-table changes do
/// not affect existing deposits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedDeposit {
    /// store-assigned identifier, `None` until the first save
    pub id: Option<DepositId>,
    pub user_id: UserId,
    pub amount: Money,
    /// scheme name as submitted at booking
    pub scheme: String,
    pub interest_rate: Rate,
    pub tenure_months: u32,
    pub start_date: NaiveDate,
    pub maturity_date: NaiveDate,
    pub status: DepositStatus,
    /// set when the deposit is broken before maturity
    pub broken_date: Option<NaiveDate>,
    /// last computed accrued interest
    pub accrued_interest: Money,
    pub created_at: DateTime<Utc>,
}

impl FixedDeposit {
    /// maturity date for a deposit starting on `start_date`
    /// (calendar months, end-of-month clamped)
    pub fn maturity_for(start_date: NaiveDate, tenure_months: u32) -> NaiveDate {
        start_date + Months::new(tenure_months)
    }

    /// break the deposit before maturity; accrual freezes at `broken_date`
    pub fn mark_broken(&mut self, broken_date: NaiveDate) -> Result<()> {
        if self.status != DepositStatus::Active {
            return Err(DepositError::InvalidStatus {
                current: self.status,
                operation: "break",
            });
        }
        self.status = DepositStatus::Broken;
        self.broken_date = Some(broken_date);
        Ok(())
    }

    /// mark the deposit matured; accrual freezes at `maturity_date`
    pub fn mark_matured(&mut self) -> Result<()> {
        if self.status != DepositStatus::Active {
            return Err(DepositError::InvalidStatus {
                current: self.status,
                operation: "mature",
            });
        }
        self.status = DepositStatus::Matured;
        Ok(())
    }

    /// serialize to pretty-printed JSON
    pub fn json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
