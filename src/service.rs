use chrono::NaiveDate;
use hourglass_rs::{SafeTimeProvider, TimeSource};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::accrual::AccrualEngine;
use crate::decimal::{Money, Rate};
use crate::deposit::FixedDeposit;
use crate::errors::{DepositError, Result};
use crate::rates::RateTable;
use crate::store::{DepositStore, UserDirectory};
use crate::types::{DepositStatus, UserId};

/// minimum principal accepted at the booking boundary
fn minimum_deposit() -> Money {
    Money::from_major(1000)
}

/// booking request as submitted by the client
///
/// `interest_rate`, `start_date`, and `maturity_date` are accepted into the
/// request but overridden during booking: the server is authoritative for
/// financial terms and always derives them from the scheme and its own
/// clock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookDepositRequest {
    pub user_id: UserId,
    pub amount: Money,
    pub scheme: String,
    pub tenure_months: u32,
    #[serde(default)]
    pub interest_rate: Option<Rate>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub maturity_date: Option<NaiveDate>,
}

impl BookDepositRequest {
    pub fn new(
        user_id: UserId,
        amount: Money,
        scheme: impl Into<String>,
        tenure_months: u32,
    ) -> Self {
        Self {
            user_id,
            amount,
            scheme: scheme.into(),
            tenure_months,
            interest_rate: None,
            start_date: None,
            maturity_date: None,
        }
    }

    /// boundary validation, run before any collaborator is consulted
    pub fn validate(&self) -> Result<()> {
        if self.amount < minimum_deposit() {
            return Err(DepositError::AmountBelowMinimum {
                minimum: minimum_deposit(),
                provided: self.amount,
            });
        }
        if self.tenure_months == 0 {
            return Err(DepositError::InvalidTenure {
                months: self.tenure_months,
            });
        }
        Ok(())
    }
}

/// orchestrates booking and retrieval against the external collaborators
pub struct DepositService<U, S> {
    users: U,
    deposits: S,
    rates: RateTable,
    engine: AccrualEngine,
}

impl<U: UserDirectory, S: DepositStore> DepositService<U, S> {
    pub fn new(users: U, deposits: S) -> Self {
        Self::with_rates(users, deposits, RateTable::default())
    }

    pub fn with_rates(users: U, deposits: S, rates: RateTable) -> Self {
        Self {
            users,
            deposits,
            rates,
            engine: AccrualEngine::new(),
        }
    }

    /// book a new fixed deposit
    ///
    /// Validates the request, confirms the owner exists, fixes the rate
    /// from the scheme and the dates from the provider's clock, and
    /// persists exactly one row. The stored accrued interest starts at the
    /// freshly computed figure, which on the booking day is zero.
    pub fn book_deposit(
        &self,
        request: &BookDepositRequest,
        time_provider: &SafeTimeProvider,
    ) -> Result<FixedDeposit> {
        request.validate()?;

        let user = self
            .users
            .find_user(request.user_id)?
            .ok_or(DepositError::UserNotFound {
                user_id: request.user_id,
            })?;

        let now = time_provider.now();
        let start_date = now.date_naive();

        let mut deposit = FixedDeposit {
            id: None,
            user_id: user.id,
            amount: request.amount,
            scheme: request.scheme.clone(),
            interest_rate: self.rates.rate_for(&request.scheme),
            tenure_months: request.tenure_months,
            start_date,
            maturity_date: FixedDeposit::maturity_for(start_date, request.tenure_months),
            status: DepositStatus::Active,
            broken_date: None,
            accrued_interest: Money::ZERO,
            created_at: now,
        };
        deposit.accrued_interest = self.engine.accrued_interest(&deposit, time_provider);

        debug!(
            "booking deposit: user {} scheme {:?} amount {} rate {}",
            user.id, deposit.scheme, deposit.amount, deposit.interest_rate
        );

        self.deposits.save(deposit)
    }

    /// book a new fixed deposit with system time
    pub fn book_deposit_now(&self, request: &BookDepositRequest) -> Result<FixedDeposit> {
        let time = SafeTimeProvider::new(TimeSource::System);
        self.book_deposit(request, &time)
    }

    /// all deposits owned by a user, accrued interest freshly recomputed
    ///
    /// The persisted accrued value is discarded and replaced on every call.
    /// A user with no deposits (including a nonexistent user) yields an
    /// empty collection, not an error.
    pub fn deposits_for_user(
        &self,
        user_id: UserId,
        time_provider: &SafeTimeProvider,
    ) -> Result<Vec<FixedDeposit>> {
        let mut deposits = self.deposits.find_all_by_user(user_id)?;

        for deposit in &mut deposits {
            deposit.accrued_interest = self.engine.accrued_interest(deposit, time_provider);
        }

        debug!("retrieved {} deposits for user {}", deposits.len(), user_id);

        Ok(deposits)
    }

    /// all deposits owned by a user, recomputed with system time
    pub fn deposits_for_user_now(&self, user_id: UserId) -> Result<Vec<FixedDeposit>> {
        let time = SafeTimeProvider::new(TimeSource::System);
        self.deposits_for_user(user_id, &time)
    }
}
