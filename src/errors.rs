use thiserror::Error;

use crate::decimal::Money;
use crate::types::{DepositStatus, UserId};

#[derive(Error, Debug)]
pub enum DepositError {
    #[error("user not found: {user_id}")]
    UserNotFound {
        user_id: UserId,
    },

    #[error("invalid deposit amount: minimum {minimum}, provided {provided}")]
    AmountBelowMinimum {
        minimum: Money,
        provided: Money,
    },

    #[error("invalid tenure: {months} months")]
    InvalidTenure {
        months: u32,
    },

    #[error("cannot {operation} deposit: current status is {current:?}")]
    InvalidStatus {
        current: DepositStatus,
        operation: &'static str,
    },

    #[error("storage failure: {message}")]
    Storage {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, DepositError>;
