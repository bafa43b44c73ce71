pub mod accrual;
pub mod decimal;
pub mod deposit;
pub mod errors;
pub mod rates;
pub mod service;
pub mod store;
pub mod types;

// re-export key types
pub use accrual::AccrualEngine;
pub use decimal::{Money, Rate};
pub use deposit::FixedDeposit;
pub use errors::{DepositError, Result};
pub use rates::{rate_for_scheme, RateTable};
pub use service::{BookDepositRequest, DepositService};
pub use store::{DepositStore, InMemoryDepositStore, InMemoryUserDirectory, UserDirectory};
pub use types::{DepositId, DepositStatus, User, UserId};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
