use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// unique identifier for a fixed deposit, assigned by the store
pub type DepositId = Uuid;

/// unique identifier for a user in the external account subsystem
pub type UserId = Uuid;

/// minimal projection of the external user entity; only what the booking
/// workflow needs to confirm the owner exists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

/// fixed deposit lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DepositStatus {
    /// deposit is live and earning interest
    Active,
    /// deposit has reached its maturity date
    Matured,
    /// deposit was closed by the user before maturity
    Broken,
}
