use std::collections::HashMap;
use std::sync::Mutex;

use uuid::Uuid;

use crate::deposit::FixedDeposit;
use crate::errors::{DepositError, Result};
use crate::types::{DepositId, User, UserId};

/// lookup into the external user-account subsystem
pub trait UserDirectory {
    fn find_user(&self, user_id: UserId) -> Result<Option<User>>;
}

/// persistence collaborator for fixed deposits
///
/// `save` assigns the store identifier on first write and returns the
/// stored row. `find_all_by_user` makes no ordering guarantee. Isolation
/// for concurrent writes is the implementor's responsibility.
pub trait DepositStore {
    fn save(&self, deposit: FixedDeposit) -> Result<FixedDeposit>;
    fn find_all_by_user(&self, user_id: UserId) -> Result<Vec<FixedDeposit>>;
}

impl<T: UserDirectory + ?Sized> UserDirectory for &T {
    fn find_user(&self, user_id: UserId) -> Result<Option<User>> {
        (**self).find_user(user_id)
    }
}

impl<T: DepositStore + ?Sized> DepositStore for &T {
    fn save(&self, deposit: FixedDeposit) -> Result<FixedDeposit> {
        (**self).save(deposit)
    }

    fn find_all_by_user(&self, user_id: UserId) -> Result<Vec<FixedDeposit>> {
        (**self).find_all_by_user(user_id)
    }
}

/// in-memory user directory for tests and demos
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    users: HashMap<UserId, User>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// register a user and return the stored record
    pub fn add_user(&mut self, name: impl Into<String>) -> User {
        let user = User {
            id: Uuid::new_v4(),
            name: name.into(),
        };
        self.users.insert(user.id, user.clone());
        user
    }
}

impl UserDirectory for InMemoryUserDirectory {
    fn find_user(&self, user_id: UserId) -> Result<Option<User>> {
        Ok(self.users.get(&user_id).cloned())
    }
}

/// in-memory deposit store for tests and demos
#[derive(Debug, Default)]
pub struct InMemoryDepositStore {
    rows: Mutex<HashMap<DepositId, FixedDeposit>>,
}

impl InMemoryDepositStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().map(|rows| rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DepositStore for InMemoryDepositStore {
    fn save(&self, mut deposit: FixedDeposit) -> Result<FixedDeposit> {
        let mut rows = self.rows.lock().map_err(|_| DepositError::Storage {
            message: "deposit store lock poisoned".to_string(),
        })?;

        let id = deposit.id.unwrap_or_else(Uuid::new_v4);
        deposit.id = Some(id);
        rows.insert(id, deposit.clone());

        Ok(deposit)
    }

    fn find_all_by_user(&self, user_id: UserId) -> Result<Vec<FixedDeposit>> {
        let rows = self.rows.lock().map_err(|_| DepositError::Storage {
            message: "deposit store lock poisoned".to_string(),
        })?;

        Ok(rows
            .values()
            .filter(|deposit| deposit.user_id == user_id)
            .cloned()
            .collect())
    }
}
