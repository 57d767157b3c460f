//! Driven port for user persistence.

use std::sync::Mutex;

use async_trait::async_trait;

use super::StoreError;
use crate::domain::{DisplayName, User, UserId};

/// Not-yet-persisted user record handed to [`UserStore::insert_batch`].
///
/// This is the only domain type that carries a credential, and it flows in
/// one direction: towards the store. Nothing maps it back out.
#[derive(Debug, Clone)]
pub struct NewUserRecord {
    /// Display name shown to other users.
    pub display_name: DisplayName,
    /// Opaque password hash in PHC string format.
    pub password_hash: String,
}

/// Record store port for user records.
///
/// Lookups are exact-match by key; inserts happen in bulk during seeding.
/// Users are never updated or deleted through this port.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Return the user with the given identifier, if present.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StoreError>;

    /// Return every stored user in identifier order.
    async fn list_all(&self) -> Result<Vec<User>, StoreError>;

    /// Append a batch of new users, assigning identifiers in store order.
    async fn insert_batch(&self, users: Vec<NewUserRecord>) -> Result<(), StoreError>;
}

/// Deterministic in-memory [`UserStore`] for tests and store-less wiring.
///
/// Keeps no credentials: inserted password hashes are dropped on arrival.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl MemoryUserStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given users.
    #[must_use]
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
        }
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StoreError> {
        let users = self.users.lock().map_err(|_| poisoned())?;
        Ok(users.iter().find(|user| user.id() == id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, StoreError> {
        let users = self.users.lock().map_err(|_| poisoned())?;
        let mut listed = users.clone();
        listed.sort_by_key(User::id);
        Ok(listed)
    }

    async fn insert_batch(&self, new_users: Vec<NewUserRecord>) -> Result<(), StoreError> {
        let mut users = self.users.lock().map_err(|_| poisoned())?;
        for record in new_users {
            let next = users.iter().map(|user| user.id().get()).max().unwrap_or(0) + 1;
            let id = UserId::new(next).map_err(|err| StoreError::query(err.to_string()))?;
            users.push(User::new(id, record.display_name));
        }
        Ok(())
    }
}

fn poisoned() -> StoreError {
    StoreError::query("in-memory store lock poisoned")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, name: &str) -> User {
        User::try_from_parts(id, name).expect("valid user")
    }

    fn record(name: &str) -> NewUserRecord {
        NewUserRecord {
            display_name: DisplayName::new(name).expect("valid name"),
            password_hash: "$argon2id$stub".to_owned(),
        }
    }

    #[tokio::test]
    async fn find_by_id_returns_matching_user() {
        let store = MemoryUserStore::with_users(vec![user(2, "Ada Lovelace")]);
        let found = store
            .find_by_id(UserId::new(2).expect("valid id"))
            .await
            .expect("lookup succeeds");
        assert_eq!(found, Some(user(2, "Ada Lovelace")));
    }

    #[tokio::test]
    async fn find_by_id_returns_none_for_unknown_key() {
        let store = MemoryUserStore::with_users(vec![user(2, "Ada Lovelace")]);
        let found = store
            .find_by_id(UserId::new(7).expect("valid id"))
            .await
            .expect("lookup succeeds");
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn insert_batch_assigns_sequential_identifiers() {
        let store = MemoryUserStore::new();
        store
            .insert_batch(vec![record("Ada Lovelace"), record("Grace Hopper")])
            .await
            .expect("insert succeeds");

        let listed = store.list_all().await.expect("list succeeds");
        let ids: Vec<i64> = listed.iter().map(|u| u.id().get()).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
