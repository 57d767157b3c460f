//! Startup seeding of demo users.
//!
//! Users enter this system in bulk, before it starts serving traffic; there
//! is no registration endpoint. Seeding is disabled by default, toggled by
//! configuration, and skipped entirely when the user table already holds
//! records.

use argon2::password_hash::{rand_core::OsRng, SaltString};
use argon2::{Argon2, PasswordHasher};
use thiserror::Error;
use tracing::info;

use crate::domain::ports::{NewUserRecord, StoreError, UserStore};
use crate::domain::DisplayName;

/// Demo accounts created on first startup.
///
/// Plaintext passwords exist only here and only long enough to be hashed;
/// the store receives PHC strings.
const DEMO_USERS: [(&str, &str); 3] = [
    ("Ada Lovelace", "analytical-engine"),
    ("Grace Hopper", "nanoseconds"),
    ("Alan Turing", "enigma-variations"),
];

/// Configuration values controlling demo seeding at startup.
#[derive(Debug, Clone)]
pub struct SeedSettings {
    /// Enable demo user seeding on startup.
    pub enabled: bool,
}

impl SeedSettings {
    /// Read settings from the environment.
    ///
    /// `SEED_DEMO_USERS=1` enables seeding; anything else leaves it off.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            enabled: std::env::var("SEED_DEMO_USERS").ok().as_deref() == Some("1"),
        }
    }
}

/// Errors returned while executing startup seeding.
#[derive(Debug, Error)]
pub enum SeedingError {
    /// The user store rejected an operation.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    /// Password hashing failed.
    #[error("password hashing failed: {0}")]
    Hash(String),
    /// A built-in demo display name failed validation.
    #[error("invalid demo display name: {0}")]
    DisplayName(String),
}

fn hash_demo_password(password: &str) -> Result<String, SeedingError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| SeedingError::Hash(err.to_string()))
}

/// Apply demo users on startup when enabled and the store is empty.
///
/// Returns the number of seeded users, or `None` when seeding was skipped.
pub async fn seed_demo_users_on_startup(
    settings: &SeedSettings,
    store: &dyn UserStore,
) -> Result<Option<usize>, SeedingError> {
    if !settings.enabled {
        info!(reason = "disabled", "demo user seeding skipped");
        return Ok(None);
    }

    if !store.list_all().await?.is_empty() {
        info!(reason = "users present", "demo user seeding skipped");
        return Ok(None);
    }

    let mut records = Vec::with_capacity(DEMO_USERS.len());
    for (name, password) in DEMO_USERS {
        let display_name = DisplayName::new(name)
            .map_err(|err| SeedingError::DisplayName(err.to_string()))?;
        records.push(NewUserRecord {
            display_name,
            password_hash: hash_demo_password(password)?,
        });
    }

    let count = records.len();
    store.insert_batch(records).await?;
    info!(count, "seeded demo users");
    Ok(Some(count))
}
