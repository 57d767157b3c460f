//! SQLite persistence adapters implementing the domain store ports.

mod error_mapping;
pub mod models;
pub mod pool;
pub mod schema;
mod sqlite_comment_store;
mod sqlite_user_store;

pub use pool::{DbPool, PoolConfig, PoolError};
pub use sqlite_comment_store::SqliteCommentStore;
pub use sqlite_user_store::SqliteUserStore;

use diesel::{Connection, SqliteConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing::info;

/// Migrations embedded from `backend/migrations` at compile time.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Errors raised while preparing the database schema.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    /// The database could not be opened.
    #[error("failed to open database at {path}: {source}")]
    Connect {
        /// Database path or URL.
        path: String,
        /// Underlying connection error.
        #[source]
        source: diesel::ConnectionError,
    },
    /// A migration failed to apply.
    #[error("failed to apply migrations: {0}")]
    Apply(String),
}

/// Apply pending migrations against the given database.
///
/// Runs synchronously on a blocking connection; call it from a blocking
/// context (or `spawn_blocking`) before the pool starts serving requests.
pub fn run_migrations(database_url: &str) -> Result<(), MigrationError> {
    let mut conn =
        SqliteConnection::establish(database_url).map_err(|source| MigrationError::Connect {
            path: database_url.to_owned(),
            source,
        })?;

    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| MigrationError::Apply(err.to_string()))?;

    if !applied.is_empty() {
        info!(count = applied.len(), "applied pending migrations");
    }
    Ok(())
}
