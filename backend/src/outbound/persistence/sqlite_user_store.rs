//! SQLite-backed `UserStore` implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{NewUserRecord, StoreError, UserStore};
use crate::domain::{User, UserId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewUserRow, UserRow};
use super::pool::DbPool;
use super::schema::users;

/// Diesel-backed implementation of the [`UserStore`] port.
///
/// All statements go through the typed query builder; submitted identifiers
/// only ever appear as bind parameters, never as query text.
#[derive(Clone)]
pub struct SqliteUserStore {
    pool: DbPool,
}

impl SqliteUserStore {
    /// Create a new store backed by the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Convert a read row into the domain user.
///
/// Rows violating domain invariants indicate store corruption and surface as
/// query errors rather than panics.
fn row_to_user(row: UserRow) -> Result<User, StoreError> {
    User::try_from_parts(row.id, row.display_name).map_err(|err| {
        warn!(id = row.id, error = %err, "stored user row violates domain invariants");
        StoreError::query("stored user row violates domain invariants")
    })
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = users::table
            .filter(users::id.eq(id.get()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_user).transpose()
    }

    async fn list_all(&self) -> Result<Vec<User>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = users::table
            .order(users::id.asc())
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_user).collect()
    }

    async fn insert_batch(&self, new_users: Vec<NewUserRecord>) -> Result<(), StoreError> {
        let rows: Vec<NewUserRow> = new_users
            .into_iter()
            .map(|record| NewUserRow {
                display_name: String::from(record.display_name),
                password_hash: record.password_hash,
            })
            .collect();

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(users::table)
            .values(&rows)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }
}
