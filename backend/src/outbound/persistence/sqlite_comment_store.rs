//! SQLite-backed `CommentStore` implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{CommentStore, StoreError};
use crate::domain::{Comment, CommentContent, CommentId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{CommentRow, NewCommentRow};
use super::pool::DbPool;
use super::schema::comments;

/// Diesel-backed implementation of the [`CommentStore`] port.
///
/// Content arriving here is already sanitised; this adapter only moves it in
/// and out of bind parameters.
#[derive(Clone)]
pub struct SqliteCommentStore {
    pool: DbPool,
}

impl SqliteCommentStore {
    /// Create a new store backed by the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Convert a read row into the domain comment.
///
/// Content is rehydrated without re-escaping; it was sanitised on the way in.
fn row_to_comment(row: CommentRow) -> Result<Comment, StoreError> {
    let id = CommentId::new(row.id).map_err(|err| {
        warn!(id = row.id, error = %err, "stored comment row violates domain invariants");
        StoreError::query("stored comment row violates domain invariants")
    })?;
    Ok(Comment::new(id, CommentContent::from_stored(row.content)))
}

#[async_trait]
impl CommentStore for SqliteCommentStore {
    async fn insert(&self, content: CommentContent) -> Result<Comment, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::insert_into(comments::table)
            .values(NewCommentRow {
                content: content.as_ref(),
            })
            .returning(CommentRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_comment(row)
    }

    async fn list_all(&self) -> Result<Vec<Comment>, StoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = comments::table
            .order(comments::id.asc())
            .select(CommentRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_comment).collect()
    }
}
