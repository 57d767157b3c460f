//! Driven port for comment persistence.

use std::sync::Mutex;

use async_trait::async_trait;

use super::StoreError;
use crate::domain::{Comment, CommentContent, CommentId};

/// Record store port for comments.
///
/// Inserts are append-only and receive already-sanitised content; the store
/// assigns the identifier. Comments are never updated or deleted.
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// Persist sanitised content and return the stored comment.
    async fn insert(&self, content: CommentContent) -> Result<Comment, StoreError>;

    /// Return every stored comment in insertion order.
    async fn list_all(&self) -> Result<Vec<Comment>, StoreError>;
}

/// Deterministic in-memory [`CommentStore`] for tests and store-less wiring.
#[derive(Debug, Default)]
pub struct MemoryCommentStore {
    comments: Mutex<Vec<Comment>>,
}

impl MemoryCommentStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CommentStore for MemoryCommentStore {
    async fn insert(&self, content: CommentContent) -> Result<Comment, StoreError> {
        let mut comments = self.comments.lock().map_err(|_| poisoned())?;
        let next = i64::try_from(comments.len())
            .map_err(|_| StoreError::query("comment count exceeds key space"))?
            + 1;
        let id = CommentId::new(next).map_err(|err| StoreError::query(err.to_string()))?;
        let comment = Comment::new(id, content);
        comments.push(comment.clone());
        Ok(comment)
    }

    async fn list_all(&self) -> Result<Vec<Comment>, StoreError> {
        let comments = self.comments.lock().map_err(|_| poisoned())?;
        Ok(comments.clone())
    }
}

fn poisoned() -> StoreError {
    StoreError::query("in-memory store lock poisoned")
}
