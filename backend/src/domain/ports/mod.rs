//! Ports between the domain and its collaborators.
//!
//! Inbound adapters (HTTP handlers) depend on these traits rather than on
//! outbound persistence concerns. Production wiring backs them with the
//! SQLite adapters; tests use the deterministic in-memory implementations.

mod comment_store;
mod user_store;

pub use comment_store::{CommentStore, MemoryCommentStore};
pub use user_store::{MemoryUserStore, NewUserRecord, UserStore};

use crate::domain::Error;

/// Failure raised by a store implementation.
///
/// `Connection` means the store could not be reached at all; `Query` means it
/// was reached but the operation failed. The split drives the client-facing
/// status: unreachable stores surface as temporary unavailability, failed
/// operations as opaque internal errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The store was unreachable.
    #[error("store connection failed: {message}")]
    Connection {
        /// Description of the connection failure.
        message: String,
    },

    /// The store rejected or failed the operation.
    #[error("store query failed: {message}")]
    Query {
        /// Description of the operation failure.
        message: String,
    },
}

impl StoreError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

impl From<StoreError> for Error {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Connection { message } => Error::service_unavailable(message),
            StoreError::Query { message } => Error::internal(message),
        }
    }
}
