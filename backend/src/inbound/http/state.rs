//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they depend
//! only on domain ports and remain testable without I/O. The bundle is built
//! once by the process entry point and injected; handlers never reach for an
//! ambient store handle.

use std::sync::Arc;

use crate::domain::ports::{CommentStore, UserStore};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// User record store.
    pub users: Arc<dyn UserStore>,
    /// Comment record store.
    pub comments: Arc<dyn CommentStore>,
}

impl HttpState {
    /// Construct state from the two store ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::ports::{MemoryCommentStore, MemoryUserStore};
    /// use backend::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(MemoryUserStore::new()),
    ///     Arc::new(MemoryCommentStore::new()),
    /// );
    /// let _users = state.users.clone();
    /// ```
    #[must_use]
    pub fn new(users: Arc<dyn UserStore>, comments: Arc<dyn CommentStore>) -> Self {
        Self { users, comments }
    }
}
