//! HTTP server configuration object.

use std::net::SocketAddr;

use crate::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) allowed_origin: String,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a server configuration.
    ///
    /// `allowed_origin` is the single origin permitted by the cross-origin
    /// policy; every other origin is rejected at the boundary.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, allowed_origin: impl Into<String>) -> Self {
        Self {
            bind_addr,
            allowed_origin: allowed_origin.into(),
            db_pool: None,
        }
    }

    /// Attach a database connection pool for persistence adapters.
    ///
    /// Without a pool the server falls back to in-memory stores, which is
    /// only useful for local experiments and tests.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Return the single permitted caller origin.
    #[must_use]
    pub fn allowed_origin(&self) -> &str {
        &self.allowed_origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_carries_bind_address_and_origin() {
        let addr: SocketAddr = "127.0.0.1:8080".parse().expect("valid address");
        let config = ServerConfig::new(addr, "http://localhost:3000");

        assert_eq!(config.bind_addr(), addr);
        assert_eq!(config.allowed_origin(), "http://localhost:3000");
        assert!(config.db_pool.is_none());
    }
}
