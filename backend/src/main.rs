//! Backend entry-point: configuration, storage, seeding, and server start.

use std::env;
use std::net::SocketAddr;

use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use backend::outbound::persistence::{self, DbPool, PoolConfig, SqliteUserStore};
use backend::seed::{seed_demo_users_on_startup, SeedSettings};
use backend::server::{self, ServerConfig};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DATABASE_URL: &str = "guestbook.db";
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let bind_addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.into())
        .parse()
        .map_err(|e| std::io::Error::other(format!("invalid BIND_ADDR: {e}")))?;
    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.into());
    let allowed_origin =
        env::var("ALLOWED_ORIGIN").unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGIN.into());

    let migration_url = database_url.clone();
    tokio::task::spawn_blocking(move || persistence::run_migrations(&migration_url))
        .await
        .map_err(|e| std::io::Error::other(format!("migration task failed: {e}")))?
        .map_err(std::io::Error::other)?;

    let pool = DbPool::new(PoolConfig::new(&database_url))
        .await
        .map_err(std::io::Error::other)?;

    let seed_settings = SeedSettings::from_env();
    let user_store = SqliteUserStore::new(pool.clone());
    if let Some(count) = seed_demo_users_on_startup(&seed_settings, &user_store)
        .await
        .map_err(std::io::Error::other)?
    {
        info!(count, "demo users seeded at startup");
    }

    info!(%bind_addr, database = %database_url, "starting server");
    let config = ServerConfig::new(bind_addr, allowed_origin).with_db_pool(pool);
    server::run(config).await
}
