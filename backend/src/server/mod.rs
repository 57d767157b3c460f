//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{web, App, HttpServer, Scope};

#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::ports::{MemoryCommentStore, MemoryUserStore};
use crate::inbound::http::health::{live, ready, HealthState};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{comments, users};
use crate::middleware::Correlation;
use crate::outbound::persistence::{SqliteCommentStore, SqliteUserStore};

/// Build the handler dependency bundle from configuration.
///
/// Uses SQLite-backed stores when a pool is configured, otherwise falls back
/// to the in-memory fixtures.
fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => HttpState::new(
            Arc::new(SqliteUserStore::new(pool.clone())),
            Arc::new(SqliteCommentStore::new(pool.clone())),
        ),
        None => HttpState::new(
            Arc::new(MemoryUserStore::new()),
            Arc::new(MemoryCommentStore::new()),
        ),
    }
}

/// Versioned API scope with every REST endpoint registered.
fn api_scope() -> Scope {
    web::scope("/api/v1")
        .service(users::lookup_user)
        .service(users::list_users)
        .service(comments::create_comment)
        .service(comments::list_comments)
}

/// Restrictive cross-origin policy: one exact origin, two methods.
fn cors_policy(allowed_origin: &str) -> Cors {
    Cors::default()
        .allowed_origin(allowed_origin)
        .allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec![header::CONTENT_TYPE])
        .max_age(3600)
}

/// Run the HTTP server until shutdown.
///
/// # Errors
///
/// Returns an [`std::io::Error`] when binding the listener fails or the
/// server terminates abnormally.
pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    let http_state = web::Data::new(build_http_state(&config));
    let health_state = web::Data::new(HealthState::new());
    // Clone for the server factory so the readiness probe stays reachable.
    let server_health_state = health_state.clone();
    let allowed_origin = config.allowed_origin.clone();

    let server = HttpServer::new(move || {
        let cors = cors_policy(&allowed_origin);

        let mut app = App::new()
            .app_data(server_health_state.clone())
            .app_data(http_state.clone())
            .wrap(Correlation)
            .service(api_scope().wrap(cors))
            .service(ready)
            .service(live);

        #[cfg(debug_assertions)]
        {
            app = app.service(
                SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
            );
        }

        app
    })
    .bind(config.bind_addr)?;

    health_state.mark_ready();
    server.run().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test as actix_test, App};
    use serde_json::{json, Value};

    use crate::domain::User;
    use crate::domain::ports::CommentStore;

    fn seeded_state() -> HttpState {
        HttpState::new(
            Arc::new(crate::domain::ports::MemoryUserStore::with_users(vec![
                User::try_from_parts(1, "Ada Lovelace").expect("valid user"),
                User::try_from_parts(2, "Grace Hopper").expect("valid user"),
            ])),
            Arc::new(MemoryCommentStore::new()),
        )
    }

    #[actix_web::test]
    async fn request_flow_validates_before_any_store_access() {
        let state = seeded_state();
        let comments = state.comments.clone();
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .wrap(Correlation)
                .service(api_scope()),
        )
        .await;

        // Valid identifier: lookup proceeds and finds the user.
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/users/lookup?id=2")
                .to_request(),
        )
        .await;
        assert!(res.status().is_success());
        let value: Value = actix_test::read_body_json(res).await;
        assert_eq!(value.as_array().map(Vec::len), Some(1));

        // Empty identifier: rejected before lookup.
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/users/lookup?id=")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), actix_web::http::StatusCode::BAD_REQUEST);

        // Empty comment: rejected before insert.
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/comments")
                .set_json(json!({ "content": "" }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), actix_web::http::StatusCode::BAD_REQUEST);
        assert!(comments.list_all().await.expect("list").is_empty());

        // Markup in a comment: stored escaped.
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/comments")
                .set_json(json!({ "content": "<b>hi</b>" }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), actix_web::http::StatusCode::CREATED);
        let stored = comments.list_all().await.expect("list");
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].content().as_ref(), "&lt;b&gt;hi&lt;/b&gt;");
    }

    #[actix_web::test]
    async fn responses_carry_a_request_id_header() {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(seeded_state()))
                .wrap(Correlation)
                .service(api_scope()),
        )
        .await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/users")
                .to_request(),
        )
        .await;
        assert!(res.status().is_success());
        assert!(res.headers().contains_key("x-request-id"));
    }

    #[actix_web::test]
    async fn cors_rejects_undesignated_origins() {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(seeded_state()))
                .service(api_scope().wrap(cors_policy("http://localhost:3000"))),
        )
        .await;

        let allowed = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/users")
                .insert_header((header::ORIGIN, "http://localhost:3000"))
                .to_request(),
        )
        .await;
        assert_eq!(
            allowed
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|value| value.to_str().ok()),
            Some("http://localhost:3000")
        );

        let rejected = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/users")
                .insert_header((header::ORIGIN, "http://evil.example"))
                .to_request(),
        )
        .await;
        assert!(rejected
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[test]
    fn memory_stores_back_the_server_without_a_pool() {
        let addr = "127.0.0.1:0".parse().expect("valid address");
        let config = ServerConfig::new(addr, "http://localhost:3000");
        let state = build_http_state(&config);
        // The fallback bundle is usable immediately.
        let _users = state.users.clone();
        let _comments = state.comments.clone();
    }
}
