//! Users API handlers.
//!
//! ```text
//! GET /api/v1/users
//! GET /api/v1/users/lookup?id=2
//! ```

use actix_web::{get, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::{Error, User};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_identifier, FieldName};
use crate::inbound::http::ApiResult;

const ID_FIELD: FieldName = FieldName::new("id");

/// Query parameters for `GET /api/v1/users/lookup`.
#[derive(Debug, Deserialize, IntoParams)]
pub struct LookupQuery {
    /// Submitted identifier value; validated before any store access.
    id: Option<String>,
}

/// Look up a single user by identifier.
///
/// The identifier is validated first: anything not cleanly coercible to a
/// positive integer is rejected with `"Invalid ID"` and the store is never
/// consulted. A valid identifier returns the zero-or-one matching record as
/// an array.
#[utoipa::path(
    get,
    path = "/api/v1/users/lookup",
    params(LookupQuery),
    responses(
        (status = 200, description = "Matching users (zero or one entry)", body = [User]),
        (status = 400, description = "Invalid identifier", body = Error),
        (status = 503, description = "Record store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "lookupUser"
)]
#[get("/users/lookup")]
pub async fn lookup_user(
    state: web::Data<HttpState>,
    query: web::Query<LookupQuery>,
) -> ApiResult<web::Json<Vec<User>>> {
    let id = parse_identifier(query.into_inner().id, ID_FIELD)?;
    let found = state.users.find_by_id(id).await?;
    Ok(web::Json(found.into_iter().collect()))
}

/// List known users.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "Users", body = [User]),
        (status = 503, description = "Record store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users.list_all().await?;
    Ok(web::Json(users))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MemoryCommentStore, MemoryUserStore, StoreError, UserStore};
    use crate::domain::UserId;
    use actix_web::{test as actix_test, web, App};
    use async_trait::async_trait;
    use rstest::rstest;
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn seeded_state() -> HttpState {
        let users = vec![
            User::try_from_parts(1, "Ada Lovelace").expect("valid user"),
            User::try_from_parts(2, "Grace Hopper").expect("valid user"),
        ];
        HttpState::new(
            Arc::new(MemoryUserStore::with_users(users)),
            Arc::new(MemoryCommentStore::new()),
        )
    }

    fn test_app(
        state: HttpState,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new().app_data(web::Data::new(state)).service(
            web::scope("/api/v1")
                .service(lookup_user)
                .service(list_users),
        )
    }

    #[actix_web::test]
    async fn lookup_returns_single_matching_user() {
        let app = actix_test::init_service(test_app(seeded_state())).await;
        let req = actix_test::TestRequest::get()
            .uri("/api/v1/users/lookup?id=2")
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert!(res.status().is_success());

        let value: Value = actix_test::read_body_json(res).await;
        let entries = value.as_array().expect("array body");
        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0].get("displayName").and_then(Value::as_str),
            Some("Grace Hopper")
        );
    }

    #[actix_web::test]
    async fn lookup_returns_empty_array_for_unknown_id() {
        let app = actix_test::init_service(test_app(seeded_state())).await;
        let req = actix_test::TestRequest::get()
            .uri("/api/v1/users/lookup?id=99")
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert!(res.status().is_success());

        let value: Value = actix_test::read_body_json(res).await;
        assert_eq!(value.as_array().map(Vec::len), Some(0));
    }

    #[rstest]
    #[case("/api/v1/users/lookup")]
    #[case("/api/v1/users/lookup?id=")]
    #[case("/api/v1/users/lookup?id=abc")]
    #[case("/api/v1/users/lookup?id=3abc")]
    #[actix_web::test]
    async fn lookup_rejects_malformed_identifiers(#[case] uri: &str) {
        let app = actix_test::init_service(test_app(seeded_state())).await;
        let req = actix_test::TestRequest::get().uri(uri).to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), actix_web::http::StatusCode::BAD_REQUEST);

        let value: Value = actix_test::read_body_json(res).await;
        assert_eq!(
            value.get("message").and_then(Value::as_str),
            Some("Invalid ID")
        );
        assert_eq!(
            value.get("code").and_then(Value::as_str),
            Some("invalid_request")
        );
    }

    /// Store stub counting lookups so tests can prove rejected requests
    /// never reach it.
    #[derive(Default)]
    struct CountingUserStore {
        lookups: AtomicUsize,
    }

    #[async_trait]
    impl UserStore for CountingUserStore {
        async fn find_by_id(&self, _id: UserId) -> Result<Option<User>, StoreError> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            Ok(None)
        }

        async fn list_all(&self) -> Result<Vec<User>, StoreError> {
            Ok(Vec::new())
        }

        async fn insert_batch(
            &self,
            _users: Vec<crate::domain::ports::NewUserRecord>,
        ) -> Result<(), StoreError> {
            Ok(())
        }
    }

    #[actix_web::test]
    async fn invalid_identifiers_never_reach_the_store() {
        let store = Arc::new(CountingUserStore::default());
        let state = HttpState::new(store.clone(), Arc::new(MemoryCommentStore::new()));
        let app = actix_test::init_service(test_app(state)).await;

        let req = actix_test::TestRequest::get()
            .uri("/api/v1/users/lookup?id=not-a-number")
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), actix_web::http::StatusCode::BAD_REQUEST);
        assert_eq!(store.lookups.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn valid_identifiers_reach_the_store_once() {
        let store = Arc::new(CountingUserStore::default());
        let state = HttpState::new(store.clone(), Arc::new(MemoryCommentStore::new()));
        let app = actix_test::init_service(test_app(state)).await;

        let req = actix_test::TestRequest::get()
            .uri("/api/v1/users/lookup?id=2")
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert!(res.status().is_success());
        assert_eq!(store.lookups.load(Ordering::SeqCst), 1);
    }

    #[actix_web::test]
    async fn list_users_returns_camel_case_json() {
        let app = actix_test::init_service(test_app(seeded_state())).await;
        let req = actix_test::TestRequest::get()
            .uri("/api/v1/users")
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert!(res.status().is_success());

        let value: Value = actix_test::read_body_json(res).await;
        let first = &value.as_array().expect("array body")[0];
        assert_eq!(
            first.get("displayName").and_then(Value::as_str),
            Some("Ada Lovelace")
        );
        assert!(first.get("display_name").is_none());
        assert!(first.get("passwordHash").is_none());
    }

    #[actix_web::test]
    async fn store_failures_surface_as_server_errors() {
        /// Store stub failing every call.
        struct FailingUserStore;

        #[async_trait]
        impl UserStore for FailingUserStore {
            async fn find_by_id(&self, _id: UserId) -> Result<Option<User>, StoreError> {
                Err(StoreError::connection("database unavailable"))
            }

            async fn list_all(&self) -> Result<Vec<User>, StoreError> {
                Err(StoreError::query("database query failed"))
            }

            async fn insert_batch(
                &self,
                _users: Vec<crate::domain::ports::NewUserRecord>,
            ) -> Result<(), StoreError> {
                Ok(())
            }
        }

        let state = HttpState::new(
            Arc::new(FailingUserStore),
            Arc::new(MemoryCommentStore::new()),
        );
        let app = actix_test::init_service(test_app(state)).await;

        let req = actix_test::TestRequest::get()
            .uri("/api/v1/users/lookup?id=2")
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(
            res.status(),
            actix_web::http::StatusCode::SERVICE_UNAVAILABLE
        );

        let req = actix_test::TestRequest::get()
            .uri("/api/v1/users")
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(
            res.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
        // Internal failures must not leak store detail.
        let value: Value = actix_test::read_body_json(res).await;
        assert_eq!(
            value.get("message").and_then(Value::as_str),
            Some("Internal server error")
        );
    }
}
