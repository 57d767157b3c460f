//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct generating the OpenAPI specification for
//! the REST API: all HTTP endpoints from the inbound layer plus the domain
//! schemas they reference. The generated document backs Swagger UI in debug
//! builds.

use utoipa::OpenApi;

use crate::domain::{Comment, Error, ErrorCode, User};
use crate::inbound::http::comments::CommentRequest;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Guestbook backend API",
        description = "HTTP interface for user lookup, comment submission, and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::lookup_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::comments::create_comment,
        crate::inbound::http::comments::list_comments,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(User, Comment, CommentRequest, Error, ErrorCode)),
    tags(
        (name = "users", description = "User lookup and listing"),
        (name = "comments", description = "Comment submission and listing"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
