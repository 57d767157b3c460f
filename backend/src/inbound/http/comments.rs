//! Comments API handlers.
//!
//! ```text
//! POST /api/v1/comments {"content":"<b>hi</b>"}
//! GET /api/v1/comments
//! ```

use actix_web::{get, post, web, HttpResponse};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::{Comment, Error};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{require_content, FieldName};
use crate::inbound::http::ApiResult;

const CONTENT_FIELD: FieldName = FieldName::new("content");

/// Request body for `POST /api/v1/comments`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CommentRequest {
    /// Submitted free-text content; sanitised before persistence.
    #[schema(value_type = Option<String>, example = "<b>hi</b>")]
    content: Option<String>,
}

/// Create a comment.
///
/// The content is validated and sanitised first: an absent or empty body is
/// rejected with `"Comment cannot be empty"` and the store is never
/// consulted. The persisted comment, markup already escaped, is returned as
/// the acknowledgment.
#[utoipa::path(
    post,
    path = "/api/v1/comments",
    request_body = CommentRequest,
    responses(
        (status = 201, description = "Comment stored", body = Comment),
        (status = 400, description = "Empty content", body = Error),
        (status = 503, description = "Record store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["comments"],
    operation_id = "createComment"
)]
#[post("/comments")]
pub async fn create_comment(
    state: web::Data<HttpState>,
    payload: web::Json<CommentRequest>,
) -> ApiResult<HttpResponse> {
    let content = require_content(payload.into_inner().content, CONTENT_FIELD)?;
    let stored = state.comments.insert(content).await?;
    Ok(HttpResponse::Created().json(stored))
}

/// List stored comments in insertion order.
#[utoipa::path(
    get,
    path = "/api/v1/comments",
    responses(
        (status = 200, description = "Comments", body = [Comment]),
        (status = 503, description = "Record store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["comments"],
    operation_id = "listComments"
)]
#[get("/comments")]
pub async fn list_comments(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Comment>>> {
    let comments = state.comments.list_all().await?;
    Ok(web::Json(comments))
}
