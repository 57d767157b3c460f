//! Shared validation helpers for inbound HTTP adapters.
//!
//! Both guards run before any store access: a request that fails here is
//! answered immediately and never produces a store call.

use serde_json::json;

use crate::domain::{CommentContent, CommentValidationError, Error, UserId};

/// Client-facing reason attached to identifier validation failures.
pub(crate) const INVALID_ID_REASON: &str = "Invalid ID";

/// Client-facing reason attached to comment validation failures.
pub(crate) const EMPTY_COMMENT_REASON: &str = "Comment cannot be empty";

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidIdentifier,
    EmptyContent,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidIdentifier => "invalid_identifier",
            ErrorCode::EmptyContent => "empty_content",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }
}

/// Parse a submitted identifier value, rejecting anything not cleanly
/// coercible to a positive integer.
///
/// `None` covers the absent-parameter case; every failure carries the
/// `"Invalid ID"` reason so clients see one stable message for the whole
/// rejection class.
pub(crate) fn parse_identifier(
    value: Option<String>,
    field: FieldName,
) -> Result<UserId, Error> {
    let Some(raw) = value else {
        return Err(
            ValidationError::new(field.as_str(), INVALID_ID_REASON)
                .with_code(ErrorCode::MissingField),
        );
    };

    UserId::parse(&raw).map_err(|_| {
        ValidationError::new(field.as_str(), INVALID_ID_REASON)
            .with_value(ErrorCode::InvalidIdentifier, raw)
    })
}

/// Validate and sanitise submitted comment content.
///
/// On success the returned [`CommentContent`] is already escaped; the raw
/// submission does not survive this call.
pub(crate) fn require_content(
    value: Option<String>,
    field: FieldName,
) -> Result<CommentContent, Error> {
    let Some(raw) = value else {
        return Err(
            ValidationError::new(field.as_str(), EMPTY_COMMENT_REASON)
                .with_code(ErrorCode::MissingField),
        );
    };

    CommentContent::new(&raw).map_err(|_: CommentValidationError| {
        ValidationError::new(field.as_str(), EMPTY_COMMENT_REASON)
            .with_code(ErrorCode::EmptyContent)
    })
}
