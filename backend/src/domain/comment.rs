//! Comment data model.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::sanitize::escape_markup;

/// Validation errors returned by the comment constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentValidationError {
    /// The content value was absent or empty once trimmed.
    EmptyContent,
    /// The identifier parsed but is not a positive key.
    InvalidId,
}

impl fmt::Display for CommentValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyContent => write!(f, "comment content must not be empty"),
            Self::InvalidId => write!(f, "comment id must be a positive integer"),
        }
    }
}

impl std::error::Error for CommentValidationError {}

/// Store-assigned positive integer key identifying a [`Comment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct CommentId(i64);

impl CommentId {
    /// Validate and construct a [`CommentId`] from an integer value.
    pub const fn new(id: i64) -> Result<Self, CommentValidationError> {
        if id < 1 {
            return Err(CommentValidationError::InvalidId);
        }
        Ok(Self(id))
    }

    /// Access the raw integer key.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<CommentId> for i64 {
    fn from(value: CommentId) -> Self {
        value.0
    }
}

impl TryFrom<i64> for CommentId {
    type Error = CommentValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Sanitised free-text body of a comment.
///
/// ## Invariants
/// - Non-empty once trimmed of whitespace.
/// - Contains no unescaped `&`, `<`, `>`, or `"`: the only public
///   constructor applies [`escape_markup`] before the value exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String")]
#[serde(from = "String")]
pub struct CommentContent(String);

impl CommentContent {
    /// Validate raw submitted text and sanitise it for persistence.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::CommentContent;
    ///
    /// let content = CommentContent::new("<b>hi</b>").expect("non-empty");
    /// assert_eq!(content.as_ref(), "&lt;b&gt;hi&lt;/b&gt;");
    /// assert!(CommentContent::new("").is_err());
    /// ```
    pub fn new(raw: impl AsRef<str>) -> Result<Self, CommentValidationError> {
        let raw = raw.as_ref();
        if raw.trim().is_empty() {
            return Err(CommentValidationError::EmptyContent);
        }
        Ok(Self(escape_markup(raw)))
    }

    /// Rehydrate content that is already sanitised at rest.
    ///
    /// Used when mapping store rows back into the domain; applying the
    /// escape transform again here would double-escape persisted text.
    #[must_use]
    pub const fn from_stored(content: String) -> Self {
        Self(content)
    }
}

impl AsRef<str> for CommentContent {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CommentContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<CommentContent> for String {
    fn from(value: CommentContent) -> Self {
        value.0
    }
}

impl From<String> for CommentContent {
    fn from(value: String) -> Self {
        Self::from_stored(value)
    }
}

/// Persisted comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Store-assigned identifier.
    #[schema(value_type = i64, example = 1)]
    id: CommentId,
    /// Sanitised content.
    #[schema(value_type = String, example = "&lt;b&gt;hi&lt;/b&gt;")]
    content: CommentContent,
}

impl Comment {
    /// Build a [`Comment`] from validated components.
    #[must_use]
    pub const fn new(id: CommentId, content: CommentContent) -> Self {
        Self { id, content }
    }

    /// Store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> CommentId {
        self.id
    }

    /// Sanitised content.
    #[must_use]
    pub const fn content(&self) -> &CommentContent {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\n\t")]
    fn content_rejects_blank_input(#[case] raw: &str) {
        assert_eq!(
            CommentContent::new(raw),
            Err(CommentValidationError::EmptyContent)
        );
    }

    #[test]
    fn content_is_sanitised_on_construction() {
        let content = CommentContent::new("<script>alert(\"x\")</script>").expect("non-empty");
        assert_eq!(
            content.as_ref(),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"
        );
    }

    #[test]
    fn safe_content_is_stored_verbatim() {
        let content = CommentContent::new("hello there").expect("non-empty");
        assert_eq!(content.as_ref(), "hello there");
    }

    #[test]
    fn rehydration_does_not_escape_again() {
        let stored = CommentContent::from_stored("&lt;b&gt;hi&lt;/b&gt;".to_owned());
        assert_eq!(stored.as_ref(), "&lt;b&gt;hi&lt;/b&gt;");
    }

    #[test]
    fn comment_id_rejects_non_positive_values() {
        assert_eq!(CommentId::new(0), Err(CommentValidationError::InvalidId));
        assert_eq!(CommentId::new(-3), Err(CommentValidationError::InvalidId));
    }

    #[test]
    fn comment_serialises_camel_case() {
        let comment = Comment::new(
            CommentId::new(1).expect("valid id"),
            CommentContent::new("<b>hi</b>").expect("non-empty"),
        );
        let value = serde_json::to_value(&comment).expect("serialise comment");
        assert_eq!(value.get("id"), Some(&serde_json::json!(1)));
        assert_eq!(
            value.get("content"),
            Some(&serde_json::json!("&lt;b&gt;hi&lt;/b&gt;"))
        );
    }
}
