//! Domain primitives and aggregates.
//!
//! Purpose: define the strongly typed entities and the validation and
//! sanitisation rules the HTTP and persistence layers rely on. Types here are
//! immutable once constructed and document their invariants in Rustdoc; a
//! value of a domain type is proof that its validation already ran.

pub mod comment;
pub mod error;
pub mod ports;
pub mod request_id;
pub mod sanitize;
pub mod user;

pub use self::comment::{Comment, CommentContent, CommentId, CommentValidationError};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::request_id::{RequestId, REQUEST_ID_HEADER};
pub use self::sanitize::escape_markup;
pub use self::user::{DisplayName, User, UserId, UserValidationError};
