//! Row types mapping between the SQLite schema and domain entities.
//!
//! Read rows and insert rows are separate types. `UserRow` deliberately
//! selects only the identifier and display name: the credential column is
//! reachable solely through `NewUserRow`, which flows towards the store and
//! is never mapped back out.

use diesel::prelude::*;

use super::schema::{comments, users};

/// User row as read for outward-facing lookups and listings.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserRow {
    /// Store-assigned key.
    pub id: i64,
    /// Display name shown to other users.
    pub display_name: String,
}

/// User row as written during seeding.
#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow {
    /// Display name shown to other users.
    pub display_name: String,
    /// Opaque argon2 hash in PHC string format.
    pub password_hash: String,
}

/// Comment row as read back from the store.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = comments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CommentRow {
    /// Store-assigned key.
    pub id: i64,
    /// Sanitised comment body.
    pub content: String,
}

/// Comment row as inserted.
#[derive(Debug, Insertable)]
#[diesel(table_name = comments)]
pub struct NewCommentRow<'a> {
    /// Sanitised comment body.
    pub content: &'a str,
}
