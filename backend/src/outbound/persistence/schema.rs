//! Diesel table definitions for the SQLite schema.
//!
//! These definitions must match the migrations exactly. They are used by
//! Diesel for compile-time query validation and type-safe SQL generation;
//! every statement built against them is parameterised, so user input can
//! only ever occupy bind positions.

diesel::table! {
    /// User accounts table.
    ///
    /// Seeded in bulk at startup. The `password_hash` column never leaves
    /// this layer; read row types do not select it.
    users (id) {
        /// Primary key assigned by the store.
        id -> BigInt,
        /// Human-readable display name.
        display_name -> Text,
        /// Opaque argon2 hash in PHC string format.
        password_hash -> Text,
    }
}

diesel::table! {
    /// Comments table, append-only.
    comments (id) {
        /// Primary key assigned by the store.
        id -> BigInt,
        /// Sanitised comment body; markup is escaped before insert.
        content -> Text,
    }
}

diesel::allow_tables_to_appear_in_same_query!(users, comments);
