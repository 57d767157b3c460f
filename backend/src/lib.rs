//! Guestbook backend library modules.
//!
//! A small demonstration web backend exposing user lookup and comment
//! submission over SQLite. Requests pass through two guards before any
//! store access: submitted identifiers must parse cleanly as positive
//! integers, and free-text content has its markup-significant characters
//! escaped before persistence. Store access itself happens exclusively
//! through parameterised queries behind the domain ports.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod seed;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
/// Request-correlation middleware applied to every route.
pub use middleware::Correlation;
