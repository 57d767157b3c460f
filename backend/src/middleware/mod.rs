//! Application middleware.

pub mod correlation;

pub use correlation::Correlation;
