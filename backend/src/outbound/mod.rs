//! Outbound adapters implementing domain ports against real collaborators.

pub mod persistence;
