//! Domain types for the fighter catalog.
//!
//! This crate has no IO: it owns the character record, its field
//! validation and sanitization rules, and the search/filter helpers shared
//! by the repository layer and the client listing view.

pub mod character;
pub mod error;
pub mod sanitize;
pub mod search;
pub mod types;
