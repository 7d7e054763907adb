//! Row types for database tables.

pub mod character;
