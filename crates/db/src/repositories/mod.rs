//! Repository structs with static async methods over a [`sqlx::PgPool`].

pub mod character_repo;

pub use character_repo::CharacterRepo;
