//! Character row model.

use smashlore_core::character::{Character, NewCharacter};
use smashlore_core::types::CharacterId;
use sqlx::FromRow;

use crate::error::StoreError;

/// A row from the `characters` table, exactly as stored.
#[derive(Debug, Clone, FromRow)]
pub struct CharacterRow {
    pub id: CharacterId,
    pub description: String,
    pub music_url: String,
    pub name: String,
    pub picture_url: String,
    pub quotes: String,
    pub release_date: String,
    pub song: String,
    pub universe: String,
}

impl CharacterRow {
    /// Rebuild a [`Character`] through the same validation used on insert.
    pub fn into_character(self) -> Result<Character, StoreError> {
        let id = self.id;
        let fields = NewCharacter {
            description: self.description,
            music_url: self.music_url,
            name: self.name,
            picture_url: self.picture_url,
            quotes: self.quotes,
            release_date: self.release_date,
            song: self.song,
            universe: self.universe,
        };
        Character::new(id, fields).map_err(|source| {
            tracing::error!(%id, error = %source, "Stored character row failed validation");
            StoreError::Hydration { id, source }
        })
    }
}
