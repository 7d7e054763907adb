use crate::error::{Field, Rule, ValidationError};

/// Character primary keys are UUIDs generated by the caller, never by the store.
pub type CharacterId = uuid::Uuid;

/// Generate a fresh identifier for a character about to be inserted.
pub fn new_character_id() -> CharacterId {
    uuid::Uuid::new_v4()
}

/// Parse the string form of a character identifier.
///
/// Accepts the hyphenated, simple, braced and URN encodings. Surrounding
/// whitespace is ignored.
pub fn parse_character_id(raw: &str) -> Result<CharacterId, ValidationError> {
    uuid::Uuid::parse_str(raw.trim()).map_err(|_| ValidationError::new(Field::Id, Rule::MalformedId))
}
