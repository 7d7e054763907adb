//! Rendered views of a character.

use std::fmt;

use smashlore_core::character::Character;
use smashlore_core::types::CharacterId;

use crate::error::ClientError;
use crate::source::CharacterSource;

/// A compact card shown in the fighter selection grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FighterCard {
    pub id: CharacterId,
    pub name: String,
    pub universe: String,
    pub picture_url: String,
    /// Link to the character's detail page.
    pub href: String,
}

impl From<&Character> for FighterCard {
    fn from(character: &Character) -> Self {
        Self {
            id: character.id(),
            name: character.name().to_string(),
            universe: character.universe().to_string(),
            picture_url: character.picture_url().to_string(),
            href: format!("/character/{}", character.id()),
        }
    }
}

impl fmt::Display for FighterCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) {}", self.name, self.universe, self.href)
    }
}

/// The full detail card for one character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoCard {
    pub id: CharacterId,
    pub name: String,
    pub universe: String,
    pub description: String,
    pub quotes: String,
    pub release_date: String,
    pub song: String,
    pub music_url: String,
    pub picture_url: String,
}

impl From<&Character> for InfoCard {
    fn from(character: &Character) -> Self {
        Self {
            id: character.id(),
            name: character.name().to_string(),
            universe: character.universe().to_string(),
            description: character.description().to_string(),
            quotes: character.quotes().to_string(),
            release_date: character.release_date().to_string(),
            song: character.song().to_string(),
            music_url: character.music_url().to_string(),
            picture_url: character.picture_url().to_string(),
        }
    }
}

impl fmt::Display for InfoCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.name, self.universe)?;
        writeln!(f, "Released: {}", self.release_date)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f, "\"{}\"", self.quotes)?;
        writeln!(f, "Song: {} <{}>", self.song, self.music_url)?;
        write!(f, "Picture: {}", self.picture_url)
    }
}

/// Fetch one character and render its detail card.
pub async fn load_info_card(
    source: &dyn CharacterSource,
    id: CharacterId,
) -> Result<Option<InfoCard>, ClientError> {
    Ok(source.fetch_by_id(id).await?.as_ref().map(InfoCard::from))
}
