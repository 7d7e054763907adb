//! The character record and its field validation.
//!
//! A [`Character`] can only be obtained through [`Character::new`] or
//! the `TryFrom<CharacterRecord>` conversion, both of which validate every
//! field in a fixed order and stop at the first failure. Hydrating a stored
//! row goes through the same path as creating a new record.

use serde::{Deserialize, Serialize};
use validator::ValidateUrl;

use crate::error::{Field, Rule, ValidationError};
use crate::sanitize::{sanitize_text, sanitize_url};
use crate::types::{parse_character_id, CharacterId};

// ---------------------------------------------------------------------------
// Field bounds (in characters)
// ---------------------------------------------------------------------------

pub const MAX_DESCRIPTION_LEN: usize = 1600;
pub const MAX_MUSIC_URL_LEN: usize = 255;
pub const MAX_NAME_LEN: usize = 32;
pub const MAX_PICTURE_URL_LEN: usize = 255;
pub const MAX_QUOTES_LEN: usize = 255;
pub const MAX_RELEASE_DATE_LEN: usize = 128;
pub const MAX_SONG_LEN: usize = 255;
pub const MAX_UNIVERSE_LEN: usize = 255;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A fully validated character.
///
/// Serializes with camelCase keys and the id in hyphenated string form.
/// Deserializing re-runs validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "CharacterRecord")]
pub struct Character {
    id: CharacterId,
    description: String,
    music_url: String,
    name: String,
    picture_url: String,
    quotes: String,
    release_date: String,
    song: String,
    universe: String,
}

/// The nine raw fields of a character, without an identifier.
///
/// This is the body of a create request. Missing keys deserialize as
/// empty strings so they fail validation with the field named.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewCharacter {
    pub description: String,
    pub music_url: String,
    pub name: String,
    pub picture_url: String,
    pub quotes: String,
    pub release_date: String,
    pub song: String,
    pub universe: String,
}

/// A raw, unvalidated character including its identifier in string form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CharacterRecord {
    pub id: String,
    #[serde(flatten)]
    pub fields: NewCharacter,
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

impl Character {
    /// Validate `fields` and build a character with the given id.
    ///
    /// Fields are checked in the order description, music URL, name,
    /// picture URL, quotes, release date, song, universe.
    pub fn new(id: CharacterId, fields: NewCharacter) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            description: validate_description(&fields.description)?,
            music_url: validate_music_url(&fields.music_url)?,
            name: validate_name(&fields.name)?,
            picture_url: validate_picture_url(&fields.picture_url)?,
            quotes: validate_quotes(&fields.quotes)?,
            release_date: validate_release_date(&fields.release_date)?,
            song: validate_song(&fields.song)?,
            universe: validate_universe(&fields.universe)?,
        })
    }

    pub fn id(&self) -> CharacterId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn music_url(&self) -> &str {
        &self.music_url
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn picture_url(&self) -> &str {
        &self.picture_url
    }

    pub fn quotes(&self) -> &str {
        &self.quotes
    }

    pub fn release_date(&self) -> &str {
        &self.release_date
    }

    pub fn song(&self) -> &str {
        &self.song
    }

    pub fn universe(&self) -> &str {
        &self.universe
    }
}

impl TryFrom<CharacterRecord> for Character {
    type Error = ValidationError;

    fn try_from(record: CharacterRecord) -> Result<Self, Self::Error> {
        let id = parse_character_id(&record.id)?;
        Character::new(id, record.fields)
    }
}

impl From<&Character> for NewCharacter {
    fn from(character: &Character) -> Self {
        Self {
            description: character.description.clone(),
            music_url: character.music_url.clone(),
            name: character.name.clone(),
            picture_url: character.picture_url.clone(),
            quotes: character.quotes.clone(),
            release_date: character.release_date.clone(),
            song: character.song.clone(),
            universe: character.universe.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Per-field validators
// ---------------------------------------------------------------------------

pub fn validate_description(raw: &str) -> Result<String, ValidationError> {
    validate_text(Field::Description, raw, MAX_DESCRIPTION_LEN)
}

pub fn validate_music_url(raw: &str) -> Result<String, ValidationError> {
    validate_url(Field::MusicUrl, raw, MAX_MUSIC_URL_LEN)
}

pub fn validate_name(raw: &str) -> Result<String, ValidationError> {
    validate_text(Field::Name, raw, MAX_NAME_LEN)
}

pub fn validate_picture_url(raw: &str) -> Result<String, ValidationError> {
    validate_url(Field::PictureUrl, raw, MAX_PICTURE_URL_LEN)
}

pub fn validate_quotes(raw: &str) -> Result<String, ValidationError> {
    validate_text(Field::Quotes, raw, MAX_QUOTES_LEN)
}

pub fn validate_release_date(raw: &str) -> Result<String, ValidationError> {
    validate_text(Field::ReleaseDate, raw, MAX_RELEASE_DATE_LEN)
}

pub fn validate_song(raw: &str) -> Result<String, ValidationError> {
    validate_text(Field::Song, raw, MAX_SONG_LEN)
}

pub fn validate_universe(raw: &str) -> Result<String, ValidationError> {
    validate_text(Field::Universe, raw, MAX_UNIVERSE_LEN)
}

fn validate_text(field: Field, raw: &str, max: usize) -> Result<String, ValidationError> {
    let value = sanitize_text(raw);
    if value.is_empty() {
        return Err(ValidationError::new(field, Rule::Empty));
    }
    check_length(field, value, max)
}

fn validate_url(field: Field, raw: &str, max: usize) -> Result<String, ValidationError> {
    let value = sanitize_url(raw);
    if value.is_empty() {
        return Err(ValidationError::new(field, Rule::Empty));
    }
    if !value.validate_url() {
        return Err(ValidationError::new(field, Rule::InvalidUrl));
    }
    check_length(field, value, max)
}

fn check_length(field: Field, value: String, max: usize) -> Result<String, ValidationError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::new(field, Rule::TooLong { max, actual }));
    }
    Ok(value)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn ganondorf() -> NewCharacter {
        NewCharacter {
            description: "  The King of Evil, wielder of the Triforce of Power.  ".into(),
            music_url: " https://www.youtube.com/watch?v=ganon ".into(),
            name: " Ganondorf ".into(),
            picture_url: "https://example.com/img/ganondorf.png".into(),
            quotes: "<i>Ha ha ha!</i>".into(),
            release_date: "1998".into(),
            song: "Ganondorf Battle".into(),
            universe: "The Legend of Zelda".into(),
        }
    }

    fn id() -> CharacterId {
        parse_character_id("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap()
    }

    #[test]
    fn valid_fields_build_a_character_with_cleaned_values() {
        let c = Character::new(id(), ganondorf()).unwrap();
        assert_eq!(c.id(), id());
        assert_eq!(c.name(), "Ganondorf");
        assert_eq!(
            c.description(),
            "The King of Evil, wielder of the Triforce of Power."
        );
        assert_eq!(c.music_url(), "https://www.youtube.com/watch?v=ganon");
        assert_eq!(c.picture_url(), "https://example.com/img/ganondorf.png");
        assert_eq!(c.quotes(), "Ha ha ha!");
        assert_eq!(c.release_date(), "1998");
        assert_eq!(c.song(), "Ganondorf Battle");
        assert_eq!(c.universe(), "The Legend of Zelda");
    }

    #[test]
    fn whitespace_only_field_is_empty() {
        let mut input = ganondorf();
        input.song = "   \t ".into();
        let err = Character::new(id(), input).unwrap_err();
        assert_eq!(err, ValidationError::new(Field::Song, Rule::Empty));
    }

    #[test]
    fn markup_only_field_is_empty() {
        let mut input = ganondorf();
        input.universe = "<div></div>".into();
        let err = Character::new(id(), input).unwrap_err();
        assert_eq!(err.field, Field::Universe);
        assert_matches!(err.rule, Rule::Empty);
    }

    #[test]
    fn name_over_32_characters_is_too_long() {
        let mut input = ganondorf();
        input.name = "x".repeat(33);
        let err = Character::new(id(), input).unwrap_err();
        assert_eq!(err.field, Field::Name);
        assert_matches!(err.rule, Rule::TooLong { max: 32, actual: 33 });
    }

    #[test]
    fn name_of_exactly_32_characters_is_accepted() {
        let mut input = ganondorf();
        input.name = "x".repeat(32);
        assert!(Character::new(id(), input).is_ok());
    }

    #[test]
    fn bounds_count_characters_not_bytes() {
        let mut input = ganondorf();
        input.name = "ポケモントレーナー".repeat(3);
        assert_eq!(input.name.chars().count(), 27);
        assert!(input.name.len() > 32);
        assert!(Character::new(id(), input).is_ok());
    }

    #[test]
    fn description_bound_is_1600() {
        let mut input = ganondorf();
        input.description = "d".repeat(1600);
        assert!(Character::new(id(), input.clone()).is_ok());

        input.description = "d".repeat(1601);
        let err = Character::new(id(), input).unwrap_err();
        assert_matches!(err.rule, Rule::TooLong { max: 1600, actual: 1601 });
    }

    #[test]
    fn quotes_bound_is_255() {
        let mut input = ganondorf();
        input.quotes = "q".repeat(256);
        let err = Character::new(id(), input).unwrap_err();
        assert_eq!(err.field, Field::Quotes);
        assert_matches!(err.rule, Rule::TooLong { max: 255, .. });
    }

    #[test]
    fn release_date_bound_is_128() {
        let mut input = ganondorf();
        input.release_date = "r".repeat(129);
        let err = Character::new(id(), input).unwrap_err();
        assert_eq!(err.field, Field::ReleaseDate);
        assert_matches!(err.rule, Rule::TooLong { max: 128, .. });
    }

    #[test]
    fn malformed_url_is_rejected() {
        let mut input = ganondorf();
        input.picture_url = "not a url".into();
        let err = Character::new(id(), input).unwrap_err();
        assert_eq!(err, ValidationError::new(Field::PictureUrl, Rule::InvalidUrl));
    }

    #[test]
    fn overlong_url_is_too_long() {
        let mut input = ganondorf();
        input.music_url = format!("https://example.com/{}", "a".repeat(250));
        let err = Character::new(id(), input).unwrap_err();
        assert_eq!(err.field, Field::MusicUrl);
        assert_matches!(err.rule, Rule::TooLong { max: 255, .. });
    }

    #[test]
    fn first_failing_field_in_order_is_reported() {
        let mut input = ganondorf();
        input.universe = String::new();
        input.name = String::new();
        input.description = String::new();
        let err = Character::new(id(), input).unwrap_err();
        assert_eq!(err.field, Field::Description);
    }

    #[test]
    fn record_with_malformed_id_fails_before_fields() {
        let record = CharacterRecord {
            id: "nope".into(),
            fields: NewCharacter::default(),
        };
        let err = Character::try_from(record).unwrap_err();
        assert_eq!(err, ValidationError::new(Field::Id, Rule::MalformedId));
    }

    #[test]
    fn serializes_camel_case_with_string_id() {
        let c = Character::new(id(), ganondorf()).unwrap();
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["id"], "67e55044-10b1-426f-9247-bb680e5fe0c8");
        assert_eq!(json["musicUrl"], "https://www.youtube.com/watch?v=ganon");
        assert_eq!(json["pictureUrl"], "https://example.com/img/ganondorf.png");
        assert_eq!(json["releaseDate"], "1998");
        assert_eq!(json.as_object().unwrap().len(), 9);
    }

    #[test]
    fn deserializing_revalidates() {
        let c = Character::new(id(), ganondorf()).unwrap();
        let json = serde_json::to_string(&c).unwrap();
        let back: Character = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);

        let bad = serde_json::json!({
            "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
            "name": "Mario",
        });
        let err = serde_json::from_value::<Character>(bad).unwrap_err();
        assert!(err.to_string().contains("description is empty"));
    }

    #[test]
    fn new_character_missing_keys_default_to_empty() {
        let input: NewCharacter = serde_json::from_value(serde_json::json!({"name": "Kirby"})).unwrap();
        assert_eq!(input.name, "Kirby");
        assert!(input.song.is_empty());
    }

    #[test]
    fn round_trips_through_new_character() {
        let c = Character::new(id(), ganondorf()).unwrap();
        let again = Character::new(c.id(), NewCharacter::from(&c)).unwrap();
        assert_eq!(again, c);
    }

    // -- Re-hydration with whitespace control characters ---------------------

    #[test]
    fn control_whitespace_cannot_smuggle_a_tag_into_storage() {
        let input = NewCharacter {
            name: "A <\u{85}b> Z".into(),
            universe: "<\u{c}script>".into(),
            ..ganondorf()
        };
        let err = Character::new(id(), input).unwrap_err();
        assert_eq!(err, ValidationError::new(Field::Universe, Rule::Empty));
    }

    #[test]
    fn accepted_values_rehydrate_unchanged() {
        let edge_inputs = [
            "<\u{b}script>",
            "<\u{c}script>",
            "<\u{85}script>",
            "A <\u{85}b> Z",
            "Zelda\u{b}",
            "\u{c}Sheik <\u{c}",
            "1 <\u{b} 2",
            "Bowser\u{85}Jr <",
        ];
        for raw in edge_inputs {
            let input = NewCharacter {
                name: raw.into(),
                quotes: raw.into(),
                universe: raw.into(),
                ..ganondorf()
            };
            match Character::new(id(), input) {
                Ok(stored) => {
                    let again = Character::new(stored.id(), NewCharacter::from(&stored));
                    assert_eq!(again, Ok(stored.clone()), "input {raw:?}");
                    let json = serde_json::to_string(&stored).unwrap();
                    let decoded: Character = serde_json::from_str(&json).unwrap();
                    assert_eq!(decoded, stored, "input {raw:?}");
                }
                Err(err) => assert_eq!(err.rule, Rule::Empty, "input {raw:?}"),
            }
        }
    }
}
