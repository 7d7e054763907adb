use std::fmt;

use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with {lookup}")]
    NotFound {
        entity: &'static str,
        lookup: String,
    },

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// The character field a validation rule applies to.
///
/// Serializes to the field's JSON key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Id,
    Description,
    MusicUrl,
    Name,
    PictureUrl,
    Quotes,
    ReleaseDate,
    Song,
    Universe,
}

impl Field {
    /// The JSON key for this field.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Description => "description",
            Field::MusicUrl => "musicUrl",
            Field::Name => "name",
            Field::PictureUrl => "pictureUrl",
            Field::Quotes => "quotes",
            Field::ReleaseDate => "releaseDate",
            Field::Song => "song",
            Field::Universe => "universe",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The rule a field value violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Nothing left after trimming and sanitization.
    Empty,
    /// Longer than the field's bound, in characters.
    TooLong { max: usize, actual: usize },
    /// Not a syntactically valid absolute URL.
    InvalidUrl,
    /// Identifier is not a valid UUID string.
    MalformedId,
}

impl Rule {
    /// Stable machine-readable code used in API error bodies.
    pub fn code(self) -> &'static str {
        match self {
            Rule::Empty => "empty",
            Rule::TooLong { .. } => "too_long",
            Rule::InvalidUrl => "invalid_url",
            Rule::MalformedId => "malformed_id",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Empty => f.write_str("is empty or insecure"),
            Rule::TooLong { max, actual } => {
                write!(f, "must be {max} characters or fewer (got {actual})")
            }
            Rule::InvalidUrl => f.write_str("is not a valid URL"),
            Rule::MalformedId => f.write_str("is not a valid UUID"),
        }
    }
}

/// A single field failing a single rule.
///
/// Record construction stops at the first of these, so a caller only
/// ever sees one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{field} {rule}")]
pub struct ValidationError {
    pub field: Field,
    pub rule: Rule,
}

impl ValidationError {
    pub fn new(field: Field, rule: Rule) -> Self {
        Self { field, rule }
    }

    /// `true` for malformed identifier syntax.
    pub fn is_format_error(&self) -> bool {
        matches!(self.rule, Rule::MalformedId)
    }
}
