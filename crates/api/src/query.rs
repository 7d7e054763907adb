//! Query parameter types for API handlers.

use serde::Deserialize;

use crate::error::AppError;

/// Lookup parameters accepted by `GET /characters`.
///
/// At most one may be supplied; none means "list everything".
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterLookupParams {
    pub name: Option<String>,
    pub name_contains: Option<String>,
    pub universe_contains: Option<String>,
}

/// The single lookup a set of [`CharacterLookupParams`] resolves to.
#[derive(Debug, PartialEq, Eq)]
pub enum CharacterLookup {
    All,
    ExactName(String),
    NameContains(String),
    UniverseContains(String),
}

impl TryFrom<CharacterLookupParams> for CharacterLookup {
    type Error = AppError;

    fn try_from(params: CharacterLookupParams) -> Result<Self, Self::Error> {
        let CharacterLookupParams {
            name,
            name_contains,
            universe_contains,
        } = params;

        match (name, name_contains, universe_contains) {
            (None, None, None) => Ok(CharacterLookup::All),
            (Some(name), None, None) => Ok(CharacterLookup::ExactName(name)),
            (None, Some(fragment), None) => Ok(CharacterLookup::NameContains(fragment)),
            (None, None, Some(fragment)) => Ok(CharacterLookup::UniverseContains(fragment)),
            _ => Err(AppError::BadRequest(
                "Only one of name, nameContains, universeContains may be given".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn no_params_lists_all() {
        let lookup = CharacterLookup::try_from(CharacterLookupParams::default()).unwrap();
        assert_eq!(lookup, CharacterLookup::All);
    }

    #[test]
    fn single_param_selects_lookup() {
        let params = CharacterLookupParams {
            universe_contains: Some("zelda".into()),
            ..Default::default()
        };
        assert_eq!(
            CharacterLookup::try_from(params).unwrap(),
            CharacterLookup::UniverseContains("zelda".into())
        );
    }

    #[test]
    fn combined_params_are_rejected() {
        let params = CharacterLookupParams {
            name: Some("Link".into()),
            name_contains: Some("Li".into()),
            universe_contains: None,
        };
        assert_matches!(
            CharacterLookup::try_from(params),
            Err(AppError::BadRequest(_))
        );
    }
}
