//! Substring search helpers.
//!
//! Lives in `core` so both the repository layer (SQL `ILIKE` patterns)
//! and the client listing view (in-memory name filter) share one notion
//! of what a search fragment matches.

use crate::character::Character;
use crate::sanitize::sanitize_text;

/// Escape character used in `ILIKE ... ESCAPE` clauses.
pub const LIKE_ESCAPE: char = '\\';

/// Clean a user-supplied search fragment the same way free-text fields are cleaned.
pub fn normalize_fragment(raw: &str) -> String {
    sanitize_text(raw)
}

/// Escape `LIKE` metacharacters so `%` and `_` match literally.
///
/// # Examples
///
/// ```
/// use smashlore_core::search::escape_like;
/// assert_eq!(escape_like("100%_real"), r"100\%\_real");
/// ```
pub fn escape_like(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len());
    for c in fragment.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            out.push(LIKE_ESCAPE);
        }
        out.push(c);
    }
    out
}

/// Build a `%fragment%` pattern with the fragment normalized and escaped.
///
/// An empty fragment yields `%%`, which matches every row.
pub fn contains_pattern(raw: &str) -> String {
    format!("%{}%", escape_like(&normalize_fragment(raw)))
}

/// Case-insensitive containment of `search` in `name`.
///
/// Empty (or whitespace-only) search text matches everything.
pub fn name_matches(name: &str, search: &str) -> bool {
    let needle = search.trim();
    if needle.is_empty() {
        return true;
    }
    name.to_lowercase().contains(&needle.to_lowercase())
}

/// Filter characters by name, keeping the input order.
pub fn filter_by_name<'a>(characters: &'a [Character], search: &str) -> Vec<&'a Character> {
    characters
        .iter()
        .filter(|c| name_matches(c.name(), search))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::NewCharacter;
    use crate::types::new_character_id;

    fn character(name: &str) -> Character {
        Character::new(
            new_character_id(),
            NewCharacter {
                description: "A fighter.".into(),
                music_url: "https://example.com/music".into(),
                name: name.into(),
                picture_url: "https://example.com/pic.png".into(),
                quotes: "Hi!".into(),
                release_date: "2001".into(),
                song: "Theme".into(),
                universe: "Smash".into(),
            },
        )
        .unwrap()
    }

    // -- escape_like ---------------------------------------------------------

    #[test]
    fn escape_like_escapes_wildcards_and_backslash() {
        assert_eq!(escape_like(r"a%b_c\d"), r"a\%b\_c\\d");
    }

    #[test]
    fn escape_like_leaves_plain_text() {
        assert_eq!(escape_like("Donkey Kong"), "Donkey Kong");
    }

    // -- contains_pattern ----------------------------------------------------

    #[test]
    fn contains_pattern_wraps_and_normalizes() {
        assert_eq!(contains_pattern("  <b>zel</b> "), "%zel%");
        assert_eq!(contains_pattern("50%"), r"%50\%%");
    }

    #[test]
    fn contains_pattern_empty_matches_all() {
        assert_eq!(contains_pattern("   "), "%%");
    }

    // -- name_matches --------------------------------------------------------

    #[test]
    fn name_matches_is_case_insensitive() {
        assert!(name_matches("Ganondorf", "gan"));
        assert!(name_matches("Ganondorf", "DORF"));
        assert!(!name_matches("Ganondorf", "link"));
    }

    #[test]
    fn empty_search_matches_everything() {
        assert!(name_matches("Pikachu", ""));
        assert!(name_matches("Pikachu", "   "));
    }

    #[test]
    fn wildcard_characters_are_literal() {
        assert!(!name_matches("Mr. Game & Watch", "%"));
        assert!(name_matches("Mr_Game", "_g"));
    }

    // -- filter_by_name ------------------------------------------------------

    #[test]
    fn filter_keeps_fetch_order() {
        let all = vec![character("Ganondorf"), character("Link"), character("Ganon Jr")];
        let names: Vec<_> = filter_by_name(&all, "GAN").iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Ganondorf", "Ganon Jr"]);
    }

    #[test]
    fn filter_with_empty_search_returns_full_set() {
        let all = vec![character("Ness"), character("Lucas")];
        assert_eq!(filter_by_name(&all, "").len(), 2);
    }
}
