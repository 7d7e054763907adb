//! Repository for the `characters` table.

use smashlore_core::character::Character;
use smashlore_core::search::{contains_pattern, normalize_fragment};
use smashlore_core::types::CharacterId;
use sqlx::PgPool;

use crate::error::StoreError;
use crate::models::character::CharacterRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, description, music_url, name, picture_url, quotes, release_date, \
                       song, universe";

/// Insert and lookup operations for characters.
///
/// There is no update or delete: a character is written once and then
/// only read. Every fetched row is re-validated on the way out.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Insert a new character row keyed by its id.
    ///
    /// A duplicate id fails with [`StoreError::Conflict`]; the existing row
    /// is left untouched.
    pub async fn insert(pool: &PgPool, character: &Character) -> Result<(), StoreError> {
        let query = format!(
            "INSERT INTO characters ({COLUMNS})
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)"
        );
        sqlx::query(&query)
            .bind(character.id())
            .bind(character.description())
            .bind(character.music_url())
            .bind(character.name())
            .bind(character.picture_url())
            .bind(character.quotes())
            .bind(character.release_date())
            .bind(character.song())
            .bind(character.universe())
            .execute(pool)
            .await?;
        tracing::debug!(id = %character.id(), name = character.name(), "Inserted character");
        Ok(())
    }

    /// Find a character by id. Absence is `Ok(None)`.
    pub async fn find_by_id(
        pool: &PgPool,
        id: CharacterId,
    ) -> Result<Option<Character>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE id = $1");
        let row = sqlx::query_as::<_, CharacterRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        row.map(CharacterRow::into_character).transpose()
    }

    /// Find the first character whose name equals `name` after sanitization.
    ///
    /// A name that sanitizes to nothing cannot match any stored row, so no
    /// query is issued.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Character>, StoreError> {
        let name = normalize_fragment(name);
        if name.is_empty() {
            return Ok(None);
        }
        let query = format!("SELECT {COLUMNS} FROM characters WHERE name = $1 LIMIT 1");
        let row = sqlx::query_as::<_, CharacterRow>(&query)
            .bind(&name)
            .fetch_optional(pool)
            .await?;
        row.map(CharacterRow::into_character).transpose()
    }

    /// Case-insensitive substring search on name. `%` and `_` match literally.
    pub async fn search_by_name(
        pool: &PgPool,
        fragment: &str,
    ) -> Result<Vec<Character>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE name ILIKE $1 ESCAPE '\\'");
        Self::fetch_many(pool, &query, Some(contains_pattern(fragment))).await
    }

    /// Case-insensitive substring search on universe. `%` and `_` match literally.
    pub async fn search_by_universe(
        pool: &PgPool,
        fragment: &str,
    ) -> Result<Vec<Character>, StoreError> {
        let query =
            format!("SELECT {COLUMNS} FROM characters WHERE universe ILIKE $1 ESCAPE '\\'");
        Self::fetch_many(pool, &query, Some(contains_pattern(fragment))).await
    }

    /// Every character, in storage iteration order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Character>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM characters");
        Self::fetch_many(pool, &query, None).await
    }

    /// Number of stored characters. Touches the table without hydrating rows.
    pub async fn count(pool: &PgPool) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM characters")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Run a multi-row query with an optional single text parameter and
    /// hydrate every row. One bad row fails the whole read.
    async fn fetch_many(
        pool: &PgPool,
        query: &str,
        param: Option<String>,
    ) -> Result<Vec<Character>, StoreError> {
        let mut q = sqlx::query_as::<_, CharacterRow>(query);
        if let Some(param) = param {
            q = q.bind(param);
        }
        let rows = q.fetch_all(pool).await?;
        rows.into_iter().map(CharacterRow::into_character).collect()
    }
}
