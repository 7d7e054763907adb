//! Handlers for the `/characters` resource.
//!
//! Characters are write-once: there is a create endpoint and several read
//! shapes, but no update or delete.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use smashlore_core::character::{Character, NewCharacter};
use smashlore_core::error::CoreError;
use smashlore_core::types::{new_character_id, parse_character_id};
use smashlore_db::repositories::CharacterRepo;

use crate::error::{AppError, AppResult};
use crate::query::{CharacterLookup, CharacterLookupParams};
use crate::state::AppState;

/// POST /api/v1/characters
///
/// The server assigns the id. The body is validated in full before any
/// database call; an undecodable body is a `BAD_REQUEST`.
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewCharacter>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Character>)> {
    let Json(input) = body?;
    let character = Character::new(new_character_id(), input)?;
    CharacterRepo::insert(&state.pool, &character).await?;
    tracing::info!(id = %character.id(), name = character.name(), "Character created");
    Ok((StatusCode::CREATED, Json(character)))
}

/// GET /api/v1/characters[?name=|?nameContains=|?universeContains=]
///
/// `name` is an exact lookup returning a single object (or 404); the other
/// forms return arrays.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<CharacterLookupParams>,
) -> AppResult<Response> {
    let response = match CharacterLookup::try_from(params)? {
        CharacterLookup::All => Json(CharacterRepo::list_all(&state.pool).await?).into_response(),
        CharacterLookup::ExactName(name) => {
            let character = CharacterRepo::find_by_name(&state.pool, &name)
                .await?
                .ok_or_else(|| {
                    AppError::Core(CoreError::NotFound {
                        entity: "Character",
                        lookup: format!("name '{name}'"),
                    })
                })?;
            Json(character).into_response()
        }
        CharacterLookup::NameContains(fragment) => {
            Json(CharacterRepo::search_by_name(&state.pool, &fragment).await?).into_response()
        }
        CharacterLookup::UniverseContains(fragment) => {
            Json(CharacterRepo::search_by_universe(&state.pool, &fragment).await?)
                .into_response()
        }
    };
    Ok(response)
}

/// GET /api/v1/characters/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Character>> {
    let id = parse_character_id(&raw_id)?;
    let character = CharacterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            lookup: format!("id {id}"),
        }))?;
    Ok(Json(character))
}
