//! Liveness of the catalog: the service answers and the `characters` table
//! can be queried.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use smashlore_db::repositories::CharacterRepo;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when the character table answered, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Stored character count; absent when the table could not be read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_count: Option<i64>,
}

/// GET /health
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let character_count = match CharacterRepo::count(&state.pool).await {
        Ok(count) => Some(count),
        Err(e) => {
            tracing::warn!(error = %e, "Character table unreachable");
            None
        }
    };
    let db_healthy = character_count.is_some();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        character_count,
    })
}

/// Health routes, merged at the root rather than under `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
