use smashlore_db::DbPool;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Server configuration is consumed while the router is built and is not
/// carried here.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: DbPool,
}
