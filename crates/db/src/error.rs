use smashlore_core::error::ValidationError;
use smashlore_core::types::CharacterId;

/// PostgreSQL SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// Errors surfaced by the repository layer.
///
/// Validation of caller input happens before any repository call, so the
/// only validation failure that can appear here is a stored row that no
/// longer passes the record rules.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A write violated a uniqueness constraint.
    #[error("Conflict: {message}")]
    Conflict {
        message: String,
        #[source]
        source: sqlx::Error,
    },

    /// A fetched row could not be turned back into a valid record.
    #[error("Stored character {id} is invalid: {source}")]
    Hydration {
        id: CharacterId,
        #[source]
        source: ValidationError,
    },

    /// Any other database failure (connectivity, syntax, constraint).
    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
                let constraint = db_err.constraint().unwrap_or("unknown");
                return StoreError::Conflict {
                    message: format!("Duplicate value violates unique constraint: {constraint}"),
                    source: err,
                };
            }
        }
        StoreError::Database(err)
    }
}
