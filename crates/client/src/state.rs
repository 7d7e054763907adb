use smashlore_core::character::Character;

use crate::error::ClientError;

/// Message shown when the character list cannot be fetched.
pub const FETCH_FAILED_MESSAGE: &str = "Could not load fighters. Please try again later.";

/// Lifecycle of the fetched character set.
///
/// `Idle -> Loading -> Loaded | Failed`. There is no transition out of
/// `Loaded` or `Failed`; a fresh mount starts from a fresh state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListingState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<Character>),
    Failed(String),
}

impl ListingState {
    /// The fetched characters, or an empty slice before a successful load.
    pub fn characters(&self) -> &[Character] {
        match self {
            ListingState::Loaded(characters) => characters,
            _ => &[],
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, ListingState::Loaded(_))
    }

    /// Move `Idle` to `Loading`. Returns `false` if a load was already
    /// started, in which case the caller must not fetch again.
    pub(crate) fn begin_load(&mut self) -> bool {
        if *self != ListingState::Idle {
            return false;
        }
        *self = ListingState::Loading;
        true
    }

    /// Record the outcome of the fetch started by [`begin_load`](Self::begin_load).
    pub(crate) fn finish_load(&mut self, result: Result<Vec<Character>, ClientError>) {
        *self = match result {
            Ok(characters) => {
                tracing::info!(count = characters.len(), "Fighters loaded");
                ListingState::Loaded(characters)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Fighter fetch failed");
                ListingState::Failed(FETCH_FAILED_MESSAGE.to_string())
            }
        };
    }
}
