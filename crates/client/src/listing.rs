//! The fighter selection list with its search box.

use smashlore_core::character::Character;
use smashlore_core::search::filter_by_name;

use crate::card::FighterCard;
use crate::source::CharacterSource;
use crate::state::ListingState;

/// What the listing shows right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingView {
    Loading,
    Cards(Vec<FighterCard>),
    Failed { message: String },
}

/// Fighter list view over an injected [`ListingState`].
///
/// [`mount`](Self::mount) performs the one fetch. Changing the search word
/// only narrows what [`visible`](Self::visible) and [`render`](Self::render)
/// return; the fetched set is kept whole.
#[derive(Debug, Default)]
pub struct FighterListing {
    state: ListingState,
    search_word: String,
}

impl FighterListing {
    pub fn new(state: ListingState) -> Self {
        Self {
            state,
            search_word: String::new(),
        }
    }

    /// Fetch the character set if this state has not started a load yet.
    ///
    /// Dropping the returned future before it resolves leaves the state in
    /// `Loading` and discards the result.
    pub async fn mount(&mut self, source: &dyn CharacterSource) {
        if !self.state.begin_load() {
            tracing::debug!("Listing already mounted, skipping fetch");
            return;
        }
        let result = source.fetch_all().await;
        self.state.finish_load(result);
    }

    pub fn set_search_word(&mut self, word: impl Into<String>) {
        self.search_word = word.into();
    }

    pub fn search_word(&self) -> &str {
        &self.search_word
    }

    pub fn state(&self) -> &ListingState {
        &self.state
    }

    /// Hand the state back, e.g. to another view.
    pub fn into_state(self) -> ListingState {
        self.state
    }

    /// Characters whose name matches the search word, in fetch order.
    pub fn visible(&self) -> Vec<&Character> {
        filter_by_name(self.state.characters(), &self.search_word)
    }

    pub fn render(&self) -> ListingView {
        match &self.state {
            ListingState::Idle | ListingState::Loading => ListingView::Loading,
            ListingState::Failed(message) => ListingView::Failed {
                message: message.clone(),
            },
            ListingState::Loaded(_) => ListingView::Cards(
                self.visible().into_iter().map(FighterCard::from).collect(),
            ),
        }
    }
}
