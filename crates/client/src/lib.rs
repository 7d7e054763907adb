//! Client-side fighter listing.
//!
//! Fetches the full character set once per mount through a
//! [`CharacterSource`](source::CharacterSource), keeps it in an explicit
//! [`ListingState`](state::ListingState), and re-derives the rendered cards
//! from the current search text without further network calls.

pub mod card;
pub mod config;
pub mod error;
pub mod listing;
pub mod source;
pub mod state;
