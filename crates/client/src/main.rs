//! `fighter-selection` -- print the fighter selection grid.
//!
//! Fetches every character from the catalog API once, filters by the
//! search word given as the first argument, and prints one card per line.
//!
//! # Environment variables
//!
//! | Variable              | Required | Default                 |
//! |-----------------------|----------|-------------------------|
//! | `API_BASE_URL`        | no       | `http://localhost:3000` |
//! | `CLIENT_TIMEOUT_SECS` | no       | `10`                    |

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use smashlore_client::config::ClientConfig;
use smashlore_client::listing::{FighterListing, ListingView};
use smashlore_client::source::HttpCharacterSource;
use smashlore_client::state::ListingState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "smashlore_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ClientConfig::from_env();
    let search_word = std::env::args().nth(1).unwrap_or_default();
    tracing::info!(base_url = %config.base_url, search_word = %search_word, "Starting fighter-selection");

    let source = HttpCharacterSource::new(&config).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to build HTTP client");
        std::process::exit(1);
    });

    let mut listing = FighterListing::new(ListingState::default());
    listing.mount(&source).await;
    listing.set_search_word(search_word);

    match listing.render() {
        ListingView::Cards(cards) => {
            println!("CHOOSE YOUR FIGHTER:");
            for card in cards {
                println!("{card}");
            }
        }
        ListingView::Failed { message } => {
            eprintln!("{message}");
            std::process::exit(1);
        }
        ListingView::Loading => {}
    }
}
