//! Runs every query for every game and merges what comes back.

use crate::config::Config;
use crate::error::FetchError;
use crate::extract::parse_results;
use crate::fetch::{Fetch, HttpFetcher};
use crate::listing::Listing;
use crate::query::TargetItem;
use crate::BOARD_GAMES;

use indexmap::IndexMap;
use tracing::info;

/// Game name -> its listings, in the order the games were given.
pub type ResultSet = IndexMap<String, Vec<Listing>>;

/// One listing per title. A later listing replaces an earlier one with the
/// same title but keeps the position where that title was first seen.
pub fn dedup_by_title(listings: impl IntoIterator<Item = Listing>) -> Vec<Listing> {
    let mut by_title: IndexMap<String, Listing> = IndexMap::new();
    for listing in listings {
        by_title.insert(listing.title.clone(), listing);
    }
    by_title.into_values().collect()
}

pub async fn scrape_item<F: Fetch>(fetcher: &F, config: &Config, item: &TargetItem) -> Vec<Listing> {
    let mut all_listings = vec![];
    for query in item.queries() {
        // a failed fetch just adds nothing
        if let Some(content) = fetcher.fetch(query).await {
            let listings = parse_results(&content, item.name(), item.main_name(), &config.base_url);
            all_listings.extend(listings);
        }
    }
    dedup_by_title(all_listings)
}

/// Scrape the games one after the other. Every game gets an entry.
pub async fn scrape<F: Fetch>(fetcher: &F, config: &Config, items: &[TargetItem]) -> ResultSet {
    let mut results = ResultSet::new();
    for item in items {
        let listings = scrape_item(fetcher, config, item).await;
        info!(game = item.name(), count = listings.len(), "unique listings");
        results.insert(item.name().to_string(), listings);
    }
    results
}

pub fn board_games() -> Vec<TargetItem> {
    BOARD_GAMES.iter().map(|name| TargetItem::new(*name)).collect()
}

/// One full pass over the board game list against the live site.
pub async fn run(config: &Config) -> Result<ResultSet, FetchError> {
    let fetcher = HttpFetcher::new(config.clone())?;
    Ok(scrape(&fetcher, config, &board_games()).await)
}
