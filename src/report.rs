use crate::scrape::ResultSet;

use polars::prelude::*;

/// All listings as one table, cheapest first.
pub fn summary(results: &ResultSet) -> PolarsResult<DataFrame> {
    let mut game: Vec<String> = vec![];
    let mut title: Vec<String> = vec![];
    let mut price: Vec<String> = vec![];
    let mut price_value: Vec<Option<f32>> = vec![];
    // null when the listing had no link at all
    let mut link: Vec<Option<String>> = vec![];

    for (name, listings) in results {
        for listing in listings {
            game.push(name.clone());
            title.push(listing.title.clone());
            price.push(listing.price.clone());
            price_value.push(listing.price_value());
            link.push(listing.has_link().then(|| listing.link.clone()));
        }
    }

    let df = DataFrame::new(vec![
        Series::new("game", &game),
        Series::new("title", &title),
        Series::new("price", &price),
        Series::new("price_value", &price_value),
        Series::new("link", &link),
    ])?;

    df.lazy()
        .sort("price_value", Default::default())
        .collect()
}
