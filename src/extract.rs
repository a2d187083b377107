//! Pulls listings out of a search result page and keeps the ones about the game.

use crate::listing::{Listing, NO_LINK, NO_PRICE, NO_TITLE};
use crate::scraper_utils::{absolute_url, element_text, make_selector};

use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};

lazy_static! {
    // create selectors
    // the exact class string; listings with extra classes (ads, featured) are skipped
    static ref LISTING: Selector = make_selector(r#"li[class="hz-Listing hz-Listing--list-item"]"#);
    static ref H3: Selector = make_selector("h3");
    static ref PRICE: Selector = make_selector("span.hz-Listing-price");
    static ref DESCRIPTION: Selector = make_selector("p.hz-Listing-description");
    static ref COVER_LINK: Selector = make_selector("a.hz-Link.hz-Listing-coverLink[href]");
    static ref ANY_LINK: Selector = make_selector("a[href]");
}

/// Lowercase and drop every ':'.
pub fn normalize(text: &str) -> String {
    text.to_lowercase().replace(':', "")
}

/// Decides whether a listing is about a game, by its full or main name.
pub struct Matcher {
    full_name: String,
    main_name: String,
}

impl Matcher {
    pub fn new(full_name: &str, main_name: &str) -> Self {
        Matcher {
            full_name: normalize(full_name),
            main_name: normalize(main_name),
        }
    }

    pub fn matches(&self, title: &str, description: &str) -> bool {
        let title = normalize(title);
        let description = normalize(description);
        [&self.full_name, &self.main_name]
            .iter()
            .any(|name| title.contains(name.as_str()) || description.contains(name.as_str()))
    }
}

/// Where a listing's link can come from, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkSource {
    CoverLink,
    FirstAnchor,
    DataUrl,
}

impl LinkSource {
    pub const ORDER: [LinkSource; 3] = [
        LinkSource::CoverLink,
        LinkSource::FirstAnchor,
        LinkSource::DataUrl,
    ];

    fn resolve(self, node: ElementRef, base_url: &str) -> Option<String> {
        let href = match self {
            LinkSource::CoverLink => node.select(&COVER_LINK).next()?.value().attr("href"),
            LinkSource::FirstAnchor => node.select(&ANY_LINK).next()?.value().attr("href"),
            LinkSource::DataUrl => {
                // data-url is always a path on the site; an empty one is no link, not the bare site root
                let path = node.value().attr("data-url").filter(|path| !path.is_empty())?;
                return Some(format!("{base_url}{path}"));
            }
        }?;
        if href.is_empty() {
            None
        } else {
            Some(absolute_url(base_url, href))
        }
    }
}

/// Try each link source in order; NO_LINK when none has one.
pub fn resolve_link(node: ElementRef, base_url: &str) -> String {
    LinkSource::ORDER
        .iter()
        .find_map(|source| source.resolve(node, base_url))
        .unwrap_or_else(|| NO_LINK.to_string())
}

fn first_text(node: ElementRef, selector: &Selector) -> Option<String> {
    node.select(selector).next().map(element_text)
}

/// Parse a search page and return the listings matching the full or main name.
pub fn parse_results(html: &str, full_name: &str, main_name: &str, base_url: &str) -> Vec<Listing> {
    let document = Html::parse_document(html);
    let matcher = Matcher::new(full_name, main_name);

    let mut results = vec![];
    for node in document.select(&LISTING) {
        let title = first_text(node, &H3).unwrap_or_else(|| NO_TITLE.to_string());
        let price = first_text(node, &PRICE).unwrap_or_else(|| NO_PRICE.to_string());
        let description = first_text(node, &DESCRIPTION).unwrap_or_default();

        if !matcher.matches(&title, &description) {
            debug!(%title, "skipping unrelated listing");
            continue;
        }

        results.push(Listing {
            link: resolve_link(node, base_url),
            title,
            price,
            description,
        });
    }

    info!("Found {} results for: {}", results.len(), full_name);
    for listing in &results {
        info!(
            title = %listing.title,
            price = %listing.price,
            description = %listing.description,
            link = %listing.link,
            "listing"
        );
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://www.marktplaats.nl";

    fn page(listings: &str) -> String {
        format!("<html><body><ul class=\"hz-Listings\">{listings}</ul></body></html>")
    }

    fn first_node_link(listing: &str) -> String {
        let document = Html::parse_document(&page(listing));
        let node = document.select(&LISTING).next().expect("A listing node.");
        resolve_link(node, BASE)
    }

    #[test]
    fn matching_ignores_case_and_colons() {
        let matcher = Matcher::new("Catan: Zeevaarders", "Catan");
        assert!(matcher.matches("CATAN zeevaarders uitbreiding", ""));
        assert!(matcher.matches("Spellenpakket", "met o.a. catan"));
        assert!(!matcher.matches("Monopoly", "klassieker"));
    }

    #[test]
    fn full_name_with_colon_matches_title_without_one() {
        let matcher = Matcher::new("Dominion: Intrige", "Dominion");
        assert!(matcher.matches("dominion intrige", ""));
    }

    #[test]
    fn listing_without_price_or_description_gets_defaults() {
        let html = page(
            r#"<li class="hz-Listing hz-Listing--list-item">
                <h3 class="hz-Listing-title">Gesjaakt (bordspel)</h3>
            </li>"#,
        );
        let results = parse_results(&html, "Gesjaakt", "Gesjaakt", BASE);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Gesjaakt (bordspel)");
        assert_eq!(results[0].price, NO_PRICE);
        assert_eq!(results[0].description, "");
        assert_eq!(results[0].link, NO_LINK);
    }

    #[test]
    fn fields_are_extracted() {
        let html = page(
            r#"<li class="hz-Listing hz-Listing--list-item">
                <a class="hz-Link hz-Listing-coverLink" href="/v/spellen/m123-gesjaakt">
                    <h3 class="hz-Listing-title"> Gesjaakt </h3>
                </a>
                <p class="hz-Listing-description">Compleet, <b>nauwelijks</b> gespeeld</p>
                <span class="hz-Listing-price hz-text-price-label">€ 7,50</span>
            </li>"#,
        );
        let results = parse_results(&html, "Gesjaakt", "Gesjaakt", BASE);
        assert_eq!(
            results,
            vec![Listing {
                title: "Gesjaakt".to_string(),
                price: "€ 7,50".to_string(),
                description: "Compleet,nauwelijksgespeeld".to_string(),
                link: "https://www.marktplaats.nl/v/spellen/m123-gesjaakt".to_string(),
            }]
        );
    }

    #[test]
    fn unrelated_listings_are_dropped() {
        let html = page(
            r#"<li class="hz-Listing hz-Listing--list-item"><h3>Monopoly</h3></li>
               <li class="hz-Listing hz-Listing--list-item">
                   <h3>Kaartspel</h3>
                   <p class="hz-Listing-description">Gesjaakt van 999 games</p>
               </li>"#,
        );
        let results = parse_results(&html, "Gesjaakt", "Gesjaakt", BASE);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Kaartspel");
    }

    #[test]
    fn listing_without_title_only_matches_on_description() {
        let html = page(
            r#"<li class="hz-Listing hz-Listing--list-item">
                <p class="hz-Listing-description">gesjaakt</p>
            </li>"#,
        );
        let results = parse_results(&html, "Gesjaakt", "Gesjaakt", BASE);
        assert_eq!(results[0].title, NO_TITLE);
    }

    #[test]
    fn nodes_outside_the_listing_list_are_ignored() {
        let html = page(r#"<li class="hz-Listing"><h3>Gesjaakt</h3></li>"#);
        assert!(parse_results(&html, "Gesjaakt", "Gesjaakt", BASE).is_empty());
    }

    #[test]
    fn listings_with_extra_classes_are_ignored() {
        let html = page(
            r#"<li class="hz-Listing hz-Listing--list-item hz-Listing--cas"><h3>Gesjaakt</h3></li>
               <li class="hz-Listing hz-Listing--list-item"><h3>Gesjaakt compleet</h3></li>"#,
        );
        let results = parse_results(&html, "Gesjaakt", "Gesjaakt", BASE);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Gesjaakt compleet");
    }

    #[test]
    fn cover_link_wins() {
        let link = first_node_link(
            r#"<li class="hz-Listing hz-Listing--list-item" data-url="/v/3">
                <a href="/v/2">seller</a>
                <a class="hz-Link hz-Listing-coverLink" href="/v/1">cover</a>
            </li>"#,
        );
        assert_eq!(link, "https://www.marktplaats.nl/v/1");
    }

    #[test]
    fn first_anchor_when_no_cover_link() {
        let link = first_node_link(
            r#"<li class="hz-Listing hz-Listing--list-item" data-url="/v/3">
                <a href="https://www.example.com/shop">shop</a>
                <a href="/v/2">other</a>
            </li>"#,
        );
        assert_eq!(link, "https://www.example.com/shop");
    }

    #[test]
    fn empty_cover_href_falls_through() {
        let link = first_node_link(
            r#"<li class="hz-Listing hz-Listing--list-item" data-url="/v/3">
                <a class="hz-Link hz-Listing-coverLink" href="">cover</a>
            </li>"#,
        );
        assert_eq!(link, "https://www.marktplaats.nl/v/3");
    }

    #[test]
    fn data_url_as_last_resort() {
        let link = first_node_link(
            r#"<li class="hz-Listing hz-Listing--list-item" data-url="/v/12345"><a>no href</a></li>"#,
        );
        assert_eq!(link, "https://www.marktplaats.nl/v/12345");
    }

    #[test]
    fn no_link_anywhere() {
        let link =
            first_node_link(r#"<li class="hz-Listing hz-Listing--list-item" data-url=""></li>"#);
        assert_eq!(link, NO_LINK);
    }
}
