use std::time::Duration;

use scraper::{ElementRef, Selector};

// Convience function to avoid unwrap()ing all the time
pub fn make_selector(selector: &str) -> Selector {
    Selector::parse(selector).expect("A Selector from the parsed &str.")
}

// Add a delay after a request so as not to overload the server
pub async fn throttle(delay: Duration) {
    tokio::time::sleep(delay).await;
}

/// All text under an element with every text node trimmed, glued together.
pub fn element_text(element: ElementRef) -> String {
    element.text().map(str::trim).collect::<String>()
}

/// Turn a site relative path into a full url; anything else is left alone.
pub fn absolute_url(base_url: &str, href: &str) -> String {
    if href.starts_with('/') {
        format!("{base_url}{href}")
    } else {
        href.to_string()
    }
}
