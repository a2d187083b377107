//! Site constants for the marktplaats search.

use std::time::Duration;

pub const BASE_URL: &str = "https://www.marktplaats.nl";
pub const SEARCH_URL_PATTERN: &str = "https://www.marktplaats.nl/q/{query}";
pub const QUERY_SUFFIX: &str = "bordspel";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/116.0.0.0 Safari/537.36";
pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
// only there to keep the request rate down
pub const REQUEST_DELAY: Duration = Duration::from_millis(500);

/// Everything the fetcher and extractor need to know about the site.
#[derive(Debug, Clone)]
pub struct Config {
    /// scheme + host, prefixed to relative links
    pub base_url: String,
    /// search URL with a `{query}` placeholder
    pub search_url_pattern: String,
    /// word appended to every query
    pub query_suffix: String,
    pub user_agent: String,
    pub accept_language: String,
    pub timeout: Duration,
    /// pause after every successful request
    pub request_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: BASE_URL.to_string(),
            search_url_pattern: SEARCH_URL_PATTERN.to_string(),
            query_suffix: QUERY_SUFFIX.to_string(),
            user_agent: USER_AGENT.to_string(),
            accept_language: ACCEPT_LANGUAGE.to_string(),
            timeout: REQUEST_TIMEOUT,
            request_delay: REQUEST_DELAY,
        }
    }
}
