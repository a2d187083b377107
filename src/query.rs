use crate::config::Config;
use url::form_urlencoded;

// a board game we search for; names like "Catan: Zeevaarders" also get searched by their main name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetItem {
    name: String,
}

impl TargetItem {
    pub fn new(name: impl Into<String>) -> Self {
        TargetItem { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The trimmed part before the first ':', or the whole trimmed name.
    pub fn main_name(&self) -> &str {
        self.name
            .split_once(':')
            .map_or(self.name.as_str(), |(main, _)| main)
            .trim()
    }

    // full name first, then the main name
    pub fn queries(&self) -> Vec<&str> {
        if self.name.contains(':') {
            vec![self.name(), self.main_name()]
        } else {
            vec![self.name()]
        }
    }
}

/// Build the search url for one query, suffix included.
pub fn search_url(config: &Config, query: &str) -> String {
    let term = format!("{} {}", query, config.query_suffix);
    let encoded: String = form_urlencoded::byte_serialize(term.as_bytes()).collect();
    config.search_url_pattern.replace("{query}", &encoded)
}
