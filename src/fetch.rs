//! Getting search pages off the site.

use crate::config::Config;
use crate::error::FetchError;
use crate::query::search_url;
use crate::scraper_utils::throttle;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};
use reqwest::Client;
use tracing::{debug, error, info, warn};

/// Something that turns a query into a search page.
///
/// `None` means there is nothing for this query; failures are reported
/// by the implementation and never passed on.
#[allow(async_fn_in_trait)]
pub trait Fetch {
    async fn fetch(&self, query: &str) -> Option<String>;
}

pub struct HttpFetcher {
    client: Client,
    config: Config,
}

impl HttpFetcher {
    pub fn new(config: Config) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_str(&config.accept_language)?,
        );

        // We can scrape the site with a stays-alive connection
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(HttpFetcher { client, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    async fn get(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        let content = response.text().await?;
        debug!(bytes = content.len(), %status, "got search page");

        throttle(self.config.request_delay).await;
        Ok(content)
    }
}

impl Fetch for HttpFetcher {
    async fn fetch(&self, query: &str) -> Option<String> {
        let url = search_url(&self.config, query);
        info!("Search request URL: {url}");

        match self.get(&url).await {
            Ok(content) => Some(content),
            Err(FetchError::Timeout) => {
                warn!("Request timed out for {query}");
                None
            }
            Err(problem) => {
                error!("Request failed for {query}: {problem}");
                None
            }
        }
    }
}
