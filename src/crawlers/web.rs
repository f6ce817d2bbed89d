use crate::config::HarvestConfig;
use crate::crawlers::crawler::Fetcher;
use crate::error::{HarvestError, Result};
use reqwest::Client;
use url::Url;

/// Fetches pages over HTTP with a shared connection pool
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher using the timeout and user agent from `config`
    pub fn new(config: &HarvestConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()?;

        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<String> {
        let start = std::time::Instant::now();
        ::log::debug!("GET {}", url);

        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            ::log::error!("Failed to fetch {}: HTTP {}", url, status);
            return Err(HarvestError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;

        ::log::debug!(
            "Fetched {} ({} bytes) in {:.2} seconds",
            url,
            body.len(),
            start.elapsed().as_secs_f64()
        );

        Ok(body)
    }
}
