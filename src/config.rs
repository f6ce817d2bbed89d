use crate::error::{HarvestError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Environment variable that overrides [`HarvestConfig::base_url`]
pub const BASE_URL_ENV: &str = "QUOTES_BASE_URL";

/// How the collector decides that the listing is exhausted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Termination {
    /// Follow the page's "next" control; stop when it is absent
    #[default]
    Link,
    /// Request `page/<n>/` for n = first_page, first_page + 1, ...; stop at the first empty page
    Probe,
}

/// Configuration for a harvest run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestConfig {
    /// Root of the quote site; the first listing page in link mode
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Pagination termination policy
    #[serde(default)]
    pub termination: Termination,

    /// Page number of the first listing page in probe mode
    #[serde(default = "default_first_page")]
    pub first_page: u32,

    /// Hard cap on listing pages fetched
    #[serde(default)]
    pub max_pages: Option<u32>,

    /// Pause between page requests (listing and author pages)
    #[serde(default)]
    pub delay_ms: Option<u64>,

    /// Per-request timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Only follow links on the same host as `base_url`
    #[serde(default = "default_same_site_only")]
    pub same_site_only: bool,
}

fn default_base_url() -> String {
    "https://quotes.toscrape.com/".to_string()
}

fn default_first_page() -> u32 {
    1
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("quote-pages/{}", env!("CARGO_PKG_VERSION"))
}

fn default_same_site_only() -> bool {
    true
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            termination: Termination::default(),
            first_page: default_first_page(),
            max_pages: None,
            delay_ms: None,
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            same_site_only: default_same_site_only(),
        }
    }
}

impl HarvestConfig {
    /// Create a configuration rooted at `base_url` with default values
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Apply environment overrides
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            if !base_url.is_empty() {
                ::log::debug!("{} overrides base URL with {}", BASE_URL_ENV, base_url);
                self.base_url = base_url;
            }
        }
        self
    }

    /// Parsed base URL
    ///
    /// A missing trailing slash is added so that relative joins such as
    /// `page/2/` stay below the configured root.
    pub fn base(&self) -> Result<Url> {
        let mut base = Url::parse(&self.base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(base)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn delay(&self) -> Option<Duration> {
        self.delay_ms.map(Duration::from_millis)
    }

    /// Reject values that would make a run meaningless
    pub fn validate(&self) -> Result<()> {
        self.base()?;
        if self.max_pages == Some(0) {
            return Err(invalid("max_pages must be at least 1"));
        }
        if self.timeout_secs == 0 {
            return Err(invalid("timeout_secs must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(message: &str) -> HarvestError {
    HarvestError::InvalidConfig(message.to_string())
}
