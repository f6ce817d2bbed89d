use thiserror::Error;

/// Errors that abort a harvest run
#[derive(Error, Debug)]
pub enum HarvestError {
    /// Transport-level failure (connect, TLS, body read, timeout)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// An element the page is expected to carry was not found
    #[error("Missing `{selector}` in {context}")]
    Parse {
        selector: &'static str,
        context: String,
    },

    /// A link pointed outside the configured scope
    #[error("Refusing to follow out-of-scope link: {0}")]
    OutOfScope(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Invalid configuration value: {0}")]
    InvalidConfig(String),

    #[error("Invalid link pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl HarvestError {
    pub(crate) fn missing(selector: &'static str, context: impl Into<String>) -> Self {
        Self::Parse {
            selector,
            context: context.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HarvestError>;
