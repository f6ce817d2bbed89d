use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

/// Rules deciding which links a harvest may follow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkScopeConfig {
    /// Host every followed link must share (if None, any host is allowed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_host: Option<String>,

    /// Regex patterns for URLs never to follow
    #[serde(default)]
    pub exclude_patterns: Vec<String>,
}

impl Default for LinkScopeConfig {
    fn default() -> Self {
        Self {
            required_host: None,
            exclude_patterns: vec![default_asset_pattern()],
        }
    }
}

/// Static assets are never pages
fn default_asset_pattern() -> String {
    r"\.(jpg|jpeg|png|gif|css|js|ico|svg|woff|woff2|ttf|eot|pdf)$".to_string()
}

impl LinkScopeConfig {
    /// Scope restricted to the host of `base`
    pub fn same_site(base: &Url) -> Self {
        Self {
            required_host: base.host_str().map(|h| h.to_string()),
            ..Self::default()
        }
    }
}

/// Resolves hrefs against the page they appear on and checks them against a scope
#[derive(Debug)]
pub struct LinkScope {
    config: LinkScopeConfig,
    exclude_regexes: Vec<Regex>,
}

impl Default for LinkScope {
    fn default() -> Self {
        Self::new(LinkScopeConfig::default()).expect("Default regex patterns should be valid")
    }
}

impl LinkScope {
    /// Create a new link scope from configuration
    pub fn new(config: LinkScopeConfig) -> Result<Self, regex::Error> {
        let exclude_regexes = config
            .exclude_patterns
            .iter()
            .map(|pattern| Regex::new(pattern))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            config,
            exclude_regexes,
        })
    }

    /// Determine if a resolved URL may be followed
    pub fn allows(&self, url: &Url) -> bool {
        if !matches!(url.scheme(), "http" | "https") {
            return false;
        }

        if let Some(required_host) = &self.config.required_host {
            if url.host_str() != Some(required_host.as_str()) {
                return false;
            }
        }

        let url_str = url.as_str();
        !self.exclude_regexes.iter().any(|regex| regex.is_match(url_str))
    }

    /// Resolve `href` against `page_url`, dropping any fragment
    ///
    /// Returns `Ok(None)` when the resolved URL falls outside the scope.
    pub fn resolve(&self, page_url: &Url, href: &str) -> Result<Option<Url>, url::ParseError> {
        let resolved = normalize_url(&page_url.join(href)?);
        if self.allows(&resolved) {
            ::log::trace!("Link scope accepted: {}", resolved);
            Ok(Some(resolved))
        } else {
            ::log::debug!("Link scope rejected: {}", resolved);
            Ok(None)
        }
    }
}

/// Create a normalized version of the URL (removing fragments)
pub fn normalize_url(url: &Url) -> Url {
    let mut normalized = url.clone();
    normalized.set_fragment(None);
    normalized
}
