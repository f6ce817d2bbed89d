use crate::crawlers::Fetcher;
use crate::error::{HarvestError, Result};
use std::collections::HashMap;
use std::sync::Mutex;
use url::Url;

/// In-memory site: serves canned bodies and records every request
#[derive(Default)]
pub(crate) struct StaticFetcher {
    pages: HashMap<String, String>,
    requests: Mutex<Vec<String>>,
}

impl StaticFetcher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_page(mut self, url: &str, body: impl Into<String>) -> Self {
        self.pages.insert(url.to_string(), body.into());
        self
    }

    /// Requested URLs in request order
    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn request_count(&self, url: &str) -> usize {
        self.requests().iter().filter(|r| r.as_str() == url).count()
    }
}

impl Fetcher for StaticFetcher {
    async fn fetch(&self, url: &Url) -> Result<String> {
        self.requests.lock().unwrap().push(url.to_string());
        self.pages
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| HarvestError::Status {
                url: url.to_string(),
                status: 404,
            })
    }
}

/// Listing page with the given (text, author, author href) quotes and optional next href
pub(crate) fn listing(quotes: &[(&str, &str, &str)], next: Option<&str>) -> String {
    let mut html = String::from("<html><body><div class=\"col-md-8\">");
    for (text, author, href) in quotes {
        html.push_str(&format!(
            r#"<div class="quote">
                <span class="text">{text}</span>
                <span>by <small class="author">{author}</small> <a href="{href}">(about)</a></span>
                <div class="tags">Tags: <a class="tag" href="/tag/x/">x</a></div>
            </div>"#
        ));
    }
    if let Some(next) = next {
        html.push_str(&format!(
            r#"<nav><ul class="pager"><li class="next"><a href="{next}">Next</a></li></ul></nav>"#
        ));
    }
    html.push_str("</div></body></html>");
    html
}

/// Author page for `name`
pub(crate) fn author_page(name: &str) -> String {
    format!(
        r#"<html><body>
            <h3 class="author-title">{name}</h3>
            <span class="author-born-date">January 1, 1900</span>
            <span class="author-born-location">in Somewhere</span>
            <div class="author-description">About {name}.</div>
        </body></html>"#
    )
}
