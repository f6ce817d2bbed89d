use crate::crawlers::crawler::Fetcher;
use crate::error::{HarvestError, Result};
use crate::filter::LinkScope;
use crate::parsers::author;
use crate::results::{Author, Quote};
use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;
use url::Url;

/// Run-scoped cache of detail records keyed by a natural identifier
///
/// `resolve` invokes the supplied fetch function at most once per key. A
/// failed fetch is not cached.
#[derive(Debug)]
pub struct DetailResolver<T> {
    cache: HashMap<String, T>,
    // first-resolution order, for stable output
    order: Vec<String>,
    fetches: usize,
}

/// Resolver for author biographies, keyed by absolute author page URL
pub type AuthorResolver = DetailResolver<Author>;

impl<T> Default for DetailResolver<T> {
    fn default() -> Self {
        Self {
            cache: HashMap::new(),
            order: Vec::new(),
            fetches: 0,
        }
    }
}

impl<T> DetailResolver<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the record for `key`, fetching it on first request only
    pub async fn resolve<F, Fut>(&mut self, key: &str, fetch: F) -> Result<&T>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        if self.cache.contains_key(key) {
            ::log::trace!("Detail cache hit: {}", key);
        } else {
            ::log::debug!("Detail cache miss, fetching: {}", key);
            self.fetches += 1;
            let value = fetch(key.to_string()).await?;
            self.cache.insert(key.to_string(), value);
            self.order.push(key.to_string());
        }

        Ok(&self.cache[key])
    }

    /// Cached record for `key`, without fetching
    pub fn get(&self, key: &str) -> Option<&T> {
        self.cache.get(key)
    }

    /// Number of times a fetch function was invoked
    pub fn fetches(&self) -> usize {
        self.fetches
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Cached records in the order they were first resolved
    pub fn into_values(mut self) -> Vec<T> {
        self.order
            .iter()
            .filter_map(|key| self.cache.remove(key))
            .collect()
    }
}

/// Resolve the author of every quote through `resolver`, in quote order
///
/// Quotes without an author link fall back to the site's `author/<slug>` path.
/// When `delay` is set it is slept before every author page request; cache
/// hits do not wait.
pub async fn resolve_authors<F: Fetcher>(
    fetcher: &F,
    scope: &LinkScope,
    base: &Url,
    quotes: &[Quote],
    resolver: &mut AuthorResolver,
    delay: Option<Duration>,
) -> Result<()> {
    for quote in quotes {
        let href = match &quote.author_url {
            Some(href) => href.clone(),
            None => {
                let slug = author::slug_for(&quote.author);
                ::log::debug!("No author link for {}, guessing {}", quote.author, slug);
                format!("author/{slug}")
            }
        };

        let url = scope
            .resolve(base, &href)?
            .ok_or_else(|| HarvestError::OutOfScope(href.clone()))?;

        if let Some(delay) = delay {
            if resolver.get(url.as_str()).is_none() {
                tokio::time::sleep(delay).await;
            }
        }

        resolver
            .resolve(url.as_str(), |key| fetch_author(fetcher, key))
            .await?;
    }

    ::log::info!(
        "Resolved {} authors with {} page fetches",
        resolver.len(),
        resolver.fetches()
    );
    Ok(())
}

async fn fetch_author<F: Fetcher>(fetcher: &F, key: String) -> Result<Author> {
    let url = Url::parse(&key)?;
    let body = fetcher.fetch(&url).await?;
    author::parse(&body, &key)
}
