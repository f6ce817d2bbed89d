use crate::crawlers::crawler::Fetcher;
use crate::error::Result;
use crate::filter::LinkScope;
use crate::parsers::{ListingPage, html};
use crate::results::Quote;
use std::collections::HashSet;
use std::time::Duration;
use url::Url;

/// Where the next listing page lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCursor {
    /// Link-driven: a concrete page URL; the successor is the page's "next" link
    Url(Url),
    /// Probe-driven: page `page` under `base`; the successor is `page + 1`
    /// as long as this page produced quotes
    Index { base: Url, page: u32 },
}

impl PageCursor {
    /// URL to request for this cursor
    pub fn url(&self) -> Result<Url> {
        match self {
            PageCursor::Url(url) => Ok(url.clone()),
            PageCursor::Index { base, page } => Ok(base.join(&format!("page/{page}/"))?),
        }
    }
}

/// Walks a paginated quote listing and gathers every quote in page order
pub struct PaginatedCollector<'a, F> {
    fetcher: &'a F,
    scope: &'a LinkScope,
    max_pages: Option<u32>,
    delay: Option<Duration>,
}

impl<'a, F: Fetcher> PaginatedCollector<'a, F> {
    pub fn new(fetcher: &'a F, scope: &'a LinkScope) -> Self {
        Self {
            fetcher,
            scope,
            max_pages: None,
            delay: None,
        }
    }

    /// Stop after this many pages even if more are advertised
    pub fn with_max_pages(mut self, max_pages: Option<u32>) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Pause between consecutive page requests
    pub fn with_delay(mut self, delay: Option<Duration>) -> Self {
        self.delay = delay;
        self
    }

    /// Fetch pages from `start` until no successor cursor can be derived
    ///
    /// Any fetch or parse failure aborts the whole collection.
    pub async fn collect(&self, start: PageCursor) -> Result<Vec<Quote>> {
        ::log::info!("Collecting quotes starting at {}", start.url()?);

        let mut quotes = Vec::new();
        let mut visited: HashSet<Url> = HashSet::new();
        let mut pages: u32 = 0;
        let mut cursor = Some(start);

        while let Some(current) = cursor.take() {
            if let Some(max) = self.max_pages {
                if pages >= max {
                    ::log::info!("Reached max pages ({}), stopping", max);
                    break;
                }
            }

            let url = current.url()?;
            if !visited.insert(url.clone()) {
                ::log::warn!("Pagination loops back to {}, stopping", url);
                break;
            }

            if pages > 0 {
                if let Some(delay) = self.delay {
                    tokio::time::sleep(delay).await;
                }
            }

            let body = self.fetcher.fetch(&url).await?;
            let page = html::parse(&body, url.as_str())?;
            pages += 1;

            ::log::info!("Page {}: {} quotes from {}", pages, page.quotes.len(), url);

            cursor = self.successor(&current, &url, &page)?;
            quotes.extend(page.quotes);
        }

        ::log::info!(
            "Collection complete: {} quotes from {} pages",
            quotes.len(),
            pages
        );
        Ok(quotes)
    }

    fn successor(
        &self,
        current: &PageCursor,
        url: &Url,
        page: &ListingPage,
    ) -> Result<Option<PageCursor>> {
        match current {
            PageCursor::Url(_) => {
                let Some(href) = page.next.as_deref() else {
                    ::log::debug!("No next link on {}", url);
                    return Ok(None);
                };
                match self.scope.resolve(url, href)? {
                    Some(next) => Ok(Some(PageCursor::Url(next))),
                    None => {
                        ::log::warn!("Next link {} on {} is out of scope, stopping", href, url);
                        Ok(None)
                    }
                }
            }
            PageCursor::Index { base, page: n } => {
                if page.is_empty() {
                    ::log::debug!("Page {} is empty", n);
                    Ok(None)
                } else {
                    Ok(Some(PageCursor::Index {
                        base: base.clone(),
                        page: n + 1,
                    }))
                }
            }
        }
    }
}
