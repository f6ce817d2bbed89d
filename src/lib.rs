pub mod config;
pub mod crawlers;
pub mod error;
pub mod filter;
pub mod output;
pub mod parsers;
pub mod results;

// Re-export commonly used types for convenience
pub use config::{HarvestConfig, Termination};
pub use error::{HarvestError, Result};
pub use results::{Author, HarvestOutput, Quote};

use crawlers::{AuthorResolver, Fetcher, HttpFetcher, PageCursor, PaginatedCollector};
use filter::{LinkScope, LinkScopeConfig};
use url::Url;

/// Builder for one harvest run: collect quotes, optionally resolve their authors
pub struct Harvest {
    config: HarvestConfig,
    authors: bool,
}

impl Harvest {
    /// Create a new Harvest with the given configuration
    pub fn new(config: HarvestConfig) -> Self {
        Self {
            config,
            authors: false,
        }
    }

    /// Also fetch each distinct author's biography
    pub fn with_authors(mut self, authors: bool) -> Self {
        self.authors = authors;
        self
    }

    /// Override the termination policy
    pub fn with_termination(mut self, termination: Termination) -> Self {
        self.config.termination = termination;
        self
    }

    /// Override the page cap
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.config.max_pages = Some(max_pages);
        self
    }

    /// Run against the live site over HTTP
    pub async fn run(&self) -> Result<HarvestOutput> {
        let fetcher = HttpFetcher::new(&self.config)?;
        self.run_with(&fetcher).await
    }

    /// Run using the given fetcher
    pub async fn run_with<F: Fetcher>(&self, fetcher: &F) -> Result<HarvestOutput> {
        self.config.validate()?;

        let base = self.config.base()?;
        let scope = self.link_scope(&base)?;

        ::log::info!(
            "Starting harvest of {} ({:?} pagination)",
            base,
            self.config.termination
        );

        let quotes = PaginatedCollector::new(fetcher, &scope)
            .with_max_pages(self.config.max_pages)
            .with_delay(self.config.delay())
            .collect(self.start_cursor(&base))
            .await?;

        let authors = if self.authors {
            let mut resolver = AuthorResolver::new();
            crawlers::resolve_authors(
                fetcher,
                &scope,
                &base,
                &quotes,
                &mut resolver,
                self.config.delay(),
            )
            .await?;
            resolver.into_values()
        } else {
            Vec::new()
        };

        Ok(HarvestOutput { quotes, authors })
    }

    fn start_cursor(&self, base: &Url) -> PageCursor {
        match self.config.termination {
            Termination::Link => PageCursor::Url(base.clone()),
            Termination::Probe => PageCursor::Index {
                base: base.clone(),
                page: self.config.first_page,
            },
        }
    }

    fn link_scope(&self, base: &Url) -> Result<LinkScope> {
        let scope_config = if self.config.same_site_only {
            LinkScopeConfig::same_site(base)
        } else {
            LinkScopeConfig::default()
        };
        Ok(LinkScope::new(scope_config)?)
    }
}
