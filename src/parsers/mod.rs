pub mod author;
pub mod html;
pub mod text;

#[cfg(test)]
mod tests;

use crate::error::{HarvestError, Result};
use crate::results::Quote;
use scraper::{ElementRef, Selector};

/// CSS selectors for the quote listing and author pages
pub mod selectors {
    pub const QUOTE: &str = "div.quote";
    pub const QUOTE_TEXT: &str = ".text";
    pub const QUOTE_AUTHOR: &str = ".author";
    pub const QUOTE_TAG: &str = ".tags a.tag";
    pub const AUTHOR_LINK: &str = "span a[href]";
    pub const NEXT_LINK: &str = "li.next > a[href]";

    pub const AUTHOR_TITLE: &str = ".author-title";
    pub const AUTHOR_BORN_DATE: &str = ".author-born-date";
    pub const AUTHOR_BORN_LOCATION: &str = ".author-born-location";
    pub const AUTHOR_DESCRIPTION: &str = ".author-description";
}

/// Result of parsing one listing page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingPage {
    /// Quotes in document order
    pub quotes: Vec<Quote>,
    /// Raw href of the "next" pagination control, if present
    pub next: Option<String>,
}

impl ListingPage {
    pub fn new(quotes: Vec<Quote>, next: Option<String>) -> Self {
        Self { quotes, next }
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

/// Compiles one of the constant selectors above
pub(crate) fn compile(css: &'static str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid built-in selector {css}: {e}"))
}

/// Cleaned text of the first descendant matching `css`, or a parse error naming it
pub(crate) fn required_text(
    node: ElementRef<'_>,
    selector: &Selector,
    css: &'static str,
    context: &str,
) -> Result<String> {
    node.select(selector)
        .next()
        .map(|el| text::clean(&el.text().collect::<String>()))
        .ok_or_else(|| HarvestError::missing(css, context))
}
