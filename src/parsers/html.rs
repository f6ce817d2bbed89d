use crate::error::Result;
use crate::parsers::{ListingPage, compile, required_text, selectors, text};
use crate::results::Quote;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static QUOTE: LazyLock<Selector> = LazyLock::new(|| compile(selectors::QUOTE));
static QUOTE_TEXT: LazyLock<Selector> = LazyLock::new(|| compile(selectors::QUOTE_TEXT));
static QUOTE_AUTHOR: LazyLock<Selector> = LazyLock::new(|| compile(selectors::QUOTE_AUTHOR));
static QUOTE_TAG: LazyLock<Selector> = LazyLock::new(|| compile(selectors::QUOTE_TAG));
static AUTHOR_LINK: LazyLock<Selector> = LazyLock::new(|| compile(selectors::AUTHOR_LINK));
static NEXT_LINK: LazyLock<Selector> = LazyLock::new(|| compile(selectors::NEXT_LINK));

/// Parses a quote listing page into its quotes and the "next" link
///
/// `page_url` is only used to make error messages point at the failing page.
pub fn parse(html: &str, page_url: &str) -> Result<ListingPage> {
    let doc = Html::parse_document(html);

    let quotes = doc
        .select(&QUOTE)
        .map(|node| parse_quote(node, page_url))
        .collect::<Result<Vec<_>>>()?;

    let next = parse_next_link(&doc);

    ::log::debug!(
        "Listing parser found {} quotes in {} (next: {:?})",
        quotes.len(),
        page_url,
        next
    );

    Ok(ListingPage::new(quotes, next))
}

/// Parses only the "next" link of a listing page
pub fn parse_next_link(doc: &Html) -> Option<String> {
    doc.select(&NEXT_LINK)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(|href| href.trim().to_string())
        .filter(|href| !href.is_empty())
}

fn parse_quote(node: ElementRef<'_>, page_url: &str) -> Result<Quote> {
    let quote_text = required_text(node, &QUOTE_TEXT, selectors::QUOTE_TEXT, page_url)?;
    let author = required_text(node, &QUOTE_AUTHOR, selectors::QUOTE_AUTHOR, page_url)?;

    let tags = node
        .select(&QUOTE_TAG)
        .map(|tag| text::clean(&tag.text().collect::<String>()))
        .filter(|tag| !tag.is_empty())
        .collect();

    let quote = Quote::new(quote_text, author, tags);

    Ok(
        match node.select(&AUTHOR_LINK).next().and_then(|a| a.value().attr("href")) {
            Some(href) => quote.with_author_url(href.trim()),
            None => quote,
        },
    )
}
