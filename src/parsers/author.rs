use crate::error::Result;
use crate::parsers::{compile, required_text, selectors, text};
use crate::results::Author;
use scraper::{Html, Selector};
use std::sync::LazyLock;

static TITLE: LazyLock<Selector> = LazyLock::new(|| compile(selectors::AUTHOR_TITLE));
static BORN_DATE: LazyLock<Selector> = LazyLock::new(|| compile(selectors::AUTHOR_BORN_DATE));
static BORN_LOCATION: LazyLock<Selector> =
    LazyLock::new(|| compile(selectors::AUTHOR_BORN_LOCATION));
static DESCRIPTION: LazyLock<Selector> = LazyLock::new(|| compile(selectors::AUTHOR_DESCRIPTION));

/// Parses an author detail page
pub fn parse(html: &str, page_url: &str) -> Result<Author> {
    let doc = Html::parse_document(html);
    let root = doc.root_element();

    let name = required_text(root, &TITLE, selectors::AUTHOR_TITLE, page_url)?;
    let born_date = required_text(root, &BORN_DATE, selectors::AUTHOR_BORN_DATE, page_url)?;
    let born_location =
        required_text(root, &BORN_LOCATION, selectors::AUTHOR_BORN_LOCATION, page_url)?;
    let biography = required_text(root, &DESCRIPTION, selectors::AUTHOR_DESCRIPTION, page_url)?;

    ::log::trace!("Author parser read {} from {}", name, page_url);

    Ok(Author {
        name,
        born_date,
        born_location: text::strip_leading_word(&born_location, "in").to_string(),
        biography,
    })
}

/// Path segment the site uses for an author's page, derived from the printed name
///
/// Only used when a quote carries no author link. Dots and spaces become
/// single dashes, other punctuation is dropped: "J.K. Rowling" -> "J-K-Rowling".
pub fn slug_for(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_alphanumeric() {
            slug.push(ch);
        } else if (ch.is_whitespace() || ch == '.' || ch == '-') && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_matches('-').to_string()
}
