use serde::{Deserialize, Serialize};

/// A flat record with a fixed, ordered column list
pub trait Tabular {
    /// Column names, in row order
    fn header() -> &'static [&'static str];

    /// Cell values, one per header column
    fn row(&self) -> Vec<String>;
}

/// A quote scraped from a listing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Quote text, including the typographic quotation marks
    pub text: String,

    /// Author name as printed under the quote
    pub author: String,

    /// Tags in page order
    pub tags: Vec<String>,

    /// Link to the author's page (as written in the href); not exported
    #[serde(skip)]
    pub author_url: Option<String>,
}

impl Quote {
    /// CSV column names, in row order
    pub const FIELDS: [&'static str; 3] = ["text", "author", "tags"];

    pub fn new(text: String, author: String, tags: Vec<String>) -> Self {
        Self {
            text,
            author,
            tags,
            author_url: None,
        }
    }

    /// Attach the author detail link
    pub fn with_author_url(mut self, url: impl Into<String>) -> Self {
        self.author_url = Some(url.into());
        self
    }
}

impl Tabular for Quote {
    fn header() -> &'static [&'static str] {
        &Self::FIELDS
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.text.clone(),
            self.author.clone(),
            format_tags(&self.tags),
        ]
    }
}

/// Author biography scraped from an author page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub born_date: String,
    pub born_location: String,
    pub biography: String,
}

impl Author {
    /// CSV column names, in row order
    pub const FIELDS: [&'static str; 4] = ["name", "born_date", "born_location", "biography"];
}

impl Tabular for Author {
    fn header() -> &'static [&'static str] {
        &Self::FIELDS
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.born_date.clone(),
            self.born_location.clone(),
            self.biography.clone(),
        ]
    }
}

/// Everything a run produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarvestOutput {
    /// Quotes in page order
    pub quotes: Vec<Quote>,

    /// Authors in order of first appearance; empty unless authors were requested
    pub authors: Vec<Author>,
}

/// Render tags as `['a', 'b']`, the list notation existing quote exports use.
///
/// A tag containing a single quote but no double quote is wrapped in double
/// quotes instead, so the output stays readable by the same consumers.
pub fn format_tags(tags: &[String]) -> String {
    let inner = tags
        .iter()
        .map(|tag| {
            if tag.contains('\'') && !tag.contains('"') {
                format!("\"{}\"", tag.replace('\\', "\\\\"))
            } else {
                format!("'{}'", tag.replace('\\', "\\\\").replace('\'', "\\'"))
            }
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", inner)
}
