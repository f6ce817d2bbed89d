pub mod collector;
pub mod crawler;
pub mod resolver;
pub mod web;

pub use collector::{PageCursor, PaginatedCollector};
pub use crawler::Fetcher;
pub use resolver::{AuthorResolver, DetailResolver, resolve_authors};
pub use web::HttpFetcher;

#[cfg(test)]
pub(crate) mod testing;
