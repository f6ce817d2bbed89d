use crate::error::Result;
use std::future::Future;
use url::Url;

/// Source of page bodies for the collector and the author resolver
///
/// Implementations treat any non-success response as an error; callers do
/// not retry.
pub trait Fetcher {
    /// Fetch the body of the page at `url`
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<String>> + Send;
}
