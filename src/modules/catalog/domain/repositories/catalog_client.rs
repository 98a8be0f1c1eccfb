use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::{
    modules::catalog::domain::{
        entities::{MovieDetails, MoviePage},
        value_objects::QuerySpec,
    },
    shared::{application::PageNumber, errors::FetchResult},
};

/// Contract for fetching catalog data from a remote source
///
/// Implementations perform exactly one outbound request per call and keep no
/// state between calls: no caching, no retries.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Fetch one page of results for the given query
    async fn fetch_page(&self, spec: &QuerySpec, page: PageNumber) -> FetchResult<MoviePage>;

    /// Fetch the full record for a single movie
    async fn fetch_details(&self, movie_id: u64) -> FetchResult<MovieDetails>;
}
