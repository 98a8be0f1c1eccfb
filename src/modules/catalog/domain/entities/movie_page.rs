use serde::Serialize;

use super::movie::Movie;
use crate::shared::application::PageNumber;
use crate::shared::errors::{FetchError, FetchResult};

/// Upper bound on results per page enforced by TMDB
pub const TMDB_PAGE_SIZE: usize = 20;

/// One fetched batch of movies plus the source's pagination metadata
///
/// Construction enforces the page-size bound, so a `MoviePage` in hand never
/// carries more than [`TMDB_PAGE_SIZE`] items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoviePage {
    index: PageNumber,
    items: Vec<Movie>,
    total_pages: u32,
    total_results: u32,
}

impl MoviePage {
    pub fn new(
        index: PageNumber,
        items: Vec<Movie>,
        total_pages: u32,
        total_results: u32,
    ) -> FetchResult<Self> {
        if items.len() > TMDB_PAGE_SIZE {
            return Err(FetchError::InvalidPayload {
                message: format!(
                    "page {} carries {} results, more than the page size of {}",
                    index,
                    items.len(),
                    TMDB_PAGE_SIZE
                ),
            });
        }

        Ok(Self {
            index,
            items,
            total_pages,
            total_results,
        })
    }

    pub fn index(&self) -> PageNumber {
        self.index
    }

    pub fn items(&self) -> &[Movie] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Movie> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn total_results(&self) -> u32 {
        self.total_results
    }

    /// Whether the source reports pages beyond this one
    pub fn has_next(&self) -> bool {
        self.index.get() < self.total_pages
    }
}
