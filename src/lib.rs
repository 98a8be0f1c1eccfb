//! Movie catalog client backed by TMDB.
//!
//! [`AggregationService`] fans out page requests through a [`CatalogClient`]
//! and reassembles them in requested order. The session module holds the
//! single local user behind a [`SessionStore`](modules::session::SessionStore).

pub mod modules;
pub mod shared;

use std::sync::Arc;

pub use modules::catalog::{
    AggregationService, CatalogClient, CatalogFilters, Movie, MovieDetails, MoviePage, QuerySpec,
    TmdbCatalogAdapter,
};
pub use shared::application::{PageCursor, PageNumber};
pub use shared::{AppError, AppResult, CatalogConfig, FetchError, FetchResult};

/// Wire the TMDB adapter into an aggregation service
pub fn build_aggregation_service(config: &CatalogConfig) -> AppResult<AggregationService> {
    let adapter = TmdbCatalogAdapter::new(config)?;
    log::info!(
        "Catalog client ready ({}, language {})",
        config.base_url,
        config.language
    );
    Ok(AggregationService::new(Arc::new(adapter)))
}
