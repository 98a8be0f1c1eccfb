pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{AggregationService, FormattedMovieDetails, ListingStats, TopRatedBatch};
pub use domain::{
    CatalogClient, CatalogFilters, Genre, ImageSize, Movie, MovieDetails, MoviePage, QuerySpec,
    TMDB_PAGE_SIZE,
};
pub use infrastructure::{CatalogHttpClient, TmdbCatalogAdapter};
