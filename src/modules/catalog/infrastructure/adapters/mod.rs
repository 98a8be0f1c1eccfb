pub mod tmdb;

pub use tmdb::TmdbCatalogAdapter;
