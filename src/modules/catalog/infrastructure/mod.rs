pub mod adapters;
pub mod http_client;

// Re-export commonly used types
pub use adapters::TmdbCatalogAdapter;
pub use http_client::CatalogHttpClient;
