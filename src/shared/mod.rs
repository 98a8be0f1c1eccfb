// Shared Kernel
// Cross-cutting pieces used by every module

pub mod application; // Pagination primitives
pub mod config;      // Catalog connection settings
pub mod errors;      // Shared error types
pub mod utils;       // Logging

pub use config::CatalogConfig;
pub use errors::{AppError, AppResult, FetchError, FetchResult};
