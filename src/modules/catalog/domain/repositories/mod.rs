pub mod catalog_client;

pub use catalog_client::CatalogClient;
#[cfg(test)]
pub use catalog_client::MockCatalogClient;
