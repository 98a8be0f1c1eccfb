pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::*;
pub use repositories::CatalogClient;
pub use value_objects::*;
