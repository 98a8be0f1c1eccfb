pub mod catalog_filters;
pub mod image_size;
pub mod query_spec;

pub use catalog_filters::*;
pub use image_size::*;
pub use query_spec::*;
