pub mod dto;
pub mod services;

pub use dto::*;
pub use services::AggregationService;
