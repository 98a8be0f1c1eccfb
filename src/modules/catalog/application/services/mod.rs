pub mod aggregation_service;

pub use aggregation_service::{rank_by_popularity, retain_release_year, AggregationService};
