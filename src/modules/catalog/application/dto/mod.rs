pub mod listing_stats;
pub mod results;

pub use listing_stats::ListingStats;
pub use results::{FormattedMovieDetails, TopRatedBatch};
