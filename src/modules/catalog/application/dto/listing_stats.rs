use serde::{Deserialize, Serialize};

use crate::modules::catalog::domain::entities::Movie;

/// Summary figures shown next to a movie listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingStats {
    pub total_movies: usize,
    pub pages_loaded: u32,
    /// None when nothing is listed
    pub average_rating: Option<f64>,
}

impl ListingStats {
    pub fn from_movies(movies: &[Movie], pages_loaded: u32) -> Self {
        let average_rating = if movies.is_empty() {
            None
        } else {
            let sum: f64 = movies.iter().map(|m| m.vote_average).sum();
            Some(sum / movies.len() as f64)
        };

        Self {
            total_movies: movies.len(),
            pages_loaded,
            average_rating,
        }
    }

    /// Average rating rounded to one decimal, as displayed
    pub fn average_rating_display(&self) -> Option<String> {
        self.average_rating.map(|avg| format!("{:.1}", avg))
    }
}
