use serde::{Deserialize, Serialize};

use super::movie::Movie;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

/// Full record for a single movie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetails {
    /// Listing fields shared with search results
    pub movie: Movie,
    pub genres: Vec<Genre>,
    /// Minutes
    pub runtime: Option<u32>,
    pub tagline: Option<String>,
    /// "Released", "Post Production", ...
    pub status: Option<String>,
    pub budget: u64,
    pub revenue: u64,
    pub homepage: Option<String>,
    pub imdb_id: Option<String>,
}

impl MovieDetails {
    pub fn genre_names(&self) -> Vec<&str> {
        self.genres.iter().map(|g| g.name.as_str()).collect()
    }
}
