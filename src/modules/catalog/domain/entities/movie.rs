use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::modules::catalog::domain::value_objects::{image_url, ImageSize, TMDB_IMAGE_BASE_URL};

/// One catalog entry as returned in listing results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub original_title: String,
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    /// ISO 639-1 code
    pub original_language: String,
    pub popularity: f64,
    pub release_date: Option<NaiveDate>,
    pub vote_average: f64,
    pub vote_count: u32,
    pub genre_ids: Vec<u32>,
    pub adult: bool,
    pub video: bool,
}

impl Movie {
    pub fn release_year(&self) -> Option<i32> {
        self.release_date.map(|date| date.year())
    }

    pub fn released_in(&self, year: i32) -> bool {
        self.release_year() == Some(year)
    }

    pub fn has_genre(&self, genre_id: u32) -> bool {
        self.genre_ids.contains(&genre_id)
    }

    pub fn poster_url(&self, size: ImageSize) -> Option<String> {
        self.poster_path
            .as_deref()
            .map(|path| image_url(TMDB_IMAGE_BASE_URL, path, size))
    }

    pub fn backdrop_url(&self, size: ImageSize) -> Option<String> {
        self.backdrop_path
            .as_deref()
            .map(|path| image_url(TMDB_IMAGE_BASE_URL, path, size))
    }
}
