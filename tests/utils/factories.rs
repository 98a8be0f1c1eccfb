/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use chrono::NaiveDate;
use movie_browser_lib::modules::catalog::{Movie, MoviePage};
use movie_browser_lib::shared::application::PageNumber;

pub struct MovieFactory {
    id: u64,
    title: String,
    overview: String,
    poster_path: Option<String>,
    popularity: f64,
    release_date: Option<NaiveDate>,
    vote_average: f64,
    vote_count: u32,
    genre_ids: Vec<u32>,
}

impl MovieFactory {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            title: format!("Test Movie {}", id),
            overview: String::new(),
            poster_path: None,
            popularity: 1.0,
            release_date: NaiveDate::from_ymd_opt(2000, 1, 1),
            vote_average: 5.0,
            vote_count: 100,
            genre_ids: vec![],
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn overview(mut self, overview: &str) -> Self {
        self.overview = overview.to_string();
        self
    }

    pub fn poster(mut self, path: &str) -> Self {
        self.poster_path = Some(path.to_string());
        self
    }

    pub fn popularity(mut self, popularity: f64) -> Self {
        self.popularity = popularity;
        self
    }

    pub fn released(mut self, year: i32, month: u32, day: u32) -> Self {
        self.release_date = NaiveDate::from_ymd_opt(year, month, day);
        self
    }

    pub fn unreleased(mut self) -> Self {
        self.release_date = None;
        self
    }

    pub fn rating(mut self, vote_average: f64, vote_count: u32) -> Self {
        self.vote_average = vote_average;
        self.vote_count = vote_count;
        self
    }

    pub fn genres(mut self, genre_ids: Vec<u32>) -> Self {
        self.genre_ids = genre_ids;
        self
    }

    pub fn build(self) -> Movie {
        Movie {
            id: self.id,
            original_title: self.title.clone(),
            title: self.title,
            overview: self.overview,
            poster_path: self.poster_path,
            backdrop_path: None,
            original_language: "en".to_string(),
            popularity: self.popularity,
            release_date: self.release_date,
            vote_average: self.vote_average,
            vote_count: self.vote_count,
            genre_ids: self.genre_ids,
            adult: false,
            video: false,
        }
    }
}

/// `count` movies whose ids encode their page: page 3 yields 301, 302, ...
pub fn movies_for_page(page: u32, count: usize) -> Vec<Movie> {
    (1..=count as u64)
        .map(|n| MovieFactory::new(page as u64 * 100 + n).build())
        .collect()
}

pub fn page_of(index: u32, movies: Vec<Movie>, total_pages: u32) -> MoviePage {
    let total_results = total_pages * 20;
    MoviePage::new(
        PageNumber::new(index as i64).expect("test page index must be positive"),
        movies,
        total_pages,
        total_results,
    )
    .expect("test page must fit the page size")
}
