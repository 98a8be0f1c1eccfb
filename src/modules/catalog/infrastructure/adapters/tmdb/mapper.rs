use chrono::NaiveDate;

use super::models::{TmdbMovie, TmdbMovieDetails, TmdbPageResponse};
use crate::modules::catalog::domain::entities::{Genre, Movie, MovieDetails, MoviePage};
use crate::shared::application::PageNumber;
use crate::shared::errors::{FetchError, FetchResult};

/// TMDB-specific mapper from wire models to domain entities
#[derive(Debug, Clone, Default)]
pub struct TmdbMapper;

impl TmdbMapper {
    pub fn new() -> Self {
        Self
    }

    /// Map a listing response, checking it answers the page that was requested
    pub fn map_page(&self, requested: PageNumber, response: TmdbPageResponse) -> FetchResult<MoviePage> {
        if response.page != requested.get() {
            return Err(FetchError::InvalidPayload {
                message: format!(
                    "requested page {} but TMDB answered page {}",
                    requested, response.page
                ),
            });
        }

        let items = response
            .results
            .into_iter()
            .map(|movie| self.map_movie(movie))
            .collect();

        MoviePage::new(requested, items, response.total_pages, response.total_results)
    }

    pub fn map_movie(&self, source: TmdbMovie) -> Movie {
        Movie {
            id: source.id,
            original_title: source.original_title.unwrap_or_else(|| source.title.clone()),
            title: source.title,
            overview: source.overview.unwrap_or_default(),
            poster_path: non_empty(source.poster_path),
            backdrop_path: non_empty(source.backdrop_path),
            original_language: source.original_language.unwrap_or_default(),
            popularity: source.popularity.unwrap_or(0.0),
            release_date: parse_release_date(source.release_date.as_deref()),
            vote_average: source.vote_average.unwrap_or(0.0),
            vote_count: source.vote_count.unwrap_or(0),
            genre_ids: source.genre_ids.unwrap_or_default(),
            adult: source.adult.unwrap_or(false),
            video: source.video.unwrap_or(false),
        }
    }

    pub fn map_details(&self, source: TmdbMovieDetails) -> MovieDetails {
        let genres: Vec<Genre> = source
            .genres
            .unwrap_or_default()
            .into_iter()
            .map(|g| Genre {
                id: g.id,
                name: g.name,
            })
            .collect();

        let movie = Movie {
            id: source.id,
            original_title: source.original_title.unwrap_or_else(|| source.title.clone()),
            title: source.title,
            overview: source.overview.unwrap_or_default(),
            poster_path: non_empty(source.poster_path),
            backdrop_path: non_empty(source.backdrop_path),
            original_language: source.original_language.unwrap_or_default(),
            popularity: source.popularity.unwrap_or(0.0),
            release_date: parse_release_date(source.release_date.as_deref()),
            vote_average: source.vote_average.unwrap_or(0.0),
            vote_count: source.vote_count.unwrap_or(0),
            genre_ids: genres.iter().map(|g| g.id).collect(),
            adult: source.adult.unwrap_or(false),
            video: source.video.unwrap_or(false),
        };

        MovieDetails {
            movie,
            genres,
            runtime: source.runtime.filter(|r| *r > 0),
            tagline: non_empty(source.tagline),
            status: non_empty(source.status),
            budget: source.budget.unwrap_or(0),
            revenue: source.revenue.unwrap_or(0),
            homepage: non_empty(source.homepage),
            imdb_id: non_empty(source.imdb_id),
        }
    }
}

/// TMDB sends "" for unknown dates; anything unparsable is treated as unknown
fn parse_release_date(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(e) => {
            log::debug!("TMDB: Ignoring unparsable release date '{}': {}", raw, e);
            None
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
