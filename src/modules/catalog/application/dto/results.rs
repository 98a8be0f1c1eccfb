use serde::Serialize;

use crate::modules::catalog::domain::entities::{Movie, MovieDetails};
use crate::shared::application::PageCursor;

/// One step of sequential top-rated paging
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopRatedBatch {
    pub movies: Vec<Movie>,
    /// Cursor to pass to the next call
    pub next_cursor: PageCursor,
    pub has_more: bool,
}

/// Movie details with a display-ready release date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedMovieDetails {
    pub details: MovieDetails,
    pub formatted_date: String,
}
