use serde::{Deserialize, Serialize};

use super::query_spec::QuerySpec;

/// Filter form as submitted by the UI
///
/// Several fields may be filled in, but only one becomes the active query.
/// Precedence: genre, year, minimum rating, search term, then the plain
/// top-rated listing. Zero values and blank terms count as "not set".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogFilters {
    #[serde(default)]
    pub genre_id: Option<u32>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub min_rating: Option<f32>,
    #[serde(default)]
    pub search_term: Option<String>,
}

impl CatalogFilters {
    pub fn into_query_spec(self) -> QuerySpec {
        if let Some(genre_id) = self.genre_id.filter(|id| *id != 0) {
            QuerySpec::Genre(genre_id)
        } else if let Some(year) = self.year.filter(|y| *y != 0) {
            QuerySpec::Year(year)
        } else if let Some(rating) = self.min_rating.filter(|r| *r > 0.0) {
            QuerySpec::RatingFloor(rating)
        } else if let Some(term) = self
            .search_term
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
        {
            QuerySpec::Search(term)
        } else {
            QuerySpec::TopRated
        }
    }
}

impl From<CatalogFilters> for QuerySpec {
    fn from(filters: CatalogFilters) -> Self {
        filters.into_query_spec()
    }
}
