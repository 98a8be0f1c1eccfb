use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::errors::{FetchError, FetchResult};

/// Which slice of the catalog a request targets
///
/// Exactly one filter is active per request. Filters that the upstream API
/// cannot combine (genre + year, for example) are composed client-side by the
/// aggregation service instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum QuerySpec {
    /// Plain top-rated listing
    #[default]
    TopRated,
    /// Free-text title search
    Search(String),
    /// Movies tagged with a genre id
    Genre(u32),
    /// Movies first released in a calendar year
    Year(i32),
    /// Movies whose average rating is at least this value
    RatingFloor(f32),
    /// Movies crediting a person (cast or crew)
    Person(u64),
    /// Movies produced by a company
    Studio(u64),
    /// Movies originating from an ISO 3166-1 country
    Country(String),
}

impl QuerySpec {
    pub fn search(term: impl Into<String>) -> Self {
        QuerySpec::Search(term.into())
    }

    pub fn country(code: impl Into<String>) -> Self {
        QuerySpec::Country(code.into())
    }

    /// Reject specs the upstream API would misinterpret, before any request is made
    pub fn validate(&self) -> FetchResult<()> {
        match self {
            QuerySpec::Search(term) if term.trim().is_empty() => Err(FetchError::InvalidQuery {
                message: "Search term cannot be empty".to_string(),
            }),
            QuerySpec::RatingFloor(value) if !value.is_finite() || !(0.0..=10.0).contains(value) => {
                Err(FetchError::InvalidQuery {
                    message: format!("Rating floor {} is outside 0-10", value),
                })
            }
            QuerySpec::Country(code)
                if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) =>
            {
                Err(FetchError::InvalidQuery {
                    message: format!("'{}' is not a two-letter country code", code),
                })
            }
            _ => Ok(()),
        }
    }

    /// Short label used in log lines and UI headings
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for QuerySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuerySpec::TopRated => write!(f, "Top Rated"),
            QuerySpec::Search(term) => write!(f, "Search: {}", term),
            QuerySpec::Genre(id) => write!(f, "Genre #{}", id),
            QuerySpec::Year(year) => write!(f, "{} Movies", year),
            QuerySpec::RatingFloor(rating) => write!(f, "High Rated ({}+)", rating),
            QuerySpec::Person(id) => write!(f, "Person #{}", id),
            QuerySpec::Studio(id) => write!(f, "Studio #{}", id),
            QuerySpec::Country(code) => write!(f, "Country: {}", code),
        }
    }
}
