use async_trait::async_trait;

use super::{mapper::TmdbMapper, models::*};
use crate::{
    modules::catalog::{
        domain::{
            entities::{MovieDetails, MoviePage},
            repositories::CatalogClient,
            value_objects::{image_url, ImageSize, QuerySpec},
        },
        infrastructure::http_client::CatalogHttpClient,
    },
    shared::{
        application::PageNumber,
        config::CatalogConfig,
        errors::{FetchError, FetchResult},
    },
};

const PROVIDER_NAME: &str = "TMDB";

/// TMDB (The Movie Database) catalog adapter over the v3 REST API
///
/// Each `QuerySpec` variant maps onto one endpoint plus at most one filter
/// parameter; language and page are attached to every request.
pub struct TmdbCatalogAdapter {
    http_client: CatalogHttpClient,
    base_url: String,
    image_base_url: String,
    language: String,
    mapper: TmdbMapper,
}

impl TmdbCatalogAdapter {
    pub fn new(config: &CatalogConfig) -> FetchResult<Self> {
        let http_client =
            CatalogHttpClient::new(PROVIDER_NAME, &config.access_token, config.request_timeout)?;
        Ok(Self::with_client(http_client, config))
    }

    /// Create adapter with custom HTTP client (for testing)
    pub fn with_client(http_client: CatalogHttpClient, config: &CatalogConfig) -> Self {
        Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            image_base_url: config.image_base_url.clone(),
            language: config.language.clone(),
            mapper: TmdbMapper::new(),
        }
    }

    /// Endpoint path and filter parameters for a query
    pub fn endpoint_for(spec: &QuerySpec) -> (&'static str, Option<(&'static str, String)>) {
        match spec {
            QuerySpec::TopRated => ("/movie/top_rated", None),
            QuerySpec::Search(term) => ("/search/movie", Some(("query", term.trim().to_string()))),
            QuerySpec::Genre(id) => ("/discover/movie", Some(("with_genres", id.to_string()))),
            QuerySpec::Year(year) => (
                "/discover/movie",
                Some(("primary_release_year", year.to_string())),
            ),
            QuerySpec::RatingFloor(rating) => (
                "/discover/movie",
                Some(("vote_average.gte", rating.to_string())),
            ),
            QuerySpec::Person(id) => ("/discover/movie", Some(("with_people", id.to_string()))),
            QuerySpec::Studio(id) => ("/discover/movie", Some(("with_companies", id.to_string()))),
            QuerySpec::Country(code) => (
                "/discover/movie",
                Some(("with_origin_country", code.to_ascii_uppercase())),
            ),
        }
    }

    /// Full request URL for one page of a query
    pub fn page_url(&self, spec: &QuerySpec, page: PageNumber) -> String {
        let (endpoint, filter) = Self::endpoint_for(spec);

        let mut params = Vec::with_capacity(3);
        if let Some((key, value)) = filter {
            params.push((key.to_string(), value));
        }
        params.push(("language".to_string(), self.language.clone()));
        params.push(("page".to_string(), page.to_string()));

        self.build_url_with_params(endpoint, &params)
    }

    pub fn details_url(&self, movie_id: u64) -> String {
        self.build_url_with_params(
            &format!("/movie/{}", movie_id),
            &[("language".to_string(), self.language.clone())],
        )
    }

    /// Build full image URL from file path
    pub fn build_image_url(&self, file_path: &str, size: ImageSize) -> String {
        image_url(&self.image_base_url, file_path, size)
    }

    /// Build URL with query parameters
    fn build_url_with_params(&self, endpoint: &str, params: &[(String, String)]) -> String {
        let query = params
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");

        if query.is_empty() {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}{}?{}", self.base_url, endpoint, query)
        }
    }
}

#[async_trait]
impl CatalogClient for TmdbCatalogAdapter {
    async fn fetch_page(&self, spec: &QuerySpec, page: PageNumber) -> FetchResult<MoviePage> {
        spec.validate()?;

        let url = self.page_url(spec, page);

        log::info!("TMDB: Fetching '{}' page {}", spec, page);

        let response: TmdbPageResponse = self.http_client.get(&url).await?;
        let movie_page = self.mapper.map_page(page, response)?;

        log::info!(
            "TMDB: Page {} of '{}' returned {} movies ({} pages total)",
            page,
            spec,
            movie_page.len(),
            movie_page.total_pages()
        );
        Ok(movie_page)
    }

    async fn fetch_details(&self, movie_id: u64) -> FetchResult<MovieDetails> {
        let url = self.details_url(movie_id);

        log::info!("TMDB: Getting movie by ID '{}'", movie_id);

        let response: TmdbMovieDetails = match self.http_client.get(&url).await {
            Ok(response) => response,
            Err(FetchError::Http { status: 404, .. }) => {
                log::info!("TMDB: No movie found for ID '{}'", movie_id);
                return Err(FetchError::NotFound {
                    message: format!("TMDB has no movie with ID {}", movie_id),
                });
            }
            Err(e) => return Err(e),
        };

        Ok(self.mapper.map_details(response))
    }
}
