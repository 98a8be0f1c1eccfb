use futures::future;
use std::sync::Arc;

use crate::{
    modules::catalog::{
        application::dto::{FormattedMovieDetails, TopRatedBatch},
        domain::{
            entities::{Movie, MoviePage},
            repositories::CatalogClient,
            value_objects::{CatalogFilters, QuerySpec},
        },
    },
    shared::{
        application::{PageCursor, PageNumber},
        errors::{FetchError, FetchResult},
        utils::{LogContext, TimedOperation},
    },
};

const RELEASE_DATE_FORMAT: &str = "%B %-d, %Y";

/// Fans page requests out to a [`CatalogClient`] and merges the answers
///
/// Stateless: every method works only from its arguments, so one instance can
/// serve any number of callers. Page order in results always follows the
/// requested page numbers, never network completion order.
pub struct AggregationService {
    client: Arc<dyn CatalogClient>,
}

impl AggregationService {
    pub fn new(client: Arc<dyn CatalogClient>) -> Self {
        Self { client }
    }

    /// Fetch a single page; zero and negative page numbers are rejected locally
    pub async fn fetch_page(&self, spec: &QuerySpec, page_number: i64) -> FetchResult<MoviePage> {
        let page = PageNumber::new(page_number)?;
        spec.validate()?;
        self.client.fetch_page(spec, page).await
    }

    /// Fetch pages `[start_page, start_page + page_count - 1]` concurrently
    ///
    /// Every request runs to completion. If any of them fails the whole call
    /// fails with the error of the lowest failing page, and no pages are
    /// returned.
    pub async fn fetch_pages(
        &self,
        spec: &QuerySpec,
        start_page: i64,
        page_count: u32,
    ) -> FetchResult<Vec<MoviePage>> {
        let start = PageNumber::new(start_page)?;
        let requested = start.range(page_count)?;
        spec.validate()?;

        let label = spec.label();
        LogContext::aggregation(&label, requested.len(), None);
        let timer = TimedOperation::new(&format!(
            "fetch pages {}..={} of '{}'",
            start,
            start.get() + (page_count - 1),
            label
        ));

        // Tag every in-flight request with its page so results can be put back in order
        let in_flight = requested.iter().map(|&page| async move {
            (page, self.client.fetch_page(spec, page).await)
        });
        let settled = future::join_all(in_flight).await;

        match Self::reassemble(settled) {
            Ok(pages) => {
                let items: usize = pages.iter().map(MoviePage::len).sum();
                LogContext::aggregation(&label, pages.len(), Some(items));
                timer.finish_with_info(&format!("{} pages", pages.len()));
                Ok(pages)
            }
            Err(e) => {
                LogContext::error_with_context(&e, &format!("Aggregating '{}' failed", label));
                Err(e)
            }
        }
    }

    /// Fetch a page range and concatenate the items in page order
    pub async fn fetch_all_items(
        &self,
        spec: &QuerySpec,
        start_page: i64,
        page_count: u32,
    ) -> FetchResult<Vec<Movie>> {
        let pages = self.fetch_pages(spec, start_page, page_count).await?;
        Ok(Self::flatten_pages(pages))
    }

    /// Fetch a page range for a filter form
    pub async fn fetch_pages_with_filters(
        &self,
        filters: CatalogFilters,
        start_page: i64,
        page_count: u32,
    ) -> FetchResult<Vec<MoviePage>> {
        let spec = filters.into_query_spec();
        self.fetch_pages(&spec, start_page, page_count).await
    }

    /// Movies rated at least `min_rating`, filtered upstream
    pub async fn filter_by_rating(
        &self,
        min_rating: f32,
        start_page: i64,
        page_count: u32,
    ) -> FetchResult<Vec<MoviePage>> {
        self.fetch_pages(&QuerySpec::RatingFloor(min_rating), start_page, page_count)
            .await
    }

    /// First page of search results, most popular first
    pub async fn search_and_rank(&self, term: &str) -> FetchResult<Vec<Movie>> {
        LogContext::search_operation(term, None);

        let page = self.fetch_page(&QuerySpec::search(term), 1).await?;
        let mut movies = page.into_items();
        rank_by_popularity(&mut movies);

        LogContext::search_operation(term, Some(movies.len()));
        Ok(movies)
    }

    /// First page of a genre, narrowed to one release year
    ///
    /// The discover endpoint cannot take both filters at once, so the year is
    /// applied here.
    pub async fn filter_by_genre_and_year(&self, genre_id: u32, year: i32) -> FetchResult<Vec<Movie>> {
        let page = self.fetch_page(&QuerySpec::Genre(genre_id), 1).await?;
        let fetched = page.len();
        let movies = retain_release_year(page.into_items(), year);

        log::debug!(
            "Genre {} / {}: kept {} of {} movies",
            genre_id,
            year,
            movies.len(),
            fetched
        );
        Ok(movies)
    }

    /// One page of the top-rated listing at `cursor`, plus the cursor for the next call
    pub async fn top_rated(&self, cursor: PageCursor) -> FetchResult<TopRatedBatch> {
        let page = self
            .client
            .fetch_page(&QuerySpec::TopRated, cursor.page())
            .await?;

        let has_more = page.has_next();
        let next_cursor = cursor.advance()?;

        Ok(TopRatedBatch {
            movies: page.into_items(),
            next_cursor,
            has_more,
        })
    }

    /// Movie details with the release date rendered for display
    pub async fn movie_details_formatted(&self, movie_id: u64) -> FetchResult<FormattedMovieDetails> {
        let details = self.client.fetch_details(movie_id).await?;
        let formatted_date = details
            .movie
            .release_date
            .map(|date| date.format(RELEASE_DATE_FORMAT).to_string())
            .unwrap_or_else(|| "Unknown".to_string());

        Ok(FormattedMovieDetails {
            details,
            formatted_date,
        })
    }

    /// Concatenate page items in page order; no de-duplication or re-sorting
    pub fn flatten_pages<I>(pages: I) -> Vec<Movie>
    where
        I: IntoIterator<Item = MoviePage>,
    {
        pages.into_iter().flat_map(MoviePage::into_items).collect()
    }

    /// Order settled requests by their page tag and fail on the first error
    fn reassemble(
        mut settled: Vec<(PageNumber, FetchResult<MoviePage>)>,
    ) -> FetchResult<Vec<MoviePage>> {
        settled.sort_by_key(|(page, _)| *page);

        let mut pages = Vec::with_capacity(settled.len());
        for (requested, result) in settled {
            let page = result?;
            if page.index() != requested {
                return Err(FetchError::InvalidPayload {
                    message: format!(
                        "request for page {} produced page {}",
                        requested,
                        page.index()
                    ),
                });
            }
            pages.push(page);
        }
        Ok(pages)
    }
}

/// Stable sort by descending popularity; equal scores keep their order
pub fn rank_by_popularity(movies: &mut [Movie]) {
    movies.sort_by(|a, b| b.popularity.total_cmp(&a.popularity));
}

/// Keep only movies released in `year`, preserving order
pub fn retain_release_year(movies: Vec<Movie>, year: i32) -> Vec<Movie> {
    movies.into_iter().filter(|m| m.released_in(year)).collect()
}
