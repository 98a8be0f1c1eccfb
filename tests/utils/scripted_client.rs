/// A `CatalogClient` that answers from a per-page script
///
/// Each page can be given its own delay so that completion order differs from
/// request order, or an error to inject a failure.
use async_trait::async_trait;
use movie_browser_lib::modules::catalog::{
    CatalogClient, Movie, MovieDetails, MoviePage, QuerySpec,
};
use movie_browser_lib::shared::application::PageNumber;
use movie_browser_lib::shared::errors::{FetchError, FetchResult};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use super::factories::{movies_for_page, page_of};

#[derive(Clone)]
enum Outcome {
    Items(usize),
    Movies(Vec<Movie>),
    Fail(FetchError),
}

#[derive(Clone)]
struct PageScript {
    delay: Duration,
    outcome: Outcome,
}

pub struct ScriptedCatalogClient {
    scripts: HashMap<u32, PageScript>,
    default_items: usize,
    total_pages: u32,
    calls: AtomicUsize,
    completion_order: Mutex<Vec<u32>>,
    queries: Mutex<Vec<QuerySpec>>,
}

impl ScriptedCatalogClient {
    pub fn new() -> Self {
        Self {
            scripts: HashMap::new(),
            default_items: 20,
            total_pages: 500,
            calls: AtomicUsize::new(0),
            completion_order: Mutex::new(Vec::new()),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn items_per_page(mut self, count: usize) -> Self {
        self.default_items = count;
        self
    }

    pub fn total_pages(mut self, total_pages: u32) -> Self {
        self.total_pages = total_pages;
        self
    }

    /// Page `page` answers with `count` items after `delay_ms`
    pub fn page(mut self, page: u32, count: usize, delay_ms: u64) -> Self {
        self.scripts.insert(
            page,
            PageScript {
                delay: Duration::from_millis(delay_ms),
                outcome: Outcome::Items(count),
            },
        );
        self
    }

    /// Page `page` answers with exactly `movies`, in order
    pub fn page_movies(mut self, page: u32, movies: Vec<Movie>, delay_ms: u64) -> Self {
        self.scripts.insert(
            page,
            PageScript {
                delay: Duration::from_millis(delay_ms),
                outcome: Outcome::Movies(movies),
            },
        );
        self
    }

    /// Page `page` fails with `error` after `delay_ms`
    pub fn failing_page(mut self, page: u32, error: FetchError, delay_ms: u64) -> Self {
        self.scripts.insert(
            page,
            PageScript {
                delay: Duration::from_millis(delay_ms),
                outcome: Outcome::Fail(error),
            },
        );
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Pages in the order their responses settled
    pub fn completion_order(&self) -> Vec<u32> {
        self.completion_order.lock().unwrap().clone()
    }

    pub fn queries(&self) -> Vec<QuerySpec> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl CatalogClient for ScriptedCatalogClient {
    async fn fetch_page(&self, spec: &QuerySpec, page: PageNumber) -> FetchResult<MoviePage> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(spec.clone());

        let index = page.get();
        let script = self.scripts.get(&index).cloned().unwrap_or(PageScript {
            delay: Duration::ZERO,
            outcome: Outcome::Items(self.default_items),
        });

        tokio::time::sleep(script.delay).await;
        self.completion_order.lock().unwrap().push(index);

        match script.outcome {
            Outcome::Items(count) => Ok(page_of(index, movies_for_page(index, count), self.total_pages)),
            Outcome::Movies(movies) => Ok(page_of(index, movies, self.total_pages)),
            Outcome::Fail(error) => Err(error),
        }
    }

    async fn fetch_details(&self, movie_id: u64) -> FetchResult<MovieDetails> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(FetchError::NotFound {
            message: format!("no scripted details for {}", movie_id),
        })
    }
}
