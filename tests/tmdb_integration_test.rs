//! Live TMDB checks. Run with `TMDB_ACCESS_TOKEN` set and `--ignored`.

use movie_browser_lib::modules::catalog::QuerySpec;
use movie_browser_lib::shared::application::PageCursor;
use movie_browser_lib::{build_aggregation_service, CatalogConfig};
use std::time::Duration;
use tokio::time::timeout;

const TEST_TIMEOUT: Duration = Duration::from_secs(30);
const DRAMA_GENRE_ID: u32 = 18;
const SHAWSHANK_ID: u64 = 278;

fn live_service() -> movie_browser_lib::AggregationService {
    let config = CatalogConfig::from_env().expect("TMDB_ACCESS_TOKEN must be set for live tests");
    build_aggregation_service(&config).expect("service should build")
}

#[tokio::test]
#[ignore]
async fn test_live_top_rated_pages_in_order() {
    let service = live_service();

    let pages = timeout(TEST_TIMEOUT, service.fetch_pages(&QuerySpec::TopRated, 1, 3))
        .await
        .expect("timed out")
        .expect("live aggregation failed");

    let indices: Vec<u32> = pages.iter().map(|p| p.index().get()).collect();
    assert_eq!(indices, vec![1, 2, 3]);
    assert!(pages.iter().all(|p| p.len() <= 20));
}

#[tokio::test]
#[ignore]
async fn test_live_search_is_ranked() {
    let service = live_service();

    let movies = timeout(TEST_TIMEOUT, service.search_and_rank("Godfather"))
        .await
        .expect("timed out")
        .expect("live search failed");

    assert!(!movies.is_empty());
    assert!(movies
        .windows(2)
        .all(|pair| pair[0].popularity >= pair[1].popularity));
}

#[tokio::test]
#[ignore]
async fn test_live_genre_and_year() {
    let service = live_service();

    let movies = timeout(
        TEST_TIMEOUT,
        service.filter_by_genre_and_year(DRAMA_GENRE_ID, 1994),
    )
    .await
    .expect("timed out")
    .expect("live discover failed");

    assert!(movies.iter().all(|m| m.release_year() == Some(1994)));
}

#[tokio::test]
#[ignore]
async fn test_live_details_and_cursor() {
    let service = live_service();

    let details = timeout(TEST_TIMEOUT, service.movie_details_formatted(SHAWSHANK_ID))
        .await
        .expect("timed out")
        .expect("live details failed");
    assert_eq!(details.details.movie.id, SHAWSHANK_ID);
    assert_eq!(details.formatted_date, "September 23, 1994");

    let batch = timeout(TEST_TIMEOUT, service.top_rated(PageCursor::start()))
        .await
        .expect("timed out")
        .expect("live top rated failed");
    assert!(batch.has_more);
    assert_eq!(batch.next_cursor.page().get(), 2);
}
