//! Walks through the catalog operations against the live TMDB API.
//!
//! Needs `TMDB_ACCESS_TOKEN` in the environment or a `.env` file:
//!
//! ```text
//! cargo run --example catalog_demo
//! ```

use anyhow::Context;
use movie_browser_lib::modules::catalog::{CatalogFilters, ImageSize, ListingStats, QuerySpec};
use movie_browser_lib::shared::application::PageCursor;
use movie_browser_lib::shared::utils::init_logger;
use movie_browser_lib::{build_aggregation_service, AggregationService, CatalogConfig, Movie};

const SHAWSHANK_ID: u64 = 278;
const DRAMA_GENRE_ID: u32 = 18;

fn print_movies(heading: &str, movies: &[Movie], limit: usize) {
    println!("\n== {} ({} movies)", heading, movies.len());
    for movie in movies.iter().take(limit) {
        let year = movie
            .release_year()
            .map(|y| y.to_string())
            .unwrap_or_else(|| "----".to_string());
        println!(
            "  {:>8}  {}  {:.1}  {}",
            movie.id, year, movie.vote_average, movie.title
        );
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    let config = CatalogConfig::from_env().context("loading catalog configuration")?;
    let service = build_aggregation_service(&config)?;

    let movies = service
        .fetch_all_items(&QuerySpec::TopRated, 1, 3)
        .await
        .context("fetching top rated pages")?;
    print_movies("Top rated, pages 1-3", &movies, 10);
    let stats = ListingStats::from_movies(&movies, 3);
    println!(
        "  {} movies over {} pages, average rating {}",
        stats.total_movies,
        stats.pages_loaded,
        stats.average_rating_display().unwrap_or_else(|| "n/a".to_string())
    );

    let mut cursor = PageCursor::start();
    for _ in 0..2 {
        let batch = service.top_rated(cursor).await?;
        print_movies(&format!("Load more, page {}", cursor.page()), &batch.movies, 3);
        if !batch.has_more {
            break;
        }
        cursor = batch.next_cursor;
    }

    let ranked = service.search_and_rank("Godfather").await?;
    print_movies("Search 'Godfather' by popularity", &ranked, 5);

    let high_rated = service.filter_by_rating(8.5, 1, 2).await?;
    let high_rated = AggregationService::flatten_pages(high_rated);
    print_movies("Rated 8.5+", &high_rated, 5);

    let dramas = service
        .filter_by_genre_and_year(DRAMA_GENRE_ID, 1994)
        .await?;
    print_movies("Drama from 1994", &dramas, 5);

    let filters = CatalogFilters {
        year: Some(1999),
        ..Default::default()
    };
    let spec = filters.clone().into_query_spec();
    let pages = service.fetch_pages_with_filters(filters, 1, 2).await?;
    let label = spec.label();
    let from_filters = AggregationService::flatten_pages(pages);
    print_movies(&label, &from_filters, 5);

    let details = service.movie_details_formatted(SHAWSHANK_ID).await?;
    println!(
        "\n== {} ({})\n  {}\n  Genres: {}\n  Poster: {}",
        details.details.movie.title,
        details.formatted_date,
        details.details.tagline.as_deref().unwrap_or(""),
        details.details.genre_names().join(", "),
        details
            .details
            .movie
            .poster_url(ImageSize::W500)
            .unwrap_or_else(|| "none".to_string())
    );

    Ok(())
}
