pub mod movie;
pub mod movie_details;
pub mod movie_page;

pub use movie::Movie;
pub use movie_details::{Genre, MovieDetails};
pub use movie_page::{MoviePage, TMDB_PAGE_SIZE};
