pub mod app_error;
pub mod fetch_error;

pub use app_error::{AppError, AppResult};
pub use fetch_error::{FetchError, FetchResult};
