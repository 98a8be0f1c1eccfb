use serde::{Deserialize, Serialize};

pub const TMDB_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Rendition widths served by the TMDB image CDN
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSize {
    W92,
    W154,
    W185,
    W342,
    W500,
    W780,
    Original,
}

impl ImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::W92 => "w92",
            ImageSize::W154 => "w154",
            ImageSize::W185 => "w185",
            ImageSize::W342 => "w342",
            ImageSize::W500 => "w500",
            ImageSize::W780 => "w780",
            ImageSize::Original => "original",
        }
    }
}

/// Build full image URL from file path
pub fn image_url(base_url: &str, file_path: &str, size: ImageSize) -> String {
    format!(
        "{}/{}{}",
        base_url.trim_end_matches('/'),
        size.as_str(),
        file_path
    )
}
