//! Catalog connection settings.
//!
//! Values come from the process environment (optionally seeded from a `.env`
//! file) with sensible TMDB defaults for everything except the access token.

use std::time::Duration;

use crate::shared::errors::{AppError, AppResult};

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";
pub const DEFAULT_LANGUAGE: &str = "en-US";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const ENV_ACCESS_TOKEN: &str = "TMDB_ACCESS_TOKEN";
pub const ENV_BASE_URL: &str = "TMDB_BASE_URL";
pub const ENV_LANGUAGE: &str = "TMDB_LANGUAGE";
pub const ENV_TIMEOUT_SECS: &str = "TMDB_TIMEOUT_SECS";

#[derive(Clone, PartialEq)]
pub struct CatalogConfig {
    pub base_url: String,
    pub image_base_url: String,
    /// Static bearer credential attached to every request
    pub access_token: String,
    pub language: String,
    /// Upper bound for a single page request
    pub request_timeout: Duration,
}

// Manual Debug so the bearer token never reaches a log line
impl std::fmt::Debug for CatalogConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogConfig")
            .field("base_url", &self.base_url)
            .field("image_base_url", &self.image_base_url)
            .field("access_token", &"<redacted>")
            .field("language", &self.language)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            access_token: String::new(),
            language: DEFAULT_LANGUAGE.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl CatalogConfig {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            ..Self::default()
        }
    }

    /// Load configuration from the environment
    pub fn from_env() -> AppResult<Self> {
        // Load environment variables
        if let Err(e) = dotenvy::dotenv() {
            log::debug!("No .env file loaded: {}", e);
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup (environment, test maps)
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let access_token = lookup(ENV_ACCESS_TOKEN)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                AppError::ConfigError(format!("{} is not set", ENV_ACCESS_TOKEN))
            })?;

        let mut config = Self::new(access_token);

        if let Some(base_url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            config = config.with_base_url(base_url);
        }

        if let Some(language) = lookup(ENV_LANGUAGE).filter(|v| !v.trim().is_empty()) {
            config = config.with_language(language);
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|e| {
                AppError::ConfigError(format!("{} must be a whole number: {}", ENV_TIMEOUT_SECS, e))
            })?;
            if secs == 0 {
                return Err(AppError::ConfigError(format!(
                    "{} must be greater than zero",
                    ENV_TIMEOUT_SECS
                )));
            }
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_image_base_url(mut self, image_base_url: impl Into<String>) -> Self {
        self.image_base_url = image_base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
