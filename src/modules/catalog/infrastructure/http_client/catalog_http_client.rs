//! HTTP client for the remote catalog API
//!
//! Attaches the bearer credential, enforces the configured timeout and turns
//! every non-2xx status or unparsable body into a [`FetchError`]. It never
//! retries: a failed request is reported once and left to the caller.

use reqwest::{header, Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};

use crate::shared::errors::{FetchError, FetchResult};
use crate::shared::utils::LogContext;

const USER_AGENT: &str = concat!("movie-browser/", env!("CARGO_PKG_VERSION"));
const BODY_SNIPPET_LEN: usize = 200;

pub struct CatalogHttpClient {
    client: Client,
    access_token: String,
    provider_name: String,
    timeout: Duration,
}

impl CatalogHttpClient {
    /// Create a client that sends `access_token` as a bearer credential
    pub fn new(provider_name: &str, access_token: &str, timeout: Duration) -> FetchResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::Transport {
                message: format!("Failed to build {} HTTP client: {}", provider_name, e),
            })?;

        Ok(Self {
            client,
            access_token: access_token.to_string(),
            provider_name: provider_name.to_string(),
            timeout,
        })
    }

    /// Make a GET request and decode the JSON body
    pub async fn get<T>(&self, url: &str) -> FetchResult<T>
    where
        T: DeserializeOwned,
    {
        let endpoint = Self::endpoint_for_log(url);
        LogContext::api_call(&self.provider_name, endpoint, "started", None);
        let started = Instant::now();

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| self.classify_transport_error(e))?;

        let status = response.status();
        LogContext::api_call(
            &self.provider_name,
            endpoint,
            status.as_str(),
            Some(started.elapsed().as_millis() as u64),
        );

        if !status.is_success() {
            return Err(self.error_from_response(status, response).await);
        }

        self.parse_response(response).await
    }

    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn classify_transport_error(&self, err: reqwest::Error) -> FetchError {
        match FetchError::from(err) {
            FetchError::Timeout { message } => FetchError::Timeout {
                message: format!(
                    "{} API did not answer within {:?}: {}",
                    self.provider_name, self.timeout, message
                ),
            },
            FetchError::Transport { message } => FetchError::Transport {
                message: format!("{} API request failed: {}", self.provider_name, message),
            },
            other => other,
        }
    }

    /// Build an error for a non-2xx response, folding in the API's own message when present
    async fn error_from_response(&self, status: StatusCode, response: Response) -> FetchError {
        let body = response.text().await.unwrap_or_default();
        let detail = api_status_message(&body);

        let message = match detail {
            Some(detail) => format!(
                "{} API returned error: {} ({})",
                self.provider_name, status, detail
            ),
            None => format!("{} API returned error: {}", self.provider_name, status),
        };

        log::warn!("{}", message);

        FetchError::Http {
            status: status.as_u16(),
            message,
        }
    }

    /// Parse the response body as JSON
    async fn parse_response<T>(&self, response: Response) -> FetchResult<T>
    where
        T: DeserializeOwned,
    {
        let response_text = response.text().await.map_err(|e| FetchError::Decode {
            message: format!("Failed to read {} response: {}", self.provider_name, e),
        })?;

        serde_json::from_str(&response_text).map_err(|e| FetchError::Decode {
            message: format!(
                "Failed to parse {} response: {}. Response: {}",
                self.provider_name,
                e,
                body_snippet(&response_text)
            ),
        })
    }

    /// Path portion of a URL, without the query string
    fn endpoint_for_log(url: &str) -> &str {
        url.split('?').next().unwrap_or(url)
    }
}

/// Pull `status_message` out of a JSON error body
pub(crate) fn api_status_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("status_message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
}

fn body_snippet(body: &str) -> String {
    if body.len() > BODY_SNIPPET_LEN {
        let cut = (0..=BODY_SNIPPET_LEN)
            .rev()
            .find(|i| body.is_char_boundary(*i))
            .unwrap_or(0);
        format!("{}...", &body[..cut])
    } else {
        body.to_string()
    }
}
