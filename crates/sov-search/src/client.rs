//! HTTP client for the Google Custom Search JSON API.
//!
//! Wraps `reqwest` with key/engine management, retry on transient failures,
//! and typed response decoding. Quota exhaustion surfaces as
//! [`SearchError::QuotaExceeded`] so callers can tell it apart from outages.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};

use crate::error::SearchError;
use crate::provider::SearchProvider;
use crate::retry::retry_with_backoff;
use crate::types::{ApiErrorEnvelope, CustomSearchResponse, SearchResultItem};

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/";
const ENDPOINT_PATH: &str = "customsearch/v1";
const MAX_RESULTS_PER_PAGE: u8 = 10;

/// Client for the Custom Search JSON API.
///
/// Use [`GoogleSearchClient::new`] for production or
/// [`GoogleSearchClient::with_base_url`] to point at a mock server in tests.
pub struct GoogleSearchClient {
    client: Client,
    api_key: String,
    cx: String,
    endpoint: Url,
    results_per_query: u8,
    max_retries: u32,
    retry_backoff_base_ms: u64,
}

impl GoogleSearchClient {
    /// Creates a new client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, cx: &str, timeout_secs: u64) -> Result<Self, SearchError> {
        Self::with_base_url(api_key, cx, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`SearchError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        cx: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("sov/0.1 (share-of-voice)")
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&normalised)
            .and_then(|base| base.join(ENDPOINT_PATH))
            .map_err(|e| SearchError::InvalidBaseUrl {
                url: base_url.to_owned(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            cx: cx.to_owned(),
            endpoint,
            results_per_query: MAX_RESULTS_PER_PAGE,
            max_retries: 2,
            retry_backoff_base_ms: 500,
        })
    }

    /// Sets how many results each query asks for, clamped to `1..=10`.
    #[must_use]
    pub fn with_results_per_query(mut self, n: u8) -> Self {
        self.results_per_query = n.clamp(1, MAX_RESULTS_PER_PAGE);
        self
    }

    #[must_use]
    pub fn with_retry(mut self, max_retries: u32, backoff_base_ms: u64) -> Self {
        self.max_retries = max_retries;
        self.retry_backoff_base_ms = backoff_base_ms;
        self
    }

    /// Runs one query and returns its items in rank order.
    ///
    /// # Errors
    ///
    /// - [`SearchError::QuotaExceeded`] on HTTP 429 or a quota error body.
    /// - [`SearchError::Api`] for other error bodies and 4xx statuses.
    /// - [`SearchError::Http`] on network failure or 5xx after retries.
    /// - [`SearchError::Deserialize`] if a 2xx body is not the expected shape.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResultItem>, SearchError> {
        let url = self.build_url(query);
        let items = retry_with_backoff(self.max_retries, self.retry_backoff_base_ms, || {
            self.request_items(&url, query)
        })
        .await?;
        tracing::debug!(query, count = items.len(), "search returned items");
        Ok(items)
    }

    fn build_url(&self, query: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("key", &self.api_key)
            .append_pair("cx", &self.cx)
            .append_pair("q", query)
            .append_pair("num", &self.results_per_query.to_string());
        url
    }

    async fn request_items(
        &self,
        url: &Url,
        query: &str,
    ) -> Result<Vec<SearchResultItem>, SearchError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(SearchError::QuotaExceeded(format!(
                "HTTP 429 for query '{query}'"
            )));
        }
        let response = if status.is_server_error() {
            response.error_for_status()?
        } else {
            response
        };

        let body = response.text().await?;
        if !status.is_success() {
            return Err(Self::api_error(status, &body));
        }

        let parsed: CustomSearchResponse =
            serde_json::from_str(&body).map_err(|e| SearchError::Deserialize {
                context: format!("search(q={query})"),
                source: e,
            })?;
        Ok(parsed.items)
    }

    /// Maps a non-2xx, non-5xx response to a typed error.
    fn api_error(status: StatusCode, body: &str) -> SearchError {
        match serde_json::from_str::<ApiErrorEnvelope>(body) {
            Ok(envelope) if envelope.error.is_quota() => {
                SearchError::QuotaExceeded(envelope.error.message)
            }
            Ok(envelope) => SearchError::Api {
                code: if envelope.error.code == 0 {
                    status.as_u16()
                } else {
                    envelope.error.code
                },
                message: envelope.error.message,
            },
            Err(_) => SearchError::Api {
                code: status.as_u16(),
                message: body.chars().take(200).collect(),
            },
        }
    }
}

impl SearchProvider for GoogleSearchClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchResultItem>, SearchError> {
        GoogleSearchClient::search(self, query).await
    }
}
