use thiserror::Error;

/// Errors returned by a search provider.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider rejected the request because a rate or quota limit was hit.
    #[error("search quota exceeded: {0}")]
    QuotaExceeded(String),

    /// The provider returned an `error` object in the response body.
    #[error("search API error {code}: {message}")]
    Api { code: u16, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
