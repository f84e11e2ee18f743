use serde::{Deserialize, Serialize};

/// One ranked item returned for a query.
///
/// Either field may be missing from the provider payload; consumers treat a
/// missing field as empty text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub title: Option<String>,
    pub snippet: Option<String>,
    pub link: Option<String>,
}

impl SearchResultItem {
    #[must_use]
    pub fn new(title: impl Into<String>, snippet: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            snippet: Some(snippet.into()),
            link: None,
        }
    }

    /// Title and snippet joined by a single space.
    ///
    /// Missing or blank parts are skipped so no stray separator is added.
    #[must_use]
    pub fn text(&self) -> String {
        let title = self.title.as_deref().map(str::trim).unwrap_or_default();
        let snippet = self.snippet.as_deref().map(str::trim).unwrap_or_default();
        match (title.is_empty(), snippet.is_empty()) {
            (false, false) => format!("{title} {snippet}"),
            (false, true) => title.to_string(),
            (true, false) => snippet.to_string(),
            (true, true) => String::new(),
        }
    }
}

/// Custom Search JSON API response body. Only the fields we read.
#[derive(Debug, Deserialize)]
pub(crate) struct CustomSearchResponse {
    #[serde(default)]
    pub(crate) items: Vec<SearchResultItem>,
}

/// Error envelope returned by Google APIs, e.g. `{"error": {"code": 429, ...}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorEnvelope {
    pub(crate) error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub(crate) code: u16,
    #[serde(default)]
    pub(crate) message: String,
    #[serde(default)]
    pub(crate) status: Option<String>,
    #[serde(default)]
    pub(crate) errors: Vec<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorDetail {
    #[serde(default)]
    pub(crate) reason: Option<String>,
}

impl ApiErrorBody {
    /// Whether the error signals an exhausted rate or daily quota.
    pub(crate) fn is_quota(&self) -> bool {
        if self.code == 429 || self.status.as_deref() == Some("RESOURCE_EXHAUSTED") {
            return true;
        }
        self.errors.iter().any(|e| {
            matches!(
                e.reason.as_deref(),
                Some("rateLimitExceeded" | "dailyLimitExceeded" | "userRateLimitExceeded")
            )
        })
    }
}
