use std::path::PathBuf;

/// Tuning knobs for the search provider client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSettings {
    /// Results requested per query. The Custom Search API caps a page at 10.
    pub results_per_query: u8,
    pub request_timeout_secs: u64,
    pub max_retries: u32,
    pub retry_backoff_base_ms: u64,
}

#[derive(Clone)]
pub struct AppConfig {
    pub google_api_key: String,
    pub google_cx: String,
    pub brands_path: PathBuf,
    pub log_level: String,
    /// Label stamped on every mention record.
    pub platform: String,
    pub max_concurrent_keywords: usize,
    pub search: SearchSettings,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("google_api_key", &"[redacted]")
            .field("google_cx", &self.google_cx)
            .field("brands_path", &self.brands_path)
            .field("log_level", &self.log_level)
            .field("platform", &self.platform)
            .field("max_concurrent_keywords", &self.max_concurrent_keywords)
            .field("search", &self.search)
            .finish()
    }
}
