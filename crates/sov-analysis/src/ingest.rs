//! Keyword ingestion: search results in, mention records out.

use futures::stream::{self, StreamExt};
use sov_core::BrandRoster;
use sov_search::{SearchProvider, SearchResultItem};

use crate::classifier::SentimentClassifier;
use crate::error::AnalysisError;
use crate::mentions::MentionDetector;
use crate::scorer::SentimentScorer;
use crate::types::MentionRecord;

pub const DEFAULT_PLATFORM: &str = "Google";

/// Runs keywords through a search provider and emits one [`MentionRecord`]
/// per (result, detected brand) pair.
pub struct ResultIngester<P, S> {
    provider: P,
    detector: MentionDetector,
    classifier: SentimentClassifier<S>,
    platform: String,
    max_concurrency: usize,
}

impl<P, S> ResultIngester<P, S>
where
    P: SearchProvider,
    S: SentimentScorer,
{
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidBrandPattern`] if a roster brand cannot
    /// be compiled into a matcher.
    pub fn new(provider: P, roster: &BrandRoster, scorer: S) -> Result<Self, AnalysisError> {
        Ok(Self {
            provider,
            detector: MentionDetector::new(roster)?,
            classifier: SentimentClassifier::new(scorer),
            platform: DEFAULT_PLATFORM.to_string(),
            max_concurrency: 1,
        })
    }

    #[must_use]
    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    /// Allow up to `n` keyword searches in flight at once. Output order is
    /// unaffected. Values below 1 are treated as 1.
    #[must_use]
    pub fn with_max_concurrency(mut self, n: usize) -> Self {
        self.max_concurrency = n.max(1);
        self
    }

    /// Ingest one keyword.
    ///
    /// A provider failure is logged and yields no records; it is never
    /// returned to the caller.
    pub async fn ingest(&self, keyword: &str) -> Vec<MentionRecord> {
        let items = match self.provider.search(keyword).await {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(
                    keyword,
                    platform = %self.platform,
                    error = %e,
                    "search failed, treating keyword as having no results"
                );
                return Vec::new();
            }
        };

        let records = self.records_for_items(keyword, &items);
        tracing::debug!(
            keyword,
            items = items.len(),
            records = records.len(),
            "ingested keyword"
        );
        records
    }

    /// Ingest every keyword and concatenate the records in keyword order.
    pub async fn run<K: AsRef<str>>(&self, keywords: &[K]) -> Vec<MentionRecord> {
        // `buffered` yields in input order regardless of completion order.
        let per_keyword: Vec<Vec<MentionRecord>> = stream::iter(keywords)
            .map(|kw| self.ingest(kw.as_ref()))
            .buffered(self.max_concurrency)
            .collect()
            .await;

        let records: Vec<MentionRecord> = per_keyword.into_iter().flatten().collect();
        tracing::info!(
            keywords = keywords.len(),
            records = records.len(),
            "ingestion complete"
        );
        records
    }

    /// Turn one keyword's ranked items into mention records.
    ///
    /// Sentiment is computed once per item and shared by every brand the
    /// item mentions. Items mentioning no brand are never scored.
    pub fn records_for_items(
        &self,
        keyword: &str,
        items: &[SearchResultItem],
    ) -> Vec<MentionRecord> {
        let mut records = Vec::new();
        for (idx, item) in items.iter().enumerate() {
            let text = item.text();
            let brands = self.detector.mentioned(&text);
            if brands.is_empty() {
                continue;
            }
            let sentiment = self.classifier.classify(&text);
            for brand in brands {
                records.push(MentionRecord {
                    platform: self.platform.clone(),
                    keyword: keyword.to_string(),
                    rank: idx + 1,
                    brand: brand.to_string(),
                    text: text.clone(),
                    sentiment,
                    engagement: 0,
                });
            }
        }
        records
    }
}

#[cfg(test)]
#[path = "ingest_test.rs"]
mod tests;
