//! Share-of-voice pipeline orchestration.

use chrono::Utc;
use sov_search::SearchProvider;

use crate::aggregate::aggregate;
use crate::error::AnalysisError;
use crate::ingest::ResultIngester;
use crate::recommend::recommend;
use crate::scorer::SentimentScorer;
use crate::types::{MentionRecord, SovReport};

/// Run the full pipeline once for `keywords`.
///
/// 1. Search and ingest every keyword (failed keywords contribute nothing).
/// 2. Aggregate mention records into per-brand rows.
/// 3. Derive the three insights.
///
/// # Errors
///
/// Returns [`AnalysisError::NoData`] when no keyword produced a single brand
/// mention. Per-keyword search failures are logged, not returned.
pub async fn run_share_of_voice<P, S, K>(
    ingester: &ResultIngester<P, S>,
    keywords: &[K],
) -> Result<SovReport, AnalysisError>
where
    P: SearchProvider,
    S: SentimentScorer,
    K: AsRef<str>,
{
    let records = ingester.run(keywords).await;
    let keywords: Vec<String> = keywords.iter().map(|k| k.as_ref().to_string()).collect();
    SovReport::from_records(keywords, records)
}

impl SovReport {
    /// Build a report from already-ingested records.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::NoData`] if `records` is empty.
    pub fn from_records(
        keywords: Vec<String>,
        records: Vec<MentionRecord>,
    ) -> Result<Self, AnalysisError> {
        let Some(rows) = aggregate(&records) else {
            tracing::warn!(
                keywords = keywords.len(),
                "no brand mentions found; skipping share-of-voice"
            );
            return Err(AnalysisError::NoData {
                keyword_count: keywords.len(),
            });
        };
        let insights = recommend(&rows)?;

        tracing::info!(
            records = records.len(),
            brands = rows.len(),
            "share-of-voice report built"
        );

        Ok(Self {
            generated_at: Utc::now(),
            keywords,
            records,
            rows,
            insights,
        })
    }
}
