use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Recommendations were requested for an empty aggregation.
    #[error("cannot derive insights from an empty share-of-voice table")]
    EmptyInput,

    /// Every row has zero mentions, so no positive ratio can be computed.
    #[error("no brand has any mentions; sentiment ratio is undefined")]
    NoMentions,

    /// The search produced no mention records for any keyword.
    #[error("no brand mentions found across {keyword_count} keyword(s)")]
    NoData { keyword_count: usize },

    #[error("could not build matcher for brand '{brand}': {source}")]
    InvalidBrandPattern {
        brand: String,
        #[source]
        source: regex::Error,
    },
}
