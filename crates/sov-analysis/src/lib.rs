//! Share of Voice aggregation pipeline.
//!
//! Searches each keyword, detects which roster brands every result mentions,
//! classifies the result's sentiment, and rolls the resulting mention records
//! up into per-brand share-of-voice rows and three narrative insights.

pub mod aggregate;
pub mod classifier;
pub mod error;
pub mod ingest;
pub mod mentions;
pub mod pipeline;
pub mod recommend;
pub mod scorer;
pub mod types;

pub use aggregate::aggregate;
pub use classifier::SentimentClassifier;
pub use error::AnalysisError;
pub use ingest::ResultIngester;
pub use mentions::MentionDetector;
pub use pipeline::run_share_of_voice;
pub use recommend::recommend;
pub use scorer::{lexicon_score, LexiconScorer, SentimentScorer};
pub use types::{InsightSet, MentionRecord, Sentiment, SovReport, SovRow};
