use chrono::{DateTime, Utc};
use serde::Serialize;

/// Three-way sentiment label derived from a compound polarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Negative => write!(f, "negative"),
            Sentiment::Neutral => write!(f, "neutral"),
        }
    }
}

/// One brand detected in one search result.
///
/// A result mentioning several brands yields one record per brand, each
/// carrying the full result text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MentionRecord {
    pub platform: String,
    pub keyword: String,
    /// 1-based position within this keyword's result list.
    pub rank: usize,
    pub brand: String,
    pub text: String,
    pub sentiment: Sentiment,
    /// Reserved for likes/shares/views. Always zero from search ingestion.
    pub engagement: u64,
}

/// Aggregated share-of-voice figures for one brand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SovRow {
    pub brand: String,
    pub mentions: u64,
    pub positive_mentions: u64,
    pub engagement: u64,
    pub sov_percent: f64,
}

impl SovRow {
    /// `positive_mentions / mentions`, or `None` when the brand has no mentions.
    #[must_use]
    pub fn positive_ratio(&self) -> Option<f64> {
        if self.mentions == 0 {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let ratio = self.positive_mentions as f64 / self.mentions as f64;
        Some(ratio)
    }
}

/// The three narrative insights, always in leader / laggard / sentiment order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InsightSet([String; 3]);

impl InsightSet {
    pub(crate) fn new(leader: String, laggard: String, sentiment: String) -> Self {
        Self([leader, laggard, sentiment])
    }

    #[must_use]
    pub fn leader(&self) -> &str {
        &self.0[0]
    }

    #[must_use]
    pub fn laggard(&self) -> &str {
        &self.0[1]
    }

    #[must_use]
    pub fn sentiment_leader(&self) -> &str {
        &self.0[2]
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.0.into()
    }
}

/// Everything one pipeline run produced. Views render from this; they never
/// re-run ingestion.
#[derive(Debug, Clone, Serialize)]
pub struct SovReport {
    pub generated_at: DateTime<Utc>,
    pub keywords: Vec<String>,
    pub records: Vec<MentionRecord>,
    pub rows: Vec<SovRow>,
    pub insights: InsightSet,
}
