use crate::scorer::SentimentScorer;
use crate::types::Sentiment;

/// Scores at or above this are positive.
pub const POSITIVE_THRESHOLD: f32 = 0.05;
/// Scores at or below this are negative.
pub const NEGATIVE_THRESHOLD: f32 = -0.05;

impl Sentiment {
    /// Bucket a compound score. Anything strictly between the thresholds,
    /// including `NaN`, is neutral.
    #[must_use]
    pub fn from_score(score: f32) -> Self {
        if score >= POSITIVE_THRESHOLD {
            Sentiment::Positive
        } else if score <= NEGATIVE_THRESHOLD {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

/// Turns a scorer's numeric output into a [`Sentiment`] label.
#[derive(Debug, Clone, Default)]
pub struct SentimentClassifier<S> {
    scorer: S,
}

impl<S: SentimentScorer> SentimentClassifier<S> {
    #[must_use]
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    /// Classify `text`. Blank text is neutral and never reaches the scorer.
    pub fn classify(&self, text: &str) -> Sentiment {
        if text.trim().is_empty() {
            return Sentiment::Neutral;
        }
        Sentiment::from_score(self.scorer.score(text))
    }
}
