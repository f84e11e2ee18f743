//! Compound polarity scoring for search-result text.

/// Maps text to a compound polarity score in `[-1.0, 1.0]`.
///
/// Implementations are treated as black boxes by the classifier; swap in a
/// model-backed scorer or a fixed stub in tests.
pub trait SentimentScorer {
    fn score(&self, text: &str) -> f32;
}

impl<T: SentimentScorer + ?Sized> SentimentScorer for &T {
    fn score(&self, text: &str) -> f32 {
        (**self).score(text)
    }
}

/// Scorer backed by [`LEXICON`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> f32 {
        lexicon_score(text)
    }
}

/// Word weights for consumer appliance coverage.
///
/// Keys are lowercase single words. Values in `(0.0, 1.0]` are positive,
/// in `[-1.0, 0.0)` are negative.
pub(crate) const LEXICON: &[(&str, f32)] = &[
    // Positive signals
    ("best", 0.5),
    ("great", 0.4),
    ("good", 0.3),
    ("excellent", 0.5),
    ("love", 0.5),
    ("loved", 0.5),
    ("recommend", 0.4),
    ("recommended", 0.4),
    ("smart", 0.2),
    ("efficient", 0.4),
    ("quiet", 0.3),
    ("silent", 0.3),
    ("reliable", 0.4),
    ("durable", 0.4),
    ("premium", 0.3),
    ("innovative", 0.4),
    ("stylish", 0.3),
    ("affordable", 0.3),
    ("saving", 0.3),
    ("savings", 0.3),
    ("popular", 0.3),
    ("top", 0.3),
    ("award", 0.4),
    ("winner", 0.5),
    ("leading", 0.3),
    // Negative signals
    ("bad", -0.4),
    ("worst", -0.6),
    ("terrible", -0.6),
    ("poor", -0.4),
    ("noisy", -0.4),
    ("noise", -0.3),
    ("broken", -0.5),
    ("defective", -0.6),
    ("faulty", -0.5),
    ("failed", -0.4),
    ("failure", -0.4),
    ("problem", -0.3),
    ("issue", -0.2),
    ("complaint", -0.4),
    ("complaints", -0.4),
    ("expensive", -0.3),
    ("overpriced", -0.5),
    ("recall", -0.7),
    ("wobble", -0.3),
    ("slow", -0.3),
    ("disappointing", -0.5),
    ("avoid", -0.5),
];

/// Words that flip the polarity of the next lexicon hit.
const NEGATORS: &[&str] = &[
    "not", "no", "never", "isn't", "isnt", "don't", "dont", "doesn't", "doesnt", "without",
];

/// How many words after a negator it still applies to.
const NEGATION_WINDOW: usize = 3;

/// Score a text string using the lexicon.
///
/// Splits text into lowercase words, sums matching weights (flipping the sign
/// of a hit that closely follows a negator), and clamps the result to
/// `[-1.0, 1.0]`. Returns `0.0` for empty or unknown text.
#[must_use]
pub fn lexicon_score(text: &str) -> f32 {
    let mut score = 0.0_f32;
    let mut negation_left = 0usize;
    for word in text.split_whitespace() {
        let w = word
            .trim_matches(|c: char| !c.is_alphabetic())
            .to_lowercase();
        if w.is_empty() {
            continue;
        }
        if NEGATORS.contains(&w.as_str()) {
            negation_left = NEGATION_WINDOW;
            continue;
        }
        if let Some(&(_, weight)) = LEXICON.iter().find(|(lex_word, _)| *lex_word == w) {
            score += if negation_left > 0 { -weight } else { weight };
            negation_left = 0;
        } else {
            negation_left = negation_left.saturating_sub(1);
        }
    }
    score.clamp(-1.0, 1.0)
}
