//! Whole-word, case-insensitive brand detection.

use regex::{Regex, RegexBuilder};
use sov_core::BrandRoster;

use crate::error::AnalysisError;

struct BrandPattern {
    brand: String,
    regex: Regex,
}

/// Detects which roster brands a text mentions.
///
/// Brand names are escaped and matched literally, so `V-Guard` or a name
/// containing `.` or `+` never acts as a pattern. A hit only counts when the
/// characters on both sides are non-alphanumeric or the string edge:
/// `Usha` matches "Usha fans" but not "Ushatech".
pub struct MentionDetector {
    patterns: Vec<BrandPattern>,
}

impl MentionDetector {
    /// Compile one literal matcher per roster brand.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidBrandPattern`] if a brand name is too
    /// large for the regex engine.
    pub fn new(roster: &BrandRoster) -> Result<Self, AnalysisError> {
        let patterns = roster
            .iter()
            .map(|brand| {
                RegexBuilder::new(&regex::escape(brand))
                    .case_insensitive(true)
                    .build()
                    .map(|regex| BrandPattern {
                        brand: brand.to_string(),
                        regex,
                    })
                    .map_err(|source| AnalysisError::InvalidBrandPattern {
                        brand: brand.to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Per-brand detection flags, in roster order.
    #[must_use]
    pub fn detect(&self, text: &str) -> Vec<(&str, bool)> {
        self.patterns
            .iter()
            .map(|p| (p.brand.as_str(), contains_whole_word(&p.regex, text)))
            .collect()
    }

    /// Brands mentioned in `text`, in roster order.
    #[must_use]
    pub fn mentioned(&self, text: &str) -> Vec<&str> {
        if text.is_empty() {
            return Vec::new();
        }
        self.patterns
            .iter()
            .filter(|p| contains_whole_word(&p.regex, text))
            .map(|p| p.brand.as_str())
            .collect()
    }
}

/// Whether `regex` matches somewhere in `text` with non-alphanumeric
/// neighbours. Rejected candidates are retried one character further on so an
/// embedded occurrence cannot hide a later standalone one.
fn contains_whole_word(regex: &Regex, text: &str) -> bool {
    let mut start = 0;
    while start <= text.len() {
        let Some(m) = regex.find_at(text, start) else {
            return false;
        };
        let before_ok = text[..m.start()]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric());
        let after_ok = text[m.end()..]
            .chars()
            .next()
            .is_none_or(|c| !c.is_alphanumeric());
        if before_ok && after_ok {
            return true;
        }
        start = m.start() + text[m.start()..].chars().next().map_or(1, char::len_utf8);
    }
    false
}
