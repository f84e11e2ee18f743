//! Narrative insights derived from a share-of-voice table.

use crate::error::AnalysisError;
use crate::types::{InsightSet, SovRow};

/// Derive the leader, laggard and sentiment-leader insights from `rows`.
///
/// Ties go to the row that appears first. A single-row table names the same
/// brand in all three insights.
///
/// # Errors
///
/// - [`AnalysisError::EmptyInput`] if `rows` is empty.
/// - [`AnalysisError::NoMentions`] if no row has a non-zero mention count.
pub fn recommend(rows: &[SovRow]) -> Result<InsightSet, AnalysisError> {
    let first = rows.first().ok_or(AnalysisError::EmptyInput)?;

    let leader = rows.iter().fold(first, |best, row| {
        if row.sov_percent > best.sov_percent {
            row
        } else {
            best
        }
    });

    let laggard = rows.iter().fold(first, |worst, row| {
        if row.sov_percent < worst.sov_percent {
            row
        } else {
            worst
        }
    });

    let (sentiment_leader, ratio) = rows
        .iter()
        .filter_map(|row| row.positive_ratio().map(|ratio| (row, ratio)))
        .fold(None, |best: Option<(&SovRow, f64)>, (row, ratio)| match best {
            Some((_, best_ratio)) if ratio <= best_ratio => best,
            _ => Some((row, ratio)),
        })
        .ok_or(AnalysisError::NoMentions)?;

    Ok(InsightSet::new(
        format!(
            "{} leads with {:.1}% SoV. Keep reinforcing this dominance.",
            leader.brand, leader.sov_percent
        ),
        format!(
            "{} has the lowest visibility ({:.1}%). Consider targeted campaigns for visibility.",
            laggard.brand, laggard.sov_percent
        ),
        format!(
            "{} enjoys the best sentiment ({:.0}% positive). Leverage testimonials or case studies.",
            sentiment_leader.brand,
            ratio * 100.0
        ),
    ))
}
