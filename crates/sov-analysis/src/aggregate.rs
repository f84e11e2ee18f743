//! Per-brand share-of-voice rollup.

use std::collections::BTreeMap;

use crate::types::{MentionRecord, Sentiment, SovRow};

#[derive(Default)]
struct Tally {
    mentions: u64,
    positive_mentions: u64,
    engagement: u64,
}

/// Roll mention records up into one row per mentioned brand.
///
/// Returns `None` when `records` is empty: there is no data to share out,
/// and callers must not go on to derive insights. Brands with no records are
/// absent rather than zero-filled. Rows are ordered by brand name, and each
/// `sov_percent` is relative to the total mention count across all brands.
#[must_use]
pub fn aggregate(records: &[MentionRecord]) -> Option<Vec<SovRow>> {
    if records.is_empty() {
        tracing::info!("no mention records to aggregate");
        return None;
    }

    let mut tallies: BTreeMap<&str, Tally> = BTreeMap::new();
    for record in records {
        let tally = tallies.entry(record.brand.as_str()).or_default();
        tally.mentions += 1;
        if record.sentiment == Sentiment::Positive {
            tally.positive_mentions += 1;
        }
        tally.engagement = tally.engagement.saturating_add(record.engagement);
    }

    let total: u64 = tallies.values().map(|t| t.mentions).sum();
    #[allow(clippy::cast_precision_loss)]
    let total = total as f64;

    let rows = tallies
        .into_iter()
        .map(|(brand, tally)| {
            #[allow(clippy::cast_precision_loss)]
            let sov_percent = 100.0 * tally.mentions as f64 / total;
            SovRow {
                brand: brand.to_string(),
                mentions: tally.mentions,
                positive_mentions: tally.positive_mentions,
                engagement: tally.engagement,
                sov_percent,
            }
        })
        .collect();

    Some(rows)
}
