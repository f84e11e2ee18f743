//! Plain-text rendering of a share-of-voice report.

use std::fmt::Write as _;

use sov_analysis::SovReport;

const TEXT_WIDTH: usize = 60;
/// Bar characters per 100 % share.
const BAR_WIDTH: f64 = 40.0;

/// Render raw mentions, the SoV table with a bar column, and the insights.
pub(crate) fn render_table(report: &SovReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Raw search mentions ({})", report.records.len());
    let _ = writeln!(
        out,
        "{:<24}{:<6}{:<20}{:<10}TEXT",
        "KEYWORD", "RANK", "BRAND", "SENTIMENT"
    );
    for r in &report.records {
        let _ = writeln!(
            out,
            "{:<24}{:<6}{:<20}{:<10}{}",
            r.keyword,
            r.rank,
            r.brand,
            r.sentiment.to_string(),
            truncate(&r.text, TEXT_WIDTH)
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Share of Voice");
    let _ = writeln!(
        out,
        "{:<20}{:<10}{:<10}{:<12}{:<8}",
        "BRAND", "MENTIONS", "POSITIVE", "ENGAGEMENT", "SOV%"
    );
    for row in &report.rows {
        let _ = writeln!(
            out,
            "{:<20}{:<10}{:<10}{:<12}{:<8.1}{}",
            row.brand,
            row.mentions,
            row.positive_mentions,
            row.engagement,
            row.sov_percent,
            bar(row.sov_percent)
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Recommendations");
    for (i, insight) in report.insights.iter().enumerate() {
        let _ = writeln!(out, "{}. {insight}", i + 1);
    }

    out
}

fn bar(sov_percent: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let len = (sov_percent.clamp(0.0, 100.0) / 100.0 * BAR_WIDTH).round() as usize;
    "#".repeat(len)
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    cut.push_str("...");
    cut
}
