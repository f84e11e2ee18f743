//! `run` command handler.

use sov_analysis::{run_share_of_voice, AnalysisError, LexiconScorer, ResultIngester};
use sov_core::{AppConfig, BrandRoster};
use sov_search::GoogleSearchClient;

use crate::render::render_table;
use crate::OutputFormat;

/// Resolve the roster: explicit `--brand` values win over the brands file.
fn resolve_roster(config: &AppConfig, brand_overrides: &[String]) -> anyhow::Result<BrandRoster> {
    if brand_overrides.is_empty() {
        Ok(sov_core::load_brands(&config.brands_path)?)
    } else {
        Ok(BrandRoster::new(brand_overrides)?)
    }
}

/// Run the pipeline once and print every view from the same report.
///
/// # Errors
///
/// Returns an error if the roster or search client cannot be built, or the
/// report cannot be serialized. Finding no mentions is reported, not an error.
pub(crate) async fn run_sov(
    config: &AppConfig,
    keywords: &[String],
    brand_overrides: &[String],
    format: OutputFormat,
) -> anyhow::Result<()> {
    let roster = resolve_roster(config, brand_overrides)?;
    tracing::info!(
        brands = roster.len(),
        keywords = keywords.len(),
        "starting share-of-voice run"
    );

    let client = GoogleSearchClient::new(
        &config.google_api_key,
        &config.google_cx,
        config.search.request_timeout_secs,
    )?
    .with_results_per_query(config.search.results_per_query)
    .with_retry(config.search.max_retries, config.search.retry_backoff_base_ms);

    let ingester = ResultIngester::new(client, &roster, LexiconScorer)?
        .with_platform(config.platform.clone())
        .with_max_concurrency(config.max_concurrent_keywords);

    let report = match run_share_of_voice(&ingester, keywords).await {
        Ok(report) => report,
        Err(AnalysisError::NoData { keyword_count }) => {
            println!("no brand mentions found for {keyword_count} keyword(s); nothing to report");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    match format {
        OutputFormat::Table => print!("{}", render_table(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}
