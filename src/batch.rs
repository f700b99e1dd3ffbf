//! Batch drivers for the extraction and analysis jobs.
//!
//! Both drivers walk the input strictly in order, one article at a time.
//! Per-article failures are logged and skipped; they never abort the batch.

use std::time::Instant;

use futures::stream::{self, StreamExt};
use reqwest::Client;
use tracing::{error, info, instrument, warn};

use crate::analysis::analyze;
use crate::lexicon::Lexicons;
use crate::models::{InputRecord, MetricsRow};
use crate::scrapers::article::fetch_article;
use crate::store::ArticleStore;

/// Outcome of the extraction job.
#[derive(Debug, Default)]
pub struct ExtractionReport {
    /// Identifiers whose text was stored, in input order.
    pub saved: Vec<String>,
    /// Identifiers that could not be fetched or stored, in input order.
    pub failed: Vec<String>,
}

/// Outcome of the analysis job.
#[derive(Debug, Default)]
pub struct AnalysisReport {
    /// One row per analyzed article, in input order.
    pub rows: Vec<MetricsRow>,
    /// Identifiers with no stored text.
    pub skipped: Vec<String>,
}

/// Fetch every record's page and store its title and body.
#[instrument(level = "info", skip_all, fields(records = records.len()))]
pub async fn run_extraction(
    client: &Client,
    records: &[InputRecord],
    store: &ArticleStore,
) -> ExtractionReport {
    let t0 = Instant::now();

    let outcomes: Vec<(String, bool)> = stream::iter(records)
        .then(|record| async move {
            let stored = match fetch_article(client, &record.url).await {
                Ok(article) => store.save(&record.url_id, &article).await,
                Err(e) => Err(e),
            };
            match stored {
                Ok(path) => {
                    info!(url_id = %record.url_id, path = %path.display(), "Successfully saved article");
                    (record.url_id.clone(), true)
                }
                Err(e) if e.is_recoverable() => {
                    warn!(url_id = %record.url_id, url = %record.url, error = %e, "Failed to extract article");
                    (record.url_id.clone(), false)
                }
                Err(e) => {
                    error!(url_id = %record.url_id, error = %e, "Failed to store article");
                    (record.url_id.clone(), false)
                }
            }
        })
        .collect()
        .await;

    let mut report = ExtractionReport::default();
    for (id, ok) in outcomes {
        if ok {
            report.saved.push(id);
        } else {
            report.failed.push(id);
        }
    }

    info!(
        saved = report.saved.len(),
        failed = report.failed.len(),
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "Extraction complete"
    );
    report
}

/// Compute a metrics row for every identifier that has stored text.
#[instrument(level = "info", skip_all)]
pub async fn run_analysis<'a, I>(ids: I, store: &ArticleStore, lexicons: &Lexicons) -> AnalysisReport
where
    I: IntoIterator<Item = &'a str>,
{
    let t0 = Instant::now();
    let mut report = AnalysisReport::default();

    for id in ids {
        match store.load(id).await {
            Ok(article) => {
                let metrics = analyze(&article.text, lexicons);
                info!(url_id = %id, words = metrics.word_count, "Analyzed article");
                report.rows.push(metrics.into_row(article.id));
            }
            Err(e) => {
                warn!(url_id = %id, error = %e, "Article not found; skipping");
                report.skipped.push(id.to_string());
            }
        }
    }

    info!(
        analyzed = report.rows.len(),
        skipped = report.skipped.len(),
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "Analysis complete"
    );
    report
}
