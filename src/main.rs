//! # Article Metrics
//!
//! Two batch jobs over a table of article URLs:
//!
//! 1. **extract**: fetch each URL, keep the first `<h1>` as the title and
//!    every `<p>` as the body, and store `"{title}\n\n{body}"` under
//!    `articles/{URL_ID}.txt`
//! 2. **analyze**: load each stored article and compute sentiment scores,
//!    readability indices (average sentence length, complex words, Fog index)
//!    and word-level statistics, writing one row per article to a report
//!
//! ## Usage
//!
//! ```sh
//! article_metrics extract -i Input.csv
//! article_metrics analyze -o "Output Data Structure.csv"
//! article_metrics run --format json -o report.json
//! ```
//!
//! Articles are processed one at a time in input order. An article that
//! cannot be fetched or loaded is logged and skipped. A missing word list
//! aborts the run before any article is analyzed.

use std::error::Error;
use std::time::Instant;

use clap::Parser;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod analysis;
mod batch;
mod cli;
mod error;
mod input;
mod lexicon;
mod models;
mod outputs;
mod scrapers;
mod store;
mod utils;

use batch::{run_analysis, run_extraction};
use cli::{AnalyzeArgs, Cli, Command, ExtractArgs, RunArgs};
use input::read_input_table;
use lexicon::{LexiconSources, Lexicons};
use store::ArticleStore;
use utils::ensure_writable_dir;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = Instant::now();
    let cli = Cli::parse();
    debug!(?cli, "Parsed CLI arguments");

    let result = match &cli.command {
        Command::Extract(args) => extract(args).await,
        Command::Analyze(args) => analyze(args).await,
        Command::Run(args) => run(args).await,
    };

    if let Err(e) = &result {
        error!(error = %e, "Run aborted");
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    result.map_err(Into::into)
}

#[instrument(level = "info", skip_all)]
async fn extract(args: &ExtractArgs) -> error::Result<()> {
    let records = read_input_table(&args.common.input)?;
    ensure_writable_dir(&args.common.articles_dir).await?;

    let store = ArticleStore::new(&args.common.articles_dir);
    let client = scrapers::http_client()?;
    let report = run_extraction(&client, &records, &store).await;

    info!(
        saved = report.saved.len(),
        failed = report.failed.len(),
        dir = %store.dir().display(),
        "Article extraction finished"
    );
    Ok(())
}

#[instrument(level = "info", skip_all)]
async fn analyze(args: &AnalyzeArgs) -> error::Result<()> {
    let lexicons = Lexicons::load(&LexiconSources::from(&args.lexicons))?;
    analyze_with(args, &lexicons).await
}

async fn analyze_with(args: &AnalyzeArgs, lexicons: &Lexicons) -> error::Result<()> {
    let records = read_input_table(&args.common.input)?;

    let store = ArticleStore::new(&args.common.articles_dir);
    let report = run_analysis(
        records.iter().map(|r| r.url_id.as_str()),
        &store,
        lexicons,
    )
    .await;

    outputs::write_report(args.format, &report.rows, &args.output).await?;
    info!(
        path = %args.output.display(),
        rows = report.rows.len(),
        skipped = report.skipped.len(),
        "Output saved"
    );
    Ok(())
}

/// Word lists are loaded first so that a missing list aborts before any fetch.
#[instrument(level = "info", skip_all)]
async fn run(args: &RunArgs) -> error::Result<()> {
    let lexicons = Lexicons::load(&LexiconSources::from(&args.analyze.lexicons))?;
    let extract_args = ExtractArgs {
        common: args.analyze.common.clone(),
    };
    extract(&extract_args).await?;
    analyze_with(&args.analyze, &lexicons).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    /// Input table, stop words, positive words and one stored article. The
    /// negative word file is never created.
    fn workspace_without_negative_words() -> TempDir {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("input.csv"),
            "URL_ID,URL\n1,https://example.com/a\n",
        )
        .unwrap();
        fs::create_dir(tmp.path().join("StopWords")).unwrap();
        fs::write(tmp.path().join("StopWords/generic.txt"), "the\n").unwrap();
        fs::write(tmp.path().join("positive-words.txt"), "good\n").unwrap();
        fs::create_dir(tmp.path().join("articles")).unwrap();
        fs::write(tmp.path().join("articles/1.txt"), "Title\n\nA good day.").unwrap();
        tmp
    }

    fn parse(command: &str, root: &Path, articles_dir: &str) -> Command {
        let path = |name: &str| root.join(name).display().to_string();
        Cli::parse_from([
            "article_metrics".to_string(),
            command.to_string(),
            "--input".to_string(),
            path("input.csv"),
            "--articles-dir".to_string(),
            path(articles_dir),
            "--stop-words-dir".to_string(),
            path("StopWords"),
            "--positive-words".to_string(),
            path("positive-words.txt"),
            "--negative-words".to_string(),
            path("negative-words.txt"),
            "--output".to_string(),
            path("report.csv"),
        ])
        .command
    }

    #[tokio::test]
    async fn test_analyze_missing_lexicon_writes_nothing() {
        let tmp = workspace_without_negative_words();
        let Command::Analyze(args) = parse("analyze", tmp.path(), "articles") else {
            panic!("expected the analyze subcommand");
        };

        match analyze(&args).await {
            Err(error::Error::MissingLexicon { path, .. }) => {
                assert_eq!(path, tmp.path().join("negative-words.txt"));
            }
            other => panic!("expected MissingLexicon, got {other:?}"),
        }
        assert!(!tmp.path().join("report.csv").exists());
    }

    #[tokio::test]
    async fn test_run_missing_lexicon_aborts_before_extraction() {
        let tmp = workspace_without_negative_words();
        let Command::Run(args) = parse("run", tmp.path(), "fresh-articles") else {
            panic!("expected the run subcommand");
        };

        let result = run(&args).await;
        assert!(
            matches!(result, Err(error::Error::MissingLexicon { .. })),
            "expected MissingLexicon, got {result:?}"
        );
        assert!(!tmp.path().join("fresh-articles").exists());
        assert!(!tmp.path().join("report.csv").exists());
    }
}
