//! Command-line interface definitions.
//!
//! Every path option can be given as a flag or through an environment
//! variable. Defaults match the conventional working-directory layout:
//!
//! ```text
//! Input.csv
//! articles/{URL_ID}.txt
//! StopWords/*.txt
//! MasterDictionary/positive-words.txt
//! MasterDictionary/negative-words.txt
//! Output Data Structure.csv
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::lexicon::LexiconSources;
use crate::outputs::ReportFormat;

/// Fetch article text and score it with lexical, readability and sentiment metrics.
///
/// # Examples
///
/// ```sh
/// # Download every URL in Input.csv into ./articles
/// article_metrics extract
///
/// # Score the stored articles into a CSV report
/// article_metrics analyze --output report.csv
///
/// # Both jobs, JSON report, custom word lists
/// article_metrics run --format json --stop-words-dir ./lists/stop
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch each URL and store its title and body as plain text
    Extract(ExtractArgs),
    /// Compute metrics for each stored article and write the report
    Analyze(AnalyzeArgs),
    /// Run extraction, then analysis
    Run(RunArgs),
}

/// Options shared by both jobs.
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Input table with `URL_ID` and `URL` columns
    #[arg(short, long, env = "ARTICLE_METRICS_INPUT", default_value = "Input.csv")]
    pub input: PathBuf,

    /// Directory holding one `{URL_ID}.txt` per article
    #[arg(
        short,
        long,
        env = "ARTICLE_METRICS_ARTICLES_DIR",
        default_value = "articles"
    )]
    pub articles_dir: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub lexicons: LexiconArgs,

    /// Report destination
    #[arg(
        short,
        long,
        env = "ARTICLE_METRICS_OUTPUT",
        default_value = "Output Data Structure.csv"
    )]
    pub output: PathBuf,

    /// Report format
    #[arg(
        short,
        long,
        env = "ARTICLE_METRICS_FORMAT",
        value_enum,
        default_value_t = ReportFormat::Csv
    )]
    pub format: ReportFormat,
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    #[command(flatten)]
    pub analyze: AnalyzeArgs,
}

/// Word-list locations.
#[derive(Args, Debug, Clone)]
pub struct LexiconArgs {
    /// Directory of stop-word files (all files are merged)
    #[arg(long, env = "ARTICLE_METRICS_STOP_WORDS_DIR", default_value = "StopWords")]
    pub stop_words_dir: PathBuf,

    /// Positive sentiment words, one per line
    #[arg(
        long,
        env = "ARTICLE_METRICS_POSITIVE_WORDS",
        default_value = "MasterDictionary/positive-words.txt"
    )]
    pub positive_words: PathBuf,

    /// Negative sentiment words, one per line
    #[arg(
        long,
        env = "ARTICLE_METRICS_NEGATIVE_WORDS",
        default_value = "MasterDictionary/negative-words.txt"
    )]
    pub negative_words: PathBuf,

    /// Do not merge the standard English stop-word list
    #[arg(long)]
    pub no_builtin_stop_words: bool,
}

impl From<&LexiconArgs> for LexiconSources {
    fn from(args: &LexiconArgs) -> Self {
        LexiconSources {
            stop_words_dir: args.stop_words_dir.clone(),
            positive_words: args.positive_words.clone(),
            negative_words: args.negative_words.clone(),
            builtin_stop_words: !args.no_builtin_stop_words,
        }
    }
}
