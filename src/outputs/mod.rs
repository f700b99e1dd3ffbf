//! Report writers for the analysis job.
//!
//! - [`csv`]: one header row ([`OUTPUT_COLUMNS`](crate::models::OUTPUT_COLUMNS)) then one row per article
//! - [`json`]: a JSON array of objects keyed by the same column names
//!
//! Both writers create the parent directory of the output path if needed.

pub mod csv;
pub mod json;

use std::path::Path;

use clap::ValueEnum;
use tokio::fs;

use crate::error::{Error, Result};
use crate::models::MetricsRow;

/// Serialization format of the metrics report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
}

/// Write `rows` to `path` in the chosen `format`.
pub async fn write_report(format: ReportFormat, rows: &[MetricsRow], path: &Path) -> Result<()> {
    match format {
        ReportFormat::Csv => csv::write_report(rows, path).await,
        ReportFormat::Json => json::write_report(rows, path).await,
    }
}

async fn write_bytes(path: &Path, bytes: Vec<u8>) -> Result<()> {
    let output_err = |source| Error::Output {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await.map_err(output_err)?;
    }
    fs::write(path, bytes).await.map_err(output_err)
}
