//! CSV report output.

use std::path::Path;

use ::csv::WriterBuilder;
use tracing::{info, instrument};

use crate::error::Result;
use crate::models::{MetricsRow, OUTPUT_COLUMNS};

/// Write `rows` as CSV to `path`.
///
/// The header row is always written, so an empty batch still produces a
/// well-formed table.
#[instrument(level = "info", skip_all, fields(path = %path.display(), rows = rows.len()))]
pub async fn write_report(rows: &[MetricsRow], path: &Path) -> Result<()> {
    let bytes = to_csv_bytes(rows)?;
    super::write_bytes(path, bytes).await?;
    info!("Wrote CSV report");
    Ok(())
}

/// Serialize `rows` to CSV bytes, header first.
///
/// # Errors
///
/// Returns [`Error::Csv`](crate::error::Error::Csv) if a row fails to serialize.
pub fn to_csv_bytes(rows: &[MetricsRow]) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(OUTPUT_COLUMNS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer
        .into_inner()
        .map_err(|e| ::csv::Error::from(e.into_error()).into())
}
