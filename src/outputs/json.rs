//! JSON report output.

use std::path::Path;

use tracing::{info, instrument};

use crate::error::Result;
use crate::models::MetricsRow;

/// Write `rows` as a pretty-printed JSON array to `path`.
#[instrument(level = "info", skip_all, fields(path = %path.display(), rows = rows.len()))]
pub async fn write_report(rows: &[MetricsRow], path: &Path) -> Result<()> {
    let json = serde_json::to_vec_pretty(rows)?;
    super::write_bytes(path, json).await?;
    info!("Wrote JSON report");
    Ok(())
}
