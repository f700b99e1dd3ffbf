//! Reader for the input table of article identifiers and URLs.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{info, instrument};

use crate::error::{Error, Result};
use crate::models::InputRecord;

const REQUIRED_COLUMNS: [&str; 2] = ["URL_ID", "URL"];

/// Read every row of the CSV input table at `path`.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub fn read_input_table(path: &Path) -> Result<Vec<InputRecord>> {
    let file = File::open(path).map_err(|e| Error::InputTable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let records = parse_input_table(file).map_err(|reason| Error::InputTable {
        path: path.to_path_buf(),
        reason,
    })?;
    info!(count = records.len(), "Read input table");
    Ok(records)
}

/// Parse records from any CSV source with a header row.
pub fn parse_input_table<R: Read>(reader: R) -> std::result::Result<Vec<InputRecord>, String> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| format!("failed to read headers: {e}"))?;
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(format!("missing '{column}' column"));
        }
    }

    reader
        .deserialize::<InputRecord>()
        .enumerate()
        .map(|(i, record)| record.map_err(|e| format!("row {}: {e}", i + 1)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_in_order_with_extra_columns() {
        let csv = "URL_ID,URL,Notes\n\
                   blackassign0001,https://example.com/a,first\n\
                   blackassign0002,https://example.com/b,\n";
        let records = parse_input_table(Cursor::new(csv)).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].url_id, "blackassign0001");
        assert_eq!(records[1].url, "https://example.com/b");
    }

    #[test]
    fn test_parse_trims_fields() {
        let csv = "URL_ID , URL\n 7 , https://example.com/x \n";
        let records = parse_input_table(Cursor::new(csv)).unwrap();
        assert_eq!(records[0].url_id, "7");
        assert_eq!(records[0].url, "https://example.com/x");
    }

    #[test]
    fn test_parse_missing_column() {
        let csv = "ID,URL\n1,https://example.com\n";
        let err = parse_input_table(Cursor::new(csv)).unwrap_err();
        assert!(err.contains("URL_ID"));
    }

    #[test]
    fn test_read_missing_file_is_input_table_error() {
        let err = read_input_table(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, Error::InputTable { .. }));
    }
}
