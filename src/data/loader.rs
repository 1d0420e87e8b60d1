use std::path::Path;

use log::debug;

use super::model::{RawRow, RawTable};
use super::REQUIRED_COLUMNS;
use crate::error::{DustError, Result};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the air-quality CSV at `path`.
///
/// Fails fast, before any numeric work:
/// * [`DustError::FileNotFound`] when the path does not exist
/// * [`DustError::Schema`] when `Time`, `PM10` or `PM2.5` is absent
///
/// Extra columns are kept in the rows but nothing downstream looks at them.
pub fn load_table(path: &Path) -> Result<RawTable> {
    if !path.exists() {
        return Err(DustError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    check_schema(&headers)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let mut row = RawRow::new();
        for (h, v) in headers.iter().zip(record.iter()) {
            // a repeated label keeps its first column
            row.entry(h.clone()).or_insert_with(|| v.to_string());
        }
        rows.push(row);
    }

    let table = RawTable { headers, rows };
    debug!(
        "loaded {} rows with columns {:?} from {}",
        table.len(),
        table.headers,
        path.display()
    );
    Ok(table)
}

/// Report every required column that is missing, in canonical order.
fn check_schema(headers: &[String]) -> Result<()> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == *col))
        .map(|col| col.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(DustError::Schema { missing })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dust_data.csv");
        match load_table(&path) {
            Err(DustError::FileNotFound { path: p }) => assert_eq!(p, path),
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn missing_pm25_column_is_a_schema_error() {
        let file = csv_file("Time,PM10\n00:00,50\n");
        match load_table(file.path()) {
            Err(DustError::Schema { missing }) => assert_eq!(missing, vec!["PM2.5"]),
            other => panic!("expected Schema, got {other:?}"),
        }
    }

    #[test]
    fn empty_file_misses_every_column() {
        let file = csv_file("");
        match load_table(file.path()) {
            Err(DustError::Schema { missing }) => {
                assert_eq!(missing, vec!["Time", "PM10", "PM2.5"])
            }
            other => panic!("expected Schema, got {other:?}"),
        }
    }

    #[test]
    fn rows_keep_file_order_and_raw_text() {
        let file = csv_file("Site,Time,PM10,PM2.5\nA,10:00,120, 40\nB,09:00,abc,70.5\n");
        let table = load_table(file.path()).unwrap();

        assert_eq!(table.headers, vec!["Site", "Time", "PM10", "PM2.5"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0]["Time"], "10:00");
        assert_eq!(table.rows[0]["PM2.5"], "40");
        assert_eq!(table.rows[1]["Time"], "09:00");
        // no coercion at this stage
        assert_eq!(table.rows[1]["PM10"], "abc");
        assert_eq!(table.rows[1]["Site"], "B");
    }

    #[test]
    fn header_only_file_is_an_empty_table() {
        let file = csv_file("Time,PM10,PM2.5\n");
        let table = load_table(file.path()).unwrap();
        assert_eq!(table.len(), 0);
    }

    #[test]
    fn repeated_header_keeps_first_column() {
        let file = csv_file("Time,PM10,PM2.5,PM10\n00:00,150,10,5\n");
        let table = load_table(file.path()).unwrap();
        assert_eq!(table.rows[0]["PM10"], "150");

        let ds = crate::data::classify::classify(&table, &crate::config::Thresholds::CPCB)
            .unwrap();
        assert!(ds.readings[0].pm10_high);
    }

    #[test]
    fn ragged_record_is_a_csv_error() {
        let file = csv_file("Time,PM10,PM2.5\n00:00,50\n");
        assert!(matches!(load_table(file.path()), Err(DustError::Csv(_))));
    }
}
