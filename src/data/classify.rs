use super::model::{Dataset, RawRow, RawTable, Reading};
use super::{PM10_COLUMN, PM25_COLUMN, TIME_COLUMN};
use crate::config::Thresholds;
use crate::error::{DustError, Result};

/// Attach the two exceedance flags to every row, keeping input order.
///
/// A value exactly at its limit is not high. The first PM cell that does not
/// parse as a number (empty text and NaN included) aborts the whole run.
pub fn classify(table: &RawTable, thresholds: &Thresholds) -> Result<Dataset> {
    let readings = table
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            // 1-based data row, header not counted
            let row_no = i + 1;
            let pm10 = parse_field(row, PM10_COLUMN, row_no)?;
            let pm25 = parse_field(row, PM25_COLUMN, row_no)?;
            Ok(Reading {
                time: row.get(TIME_COLUMN).cloned().unwrap_or_default(),
                pm10,
                pm25,
                pm10_high: pm10 > thresholds.pm10_limit,
                pm25_high: pm25 > thresholds.pm25_limit,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Dataset { readings })
}

fn parse_field(row: &RawRow, column: &str, row_no: usize) -> Result<f64> {
    let raw = row.get(column).map(String::as_str).unwrap_or("");
    let parse_error = || DustError::Parse {
        row: row_no,
        column: column.to_string(),
        value: raw.to_string(),
    };

    let value = raw.trim().parse::<f64>().map_err(|_| parse_error())?;
    if value.is_nan() {
        return Err(parse_error());
    }
    Ok(value)
}
