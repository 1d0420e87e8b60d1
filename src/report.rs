use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::analysis::{PollutantDetail, Recommendation, Summary};
use crate::config::Thresholds;
use crate::error::Result;

// ---------------------------------------------------------------------------
// Console report
// ---------------------------------------------------------------------------

/// Counts first, then whichever advice lines fired, PM10 before PM2.5.
pub fn write_summary<W: Write>(
    out: &mut W,
    summary: &Summary,
    recommendations: &[Recommendation],
) -> std::io::Result<()> {
    writeln!(out, "✅ PM10 exceeded in {} time slots", summary.high_pm10_hours)?;
    writeln!(out, "✅ PM2.5 exceeded in {} time slots", summary.high_pm25_hours)?;
    for rec in recommendations {
        let icon = match rec {
            Recommendation::Sprinkling => "🔧",
            Recommendation::Greenbelt => "🌱",
        };
        writeln!(out, "{icon} {rec}")?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// JSON audit report
// ---------------------------------------------------------------------------

/// Everything a sustainability audit wants from one run.
#[derive(Debug, Serialize)]
pub struct AuditReport<'a> {
    pub source: String,
    pub chart: String,
    pub thresholds: &'a Thresholds,
    pub summary: &'a Summary,
    pub recommendations: Vec<String>,
    pub pm10: &'a PollutantDetail,
    pub pm25: &'a PollutantDetail,
}

/// Write the report as pretty JSON, replacing any previous file.
pub fn write_audit_report(path: &Path, report: &AuditReport<'_>) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
