use std::io::Write;

use log::{debug, info, warn};

use crate::analysis::{recommend, PollutantDetail, Recommendation, Summary};
use crate::chart::{self, ChartData};
use crate::config::PipelineConfig;
use crate::data::classify::classify;
use crate::data::loader::load_table;
use crate::data::model::Dataset;
use crate::error::Result;
use crate::report::{self, AuditReport};

/// Everything derived from the input before anything is written.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub dataset: Dataset,
    pub summary: Summary,
    pub recommendations: Vec<Recommendation>,
}

/// What a finished run leaves behind for the optional display step.
#[derive(Debug)]
pub struct RunOutcome {
    pub analysis: Analysis,
    pub chart: ChartData,
}

/// load → validate → classify → summarize → recommend.
pub fn analyze(config: &PipelineConfig) -> Result<Analysis> {
    let table = load_table(&config.input_path)?;
    let dataset = classify(&table, &config.thresholds)?;
    if dataset.is_empty() {
        warn!("{} has no data rows", config.input_path.display());
    }
    let summary = Summary::from_dataset(&dataset);
    let recommendations = recommend(&summary, config.advisory_hours);
    debug!("{summary:?}, advice: {recommendations:?}");

    Ok(Analysis {
        dataset,
        summary,
        recommendations,
    })
}

/// Run every stage up to and including the saved PNG.
///
/// Console lines go to `out`. Nothing is written to disk unless the input
/// loaded, validated and classified cleanly. Showing the chart on screen is
/// left to the caller since it may block or fail without display.
pub fn run<W: Write>(config: &PipelineConfig, out: &mut W) -> Result<RunOutcome> {
    let analysis = analyze(config)?;

    report::write_summary(out, &analysis.summary, &analysis.recommendations)?;
    writeln!(out, "\n📊 Showing dust trend visualization...")?;

    let chart = ChartData::from_dataset(&analysis.dataset, &config.thresholds);
    chart::save_png(&chart, &config.output_path, config.chart_size)?;
    info!("chart saved to {}", config.output_path.display());

    if let Err(e) = write_audit(config, &analysis) {
        warn!(
            "could not write summary {}: {e}",
            config.summary_path.display()
        );
    }

    Ok(RunOutcome { analysis, chart })
}

fn write_audit(config: &PipelineConfig, analysis: &Analysis) -> Result<()> {
    let pm10 = PollutantDetail::pm10(&analysis.dataset, config.thresholds.pm10_limit);
    let pm25 = PollutantDetail::pm25(&analysis.dataset, config.thresholds.pm25_limit);
    let audit = AuditReport {
        source: config.input_path.display().to_string(),
        chart: config.output_path.display().to_string(),
        thresholds: &config.thresholds,
        summary: &analysis.summary,
        recommendations: analysis
            .recommendations
            .iter()
            .map(|r| r.to_string())
            .collect(),
        pm10: &pm10,
        pm25: &pm25,
    };
    report::write_audit_report(&config.summary_path, &audit)
}
