use std::path::PathBuf;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Regulatory limits
// ---------------------------------------------------------------------------

/// Concentration limits in µg/m³. A reading is high only when it is
/// strictly greater than its limit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Thresholds {
    pub pm10_limit: f64,
    pub pm25_limit: f64,
}

impl Thresholds {
    /// CPCB 24-hour limits.
    pub const CPCB: Thresholds = Thresholds {
        pm10_limit: 100.0,
        pm25_limit: 60.0,
    };
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::CPCB
    }
}

// ---------------------------------------------------------------------------
// Run configuration
// ---------------------------------------------------------------------------

/// Everything a single run needs. The defaults are the fixed file names the
/// tool works with in the current directory.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub summary_path: PathBuf,
    pub thresholds: Thresholds,
    /// Advice fires when more than this many slots exceed a limit.
    pub advisory_hours: usize,
    /// PNG size in pixels (width, height).
    pub chart_size: (u32, u32),
    pub show_chart: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("dust_data.csv"),
            output_path: PathBuf::from("dust_sample_output.png"),
            summary_path: PathBuf::from("dust_sample_summary.json"),
            thresholds: Thresholds::default(),
            advisory_hours: 10,
            chart_size: (1200, 600),
            show_chart: true,
        }
    }
}
