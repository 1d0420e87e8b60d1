mod analysis;
mod app;
mod chart;
mod color;
mod config;
mod data;
mod error;
mod pipeline;
mod report;
mod ui;

use std::io;
use std::process::ExitCode;

use log::{debug, info, warn};

use config::PipelineConfig;

fn main() -> ExitCode {
    env_logger::init();

    let config = PipelineConfig::default();
    let mut stdout = io::stdout().lock();

    let outcome = match pipeline::run(&config, &mut stdout) {
        Ok(outcome) => outcome,
        Err(e) => {
            debug!("run aborted: {e:?}");
            eprintln!("Error: {e}");
            return ExitCode::from(e.exit_code());
        }
    };
    drop(stdout);
    info!(
        "{} slots analysed from {}",
        outcome.analysis.summary.total_slots,
        config.input_path.display()
    );

    if config.show_chart {
        if let Err(e) = app::show_chart(outcome.chart) {
            warn!("{e:#}");
            eprintln!(
                "Note: {e}. The chart is still saved at {}.",
                config.output_path.display()
            );
        }
    }

    println!("✅ Analysis complete.");
    ExitCode::SUCCESS
}
