use std::panic::{self, AssertUnwindSafe};

use anyhow::{anyhow, Result};
use eframe::egui;
use log::info;

use crate::chart::{ChartData, TITLE};
use crate::ui::plot;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DustViewerApp {
    pub chart: ChartData,
}

impl DustViewerApp {
    pub fn new(chart: ChartData) -> Self {
        Self { chart }
    }
}

impl eframe::App for DustViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title + limits ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(TITLE);
                ui.separator();
                ui.label(format!(
                    "{} slots · PM10 limit {} · PM2.5 limit {} µg/m³",
                    self.chart.len(),
                    self.chart.thresholds.pm10_limit,
                    self.chart.thresholds.pm25_limit,
                ));
            });
        });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::dust_plot(ui, &self.chart);
        });
    }
}

// ---------------------------------------------------------------------------
// Window entry-point
// ---------------------------------------------------------------------------

/// Open the chart in a window and block until it is closed.
///
/// Errors and panics from the windowing layer (no display, no GPU) come back
/// as an `Err`; the caller decides how loud to be about it.
pub fn show_chart(chart: ChartData) -> Result<()> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(move || {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1200.0, 600.0])
                .with_min_inner_size([600.0, 300.0]),
            ..Default::default()
        };

        eframe::run_native(
            TITLE,
            options,
            Box::new(move |_cc| Ok(Box::new(DustViewerApp::new(chart)))),
        )
        .map_err(|e| anyhow!("cannot open chart window: {e}"))
    }));

    match outcome {
        Ok(result) => {
            if result.is_ok() {
                info!("chart window closed");
            }
            result
        }
        Err(_) => Err(anyhow!("chart window crashed")),
    }
}
