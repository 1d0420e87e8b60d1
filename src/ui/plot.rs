use eframe::egui::Ui;
use egui_plot::{HLine, Legend, Line, LineStyle, Plot, PlotPoints, Points};

use crate::chart::{label_stride, slot_label, ChartData, MAX_X_LABELS, X_TITLE, Y_TITLE};
use crate::color::{to_egui, Element};

// ---------------------------------------------------------------------------
// Dust trend plot (central panel)
// ---------------------------------------------------------------------------

/// Render both series, their exceedance markers and the two limit lines.
pub fn dust_plot(ui: &mut Ui, chart: &ChartData) {
    let labels = chart.labels.clone();
    let stride = label_stride(labels.len(), MAX_X_LABELS);

    Plot::new("dust_plot")
        .legend(Legend::default())
        .x_axis_label(X_TITLE)
        .y_axis_label(Y_TITLE)
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round() as usize;
            if idx % stride != 0 {
                return String::new();
            }
            slot_label(&labels, mark.value).to_string()
        })
        .include_y(0.0)
        .include_y(chart.y_max())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let series = [
                (Element::Pm10, "PM10", &chart.pm10, &chart.pm10_high),
                (Element::Pm25, "PM2.5", &chart.pm25, &chart.pm25_high),
            ];
            for (element, name, values, high) in series {
                let points: PlotPoints = values
                    .iter()
                    .enumerate()
                    .map(|(i, &v)| [i as f64, v])
                    .collect();
                plot_ui.line(
                    Line::new(points)
                        .name(name)
                        .color(to_egui(element.base()))
                        .width(2.0),
                );

                let flagged: PlotPoints = values
                    .iter()
                    .zip(high.iter())
                    .enumerate()
                    .filter(|(_, (_, h))| **h)
                    .map(|(i, (&v, _))| [i as f64, v])
                    .collect();
                plot_ui.points(
                    Points::new(flagged)
                        .color(to_egui(element.marker()))
                        .radius(3.0),
                );
            }

            let limits = [
                (Element::Pm10Limit, "PM10 Limit", chart.thresholds.pm10_limit),
                (Element::Pm25Limit, "PM2.5 Limit", chart.thresholds.pm25_limit),
            ];
            for (element, name, limit) in limits {
                plot_ui.hline(
                    HLine::new(limit)
                        .name(name)
                        .color(to_egui(element.base()))
                        .style(LineStyle::dashed_loose())
                        .width(1.5),
                );
            }
        });
}
