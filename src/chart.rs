use std::path::Path;

use log::debug;
use plotters::prelude::*;
use plotters::style::FontTransform;

use crate::color::{to_plotters, Element};
use crate::config::Thresholds;
use crate::data::model::Dataset;
use crate::error::{DustError, Result};

pub const TITLE: &str = "Dust Level Monitoring";
pub const X_TITLE: &str = "Time";
pub const Y_TITLE: &str = "Concentration (µg/m³)";

/// Above this many slots the x axis stops labelling every one.
pub const MAX_X_LABELS: usize = 40;

// ---------------------------------------------------------------------------
// ChartData – what both renderers draw
// ---------------------------------------------------------------------------

/// Categorical time axis: slot `i` sits at x = i, labelled `labels[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub pm10: Vec<f64>,
    pub pm25: Vec<f64>,
    pub pm10_high: Vec<bool>,
    pub pm25_high: Vec<bool>,
    pub thresholds: Thresholds,
}

impl ChartData {
    pub fn from_dataset(dataset: &Dataset, thresholds: &Thresholds) -> Self {
        ChartData {
            labels: dataset.labels(),
            pm10: dataset.pm10_values(),
            pm25: dataset.pm25_values(),
            pm10_high: dataset.readings.iter().map(|r| r.pm10_high).collect(),
            pm25_high: dataset.readings.iter().map(|r| r.pm25_high).collect(),
            thresholds: *thresholds,
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Right edge of the x axis. Never collapses to a zero-width range.
    pub fn x_max(&self) -> f64 {
        self.len().saturating_sub(1).max(1) as f64
    }

    /// Top of the y axis: 10% headroom over the highest reading or limit.
    pub fn y_max(&self) -> f64 {
        let peak = self
            .pm10
            .iter()
            .chain(&self.pm25)
            .copied()
            .filter(|v| v.is_finite())
            .fold(
                self.thresholds.pm10_limit.max(self.thresholds.pm25_limit),
                f64::max,
            );
        if peak > 0.0 {
            peak * 1.1
        } else {
            1.0
        }
    }

    /// Bottom of the y axis, zero unless a reading is negative.
    pub fn y_min(&self) -> f64 {
        self.pm10
            .iter()
            .chain(&self.pm25)
            .copied()
            .filter(|v| v.is_finite())
            .fold(0.0, f64::min)
    }

    pub fn label_at(&self, x: f64) -> &str {
        slot_label(&self.labels, x)
    }
}

/// Label for an axis position, empty between slots or off the ends.
pub fn slot_label(labels: &[String], x: f64) -> &str {
    let rounded = x.round();
    if (x - rounded).abs() > 1e-6 || rounded < 0.0 {
        return "";
    }
    labels
        .get(rounded as usize)
        .map(String::as_str)
        .unwrap_or("")
}

/// Show every n-th label so at most `max_labels` are drawn.
pub fn label_stride(n: usize, max_labels: usize) -> usize {
    if max_labels == 0 || n <= max_labels {
        1
    } else {
        n.div_ceil(max_labels)
    }
}

/// Split `[start, end]` into `pieces` dashes separated by equal gaps.
fn dash_segments(start: f64, end: f64, pieces: usize) -> Vec<(f64, f64)> {
    let pieces = pieces.max(1);
    let period = (end - start) / pieces as f64;
    (0..pieces)
        .map(|i| {
            let a = start + i as f64 * period;
            (a, a + period * 0.6)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// PNG output
// ---------------------------------------------------------------------------

fn render_err<E: std::fmt::Display>(e: E) -> DustError {
    DustError::Render(e.to_string())
}

/// Draw the chart and write it as a PNG, replacing any existing file.
///
/// Drawing happens in memory; the file is only created once the picture is
/// complete, and it is closed before this returns.
pub fn save_png(data: &ChartData, path: &Path, size: (u32, u32)) -> Result<()> {
    let (width, height) = size;
    let mut buffer = vec![0u8; width as usize * height as usize * 3];
    draw(data, &mut buffer, size)?;

    let image = image::RgbImage::from_raw(width, height, buffer)
        .ok_or_else(|| DustError::Render("pixel buffer does not match chart size".into()))?;
    image
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(render_err)?;

    debug!("chart written to {} ({width}x{height})", path.display());
    Ok(())
}

fn draw(data: &ChartData, buffer: &mut [u8], size: (u32, u32)) -> Result<()> {
    let root = BitMapBackend::with_buffer(buffer, size).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let x_max = data.x_max();
    let mut chart = ChartBuilder::on(&root)
        .caption(TITLE, ("sans-serif", 30.0).into_font())
        .margin(15)
        .x_label_area_size(110)
        .y_label_area_size(70)
        .build_cartesian_2d(0f64..x_max, data.y_min()..data.y_max())
        .map_err(render_err)?;

    let x_formatter = |x: &f64| data.label_at(*x).to_string();
    chart
        .configure_mesh()
        .x_desc(X_TITLE)
        .y_desc(Y_TITLE)
        .x_labels(data.len().clamp(2, MAX_X_LABELS))
        .x_label_formatter(&x_formatter)
        .x_label_style(
            ("sans-serif", 12.0)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .x_label_offset(8)
        .axis_desc_style(("sans-serif", 15))
        .disable_x_mesh()
        .draw()
        .map_err(render_err)?;

    let series = [
        (Element::Pm10, "PM10", &data.pm10, &data.pm10_high),
        (Element::Pm25, "PM2.5", &data.pm25, &data.pm25_high),
    ];
    for (element, name, values, high) in series {
        let color = to_plotters(element.base());
        chart
            .draw_series(LineSeries::new(
                values.iter().enumerate().map(|(i, &v)| (i as f64, v)),
                color.stroke_width(2),
            ))
            .map_err(render_err)?
            .label(name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));

        let marker = to_plotters(element.marker());
        chart
            .draw_series(
                values
                    .iter()
                    .zip(high.iter())
                    .enumerate()
                    .filter(|(_, (_, h))| **h)
                    .map(|(i, (&v, _))| Circle::new((i as f64, v), 3, marker.filled())),
            )
            .map_err(render_err)?;
    }

    let limits = [
        (Element::Pm10Limit, "PM10 Limit", data.thresholds.pm10_limit),
        (Element::Pm25Limit, "PM2.5 Limit", data.thresholds.pm25_limit),
    ];
    for (element, name, limit) in limits {
        let color = to_plotters(element.base());
        chart
            .draw_series(
                dash_segments(0.0, x_max, 60)
                    .into_iter()
                    .map(|(a, b)| PathElement::new(vec![(a, limit), (b, limit)], color.stroke_width(2))),
            )
            .map_err(render_err)?
            .label(name)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.85))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Reading;

    fn data(pm10: &[f64], pm25: &[f64]) -> ChartData {
        let readings = pm10
            .iter()
            .zip(pm25)
            .enumerate()
            .map(|(i, (&a, &b))| Reading {
                time: format!("T{i}"),
                pm10: a,
                pm25: b,
                pm10_high: a > 100.0,
                pm25_high: b > 60.0,
            })
            .collect();
        ChartData::from_dataset(&Dataset { readings }, &Thresholds::CPCB)
    }

    #[test]
    fn y_axis_leaves_room_above_data_and_limits() {
        let low = data(&[10.0, 20.0], &[5.0, 5.0]);
        assert!((low.y_max() - 110.0).abs() < 1e-9);
        assert_eq!(low.y_min(), 0.0);

        let high = data(&[10.0, 300.0], &[5.0, 5.0]);
        assert!((high.y_max() - 330.0).abs() < 1e-9);
    }

    #[test]
    fn infinite_readings_do_not_blow_up_the_axis() {
        let d = data(&[f64::INFINITY, 20.0], &[5.0, 5.0]);
        assert!(d.y_max().is_finite());
    }

    #[test]
    fn x_axis_never_collapses() {
        assert_eq!(data(&[], &[]).x_max(), 1.0);
        assert_eq!(data(&[1.0], &[1.0]).x_max(), 1.0);
        assert_eq!(data(&[1.0; 12], &[1.0; 12]).x_max(), 11.0);
    }

    #[test]
    fn labels_follow_dataset_order() {
        let d = data(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]);
        assert_eq!(d.label_at(0.0), "T0");
        assert_eq!(d.label_at(2.0), "T2");
        assert_eq!(d.label_at(1.5), "");
        assert_eq!(d.label_at(3.0), "");
        assert_eq!(d.label_at(-1.0), "");
    }

    #[test]
    fn flags_are_carried_per_slot() {
        let d = data(&[50.0, 150.0], &[70.0, 10.0]);
        assert_eq!(d.pm10_high, vec![false, true]);
        assert_eq!(d.pm25_high, vec![true, false]);
    }

    #[test]
    fn stride_thins_dense_labels() {
        assert_eq!(label_stride(12, 40), 1);
        assert_eq!(label_stride(40, 40), 1);
        assert_eq!(label_stride(41, 40), 2);
        assert_eq!(label_stride(200, 40), 5);
        assert_eq!(label_stride(5, 0), 1);
    }

    #[test]
    fn dashes_stay_inside_the_range() {
        let dashes = dash_segments(0.0, 10.0, 5);
        assert_eq!(dashes.len(), 5);
        assert_eq!(dashes[0].0, 0.0);
        assert!(dashes.iter().all(|&(a, b)| a < b && b <= 10.0));
    }
}
