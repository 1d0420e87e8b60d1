use std::fmt;

use serde::Serialize;

use crate::data::model::{Dataset, Reading};

// ---------------------------------------------------------------------------
// Summary – exact exceedance counts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub high_pm10_hours: usize,
    pub high_pm25_hours: usize,
    pub total_slots: usize,
}

impl Summary {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Summary {
            high_pm10_hours: dataset.readings.iter().filter(|r| r.pm10_high).count(),
            high_pm25_hours: dataset.readings.iter().filter(|r| r.pm25_high).count(),
            total_slots: dataset.len(),
        }
    }
}

// ---------------------------------------------------------------------------
// Control advice
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    /// Too many PM10 slots: water sprinkling or fog cannons.
    Sprinkling,
    /// Too many PM2.5 slots: greenbelt buffer or misting units.
    Greenbelt,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::Sprinkling => {
                write!(f, "Suggest sprinkling or fog system during high PM10 hours.")
            }
            Recommendation::Greenbelt => {
                write!(f, "Consider greenbelt buffer or misting units to reduce PM2.5.")
            }
        }
    }
}

/// Advice triggered by slot counts alone, PM10 first.
pub fn recommend(summary: &Summary, advisory_hours: usize) -> Vec<Recommendation> {
    let mut out = Vec::with_capacity(2);
    if summary.high_pm10_hours > advisory_hours {
        out.push(Recommendation::Sprinkling);
    }
    if summary.high_pm25_hours > advisory_hours {
        out.push(Recommendation::Greenbelt);
    }
    out
}

// ---------------------------------------------------------------------------
// Audit detail: which slots, and the worst one
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Peak {
    pub time: String,
    pub value: f64,
}

/// Per-pollutant detail for the written report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PollutantDetail {
    pub limit: f64,
    pub flagged_slots: Vec<String>,
    pub peak: Option<Peak>,
}

impl PollutantDetail {
    fn collect(
        dataset: &Dataset,
        limit: f64,
        value: impl Fn(&Reading) -> f64,
        high: impl Fn(&Reading) -> bool,
    ) -> Self {
        let flagged_slots = dataset
            .readings
            .iter()
            .filter(|r| high(r))
            .map(|r| r.time.clone())
            .collect();

        // first slot wins on ties
        let peak = dataset
            .readings
            .iter()
            .fold(None::<&Reading>, |best, r| match best {
                Some(b) if value(b) >= value(r) => Some(b),
                _ => Some(r),
            })
            .map(|r| Peak {
                time: r.time.clone(),
                value: value(r),
            });

        PollutantDetail {
            limit,
            flagged_slots,
            peak,
        }
    }

    pub fn pm10(dataset: &Dataset, limit: f64) -> Self {
        Self::collect(dataset, limit, |r| r.pm10, |r| r.pm10_high)
    }

    pub fn pm25(dataset: &Dataset, limit: f64) -> Self {
        Self::collect(dataset, limit, |r| r.pm25, |r| r.pm25_high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Thresholds;
    use crate::data::classify::classify;
    use crate::data::model::{RawRow, RawTable};

    fn dataset(pm10: &[f64], pm25: &[f64]) -> Dataset {
        let rows = pm10
            .iter()
            .zip(pm25)
            .enumerate()
            .map(|(i, (a, b))| {
                RawRow::from([
                    ("Time".to_string(), format!("{i:02}:00")),
                    ("PM10".to_string(), a.to_string()),
                    ("PM2.5".to_string(), b.to_string()),
                ])
            })
            .collect();
        let table = RawTable {
            headers: vec!["Time".into(), "PM10".into(), "PM2.5".into()],
            rows,
        };
        classify(&table, &Thresholds::CPCB).unwrap()
    }

    fn summary(pm10_high: usize, pm25_high: usize) -> Summary {
        Summary {
            high_pm10_hours: pm10_high,
            high_pm25_hours: pm25_high,
            total_slots: 100,
        }
    }

    #[test]
    fn twelve_slot_scenario_counts_nine_and_advises_nothing() {
        let pm10 = [
            50.0, 60.0, 70.0, 110.0, 120.0, 130.0, 140.0, 150.0, 160.0, 170.0, 180.0, 190.0,
        ];
        let ds = dataset(&pm10, &[10.0; 12]);
        let s = Summary::from_dataset(&ds);

        assert_eq!(s.high_pm10_hours, 9);
        assert_eq!(s.high_pm25_hours, 0);
        assert_eq!(s.total_slots, 12);
        assert!(recommend(&s, 10).is_empty());
    }

    #[test]
    fn appending_a_high_row_never_decreases_the_count() {
        let mut pm10 = vec![20.0, 150.0, 99.0];
        let mut pm25 = vec![10.0, 10.0, 10.0];
        let before = Summary::from_dataset(&dataset(&pm10, &pm25)).high_pm10_hours;
        pm10.push(101.0);
        pm25.push(10.0);
        let after = Summary::from_dataset(&dataset(&pm10, &pm25)).high_pm10_hours;
        assert_eq!(after, before + 1);
    }

    #[test]
    fn advice_triggers_strictly_above_the_count() {
        assert!(recommend(&summary(10, 10), 10).is_empty());
        assert_eq!(recommend(&summary(11, 0), 10), vec![Recommendation::Sprinkling]);
        assert_eq!(recommend(&summary(0, 11), 10), vec![Recommendation::Greenbelt]);
        assert_eq!(
            recommend(&summary(11, 25), 10),
            vec![Recommendation::Sprinkling, Recommendation::Greenbelt]
        );
    }

    #[test]
    fn advice_ignores_dataset_size() {
        let small = Summary {
            high_pm10_hours: 11,
            high_pm25_hours: 0,
            total_slots: 11,
        };
        let large = Summary {
            total_slots: 10_000,
            ..small
        };
        assert_eq!(recommend(&small, 10), recommend(&large, 10));
    }

    #[test]
    fn detail_lists_flagged_slots_and_first_peak() {
        let ds = dataset(&[90.0, 130.0, 130.0, 101.0], &[10.0, 70.0, 20.0, 30.0]);

        let pm10 = PollutantDetail::pm10(&ds, 100.0);
        assert_eq!(pm10.flagged_slots, vec!["01:00", "02:00", "03:00"]);
        assert_eq!(
            pm10.peak,
            Some(Peak {
                time: "01:00".into(),
                value: 130.0
            })
        );

        let pm25 = PollutantDetail::pm25(&ds, 60.0);
        assert_eq!(pm25.flagged_slots, vec!["01:00"]);
    }

    #[test]
    fn empty_dataset_has_no_peak() {
        let ds = Dataset::default();
        assert_eq!(Summary::from_dataset(&ds), Summary {
            high_pm10_hours: 0,
            high_pm25_hours: 0,
            total_slots: 0,
        });
        assert_eq!(PollutantDetail::pm10(&ds, 100.0).peak, None);
    }
}
