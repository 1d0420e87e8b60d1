//! Writes a synthetic two-day `dust_data.csv` for trying the monitor out.

use anyhow::{Context, Result};
use serde::Serialize;

const OUTPUT_PATH: &str = "dust_data.csv";
const HOURS: u32 = 48;

#[derive(Serialize)]
struct Row {
    #[serde(rename = "Time")]
    time: String,
    #[serde(rename = "PM10")]
    pm10: f64,
    #[serde(rename = "PM2.5")]
    pm25: f64,
}

/// Deterministic splitmix64 so every run writes the same file.
struct SampleRng(u64);

impl SampleRng {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in [-1, 1).
    fn jitter(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 52) as f64 - 1.0
    }
}

/// Blasting and haulage push dust up between 09:00 and 17:00.
fn shift_load(hour: u32) -> f64 {
    match hour % 24 {
        9..=17 => {
            let from_noon = (hour % 24) as f64 - 13.0;
            1.0 - (from_noon / 5.0).powi(2)
        }
        _ => 0.0,
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn main() -> Result<()> {
    let mut rng = SampleRng(42);
    let mut writer = csv::Writer::from_path(OUTPUT_PATH)
        .with_context(|| format!("creating {OUTPUT_PATH}"))?;

    for hour in 0..HOURS {
        let load = shift_load(hour);
        let pm10 = 55.0 + 110.0 * load + 12.0 * rng.jitter();
        let pm25 = 28.0 + 55.0 * load + 6.0 * rng.jitter();
        writer.serialize(Row {
            time: format!("Day{} {:02}:00", hour / 24 + 1, hour % 24),
            pm10: round1(pm10.max(0.0)),
            pm25: round1(pm25.max(0.0)),
        })?;
    }
    writer.flush().context("flushing sample CSV")?;

    println!("Wrote {HOURS} hourly readings to {OUTPUT_PATH}");
    Ok(())
}
