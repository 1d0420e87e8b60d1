use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Raw table – what the loader hands over, untouched
// ---------------------------------------------------------------------------

/// One CSV record: column label → raw cell text.
pub type RawRow = BTreeMap<String, String>;

/// The loaded CSV in file order. No type coercion has happened yet.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    /// Header labels in file order.
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl RawTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

// ---------------------------------------------------------------------------
// Reading – one time slot after classification
// ---------------------------------------------------------------------------

/// A single time slot with its derived exceedance flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    /// Opaque time label, never parsed.
    pub time: String,
    pub pm10: f64,
    pub pm25: f64,
    pub pm10_high: bool,
    pub pm25_high: bool,
}

// ---------------------------------------------------------------------------
// Dataset – classified readings in input order
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub readings: Vec<Reading>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn labels(&self) -> Vec<String> {
        self.readings.iter().map(|r| r.time.clone()).collect()
    }

    pub fn pm10_values(&self) -> Vec<f64> {
        self.readings.iter().map(|r| r.pm10).collect()
    }

    pub fn pm25_values(&self) -> Vec<f64> {
        self.readings.iter().map(|r| r.pm25).collect()
    }
}
