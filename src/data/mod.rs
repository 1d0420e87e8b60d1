/// Data layer: core types, loading, and classification.
///
/// Architecture:
/// ```text
///   dust_data.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  check file + columns → RawTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ classify │  parse PM10 / PM2.5, compare to limits → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset  │  Vec<Reading> with high flags, input order
///   └──────────┘
/// ```

pub mod classify;
pub mod loader;
pub mod model;

/// Column labels every input file must carry.
pub const TIME_COLUMN: &str = "Time";
pub const PM10_COLUMN: &str = "PM10";
pub const PM25_COLUMN: &str = "PM2.5";

pub const REQUIRED_COLUMNS: [&str; 3] = [TIME_COLUMN, PM10_COLUMN, PM25_COLUMN];
