/// Data layer: core types, loading, and the remote fetch.
///
/// Architecture:
/// ```text
///  HTTPS endpoint / .json file
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + normalize → TemperatureDataset
///   └──────────┘
///        │
///        ▼
///   ┌────────────────────┐
///   │ TemperatureDataset  │  base temperature, Vec<MonthlyReading>
///   └────────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  chart    │  scales, colors, cell grid
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod remote;
