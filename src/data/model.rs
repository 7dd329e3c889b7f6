use serde::Deserialize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Wire types – the JSON shape served by the endpoint
// ---------------------------------------------------------------------------

/// One monthly record as it appears on the wire. `month` is 1-based.
#[derive(Debug, Clone, Deserialize)]
pub struct RawReading {
    pub year: i32,
    pub month: u32,
    pub variance: f64,
}

/// The complete document served by the endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDataset {
    pub base_temperature: f64,
    pub monthly_variance: Vec<RawReading>,
}

// ---------------------------------------------------------------------------
// Normalized model
// ---------------------------------------------------------------------------

/// A wire record whose month could not be normalized.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("record {index}: month {month} is outside 1-12")]
    MonthOutOfRange { index: usize, month: u32 },
}

/// One monthly reading after normalization. `month` is a 0-based index.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyReading {
    pub year: i32,
    pub month: u32,
    /// Signed offset from the dataset's base temperature, in °C.
    pub variance: f64,
}

/// The full dataset held in application state. Immutable once loaded;
/// replaced wholesale when a new source is opened.
#[derive(Debug, Clone)]
pub struct TemperatureDataset {
    pub base_temperature: f64,
    pub readings: Vec<MonthlyReading>,
}

impl TemperatureDataset {
    /// Normalize a wire dataset: shift every month from 1-based to 0-based.
    /// Builds new readings instead of mutating the raw input.
    pub fn from_raw(raw: RawDataset) -> Result<Self, ShapeError> {
        let mut readings = Vec::with_capacity(raw.monthly_variance.len());
        for (index, rec) in raw.monthly_variance.iter().enumerate() {
            if !(1..=12).contains(&rec.month) {
                return Err(ShapeError::MonthOutOfRange {
                    index,
                    month: rec.month,
                });
            }
            readings.push(MonthlyReading {
                year: rec.year,
                month: rec.month - 1,
                variance: rec.variance,
            });
        }
        Ok(TemperatureDataset {
            base_temperature: raw.base_temperature,
            readings,
        })
    }

    /// Number of monthly readings.
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Whether the dataset has no readings.
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Distinct years present, ascending. Drives the horizontal axis domain.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.readings.iter().map(|r| r.year).collect();
        years.sort_unstable();
        years.dedup();
        years
    }

    /// Absolute temperature of a reading.
    pub fn temperature(&self, reading: &MonthlyReading) -> f64 {
        self.base_temperature + reading.variance
    }

    /// Min and max absolute temperature over all readings, `None` when empty.
    /// Drives the color-threshold domain.
    pub fn temperature_range(&self) -> Option<(f64, f64)> {
        let mut temps = self
            .readings
            .iter()
            .map(|r| self.base_temperature + r.variance);
        let first = temps.next()?;
        let (min, max) = temps.fold((first, first), |(lo, hi), t| (lo.min(t), hi.max(t)));
        Some((min, max))
    }
}
