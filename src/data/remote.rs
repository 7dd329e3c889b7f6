use anyhow::{Context, Result};

use super::loader::parse_dataset;
use super::model::TemperatureDataset;

/// The fixed dataset endpoint (monthly global land-surface temperature).
pub const DATA_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

/// Perform the single startup GET and parse the body.
///
/// Blocking; callers run it on a worker thread. No retry, no caching: the
/// request happens exactly once per app launch.
pub fn fetch_dataset(url: &str) -> Result<TemperatureDataset> {
    let body = reqwest::blocking::get(url)
        .with_context(|| format!("requesting {url}"))?
        .error_for_status()
        .context("dataset endpoint returned an error status")?
        .text()
        .context("reading response body")?;
    parse_dataset(&body)
}
