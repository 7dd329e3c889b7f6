use std::path::Path;

use anyhow::{bail, Context, Result};

use super::model::{RawDataset, TemperatureDataset};

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse the endpoint's JSON body and normalize it into a dataset.
///
/// Expected shape (1-based months on the wire):
///
/// ```json
/// {
///   "baseTemperature": 8.66,
///   "monthlyVariance": [
///     { "year": 1753, "month": 1, "variance": -1.366 },
///     ...
///   ]
/// }
/// ```
pub fn parse_dataset(text: &str) -> Result<TemperatureDataset> {
    let raw: RawDataset = serde_json::from_str(text).context("parsing dataset JSON")?;
    let dataset = TemperatureDataset::from_raw(raw).context("normalizing dataset")?;
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Local file loading (File → Open…)
// ---------------------------------------------------------------------------

/// Load a dataset from a local file. Only `.json` in the wire shape above.
pub fn load_file(path: &Path) -> Result<TemperatureDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "json" => {
            let text = std::fs::read_to_string(path).context("reading JSON file")?;
            parse_dataset(&text)
        }
        other => bail!("Unsupported file extension: .{other}"),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SAMPLE: &str = r#"{
        "baseTemperature": 8.66,
        "monthlyVariance": [
            { "year": 1753, "month": 1, "variance": -1.366 },
            { "year": 1753, "month": 2, "variance": -2.223 },
            { "year": 1754, "month": 12, "variance": 0.187 }
        ]
    }"#;

    #[test]
    fn parses_and_normalizes_the_wire_shape() {
        let ds = parse_dataset(SAMPLE).unwrap();
        assert_eq!(ds.base_temperature, 8.66);
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.readings[0].month, 0);
        assert_eq!(ds.readings[2].month, 11);
        assert_eq!(ds.years(), vec![1753, 1754]);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(parse_dataset("{ not json").is_err());
    }

    #[test]
    fn wrong_shape_is_an_error() {
        assert!(parse_dataset(r#"{"baseTemperature": "warm"}"#).is_err());
        assert!(
            parse_dataset(
                r#"{"baseTemperature": 8.0, "monthlyVariance": [{"year": 2000, "month": 0, "variance": 0.1}]}"#
            )
            .is_err()
        );
    }

    #[test]
    fn loads_a_json_file_and_rejects_other_extensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("temperatures.json");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 3);

        assert!(load_file(&dir.path().join("temperatures.csv")).is_err());
    }
}
