use crate::data::model::TemperatureDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Lifecycle per source: unloaded → loading → loaded | errored, entered once.
#[derive(Default)]
pub struct AppState {
    /// Loaded dataset (None until the startup fetch completes).
    pub dataset: Option<TemperatureDataset>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether the startup fetch is still in flight.
    pub loading: bool,
}

impl AppState {
    /// Ingest a loaded dataset, replacing any previous one wholesale.
    pub fn set_dataset(&mut self, dataset: TemperatureDataset) {
        self.dataset = Some(dataset);
        self.status_message = None;
        self.loading = false;
    }

    /// Record a load failure. The dataset is left untouched; nothing is
    /// partially rendered.
    pub fn set_error(&mut self, message: String) {
        self.status_message = Some(message);
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{RawDataset, RawReading};

    fn dataset() -> TemperatureDataset {
        TemperatureDataset::from_raw(RawDataset {
            base_temperature: 8.0,
            monthly_variance: vec![RawReading {
                year: 2000,
                month: 1,
                variance: -1.5,
            }],
        })
        .unwrap()
    }

    #[test]
    fn loading_a_dataset_clears_error_and_spinner() {
        let mut state = AppState {
            loading: true,
            status_message: Some("Error: old".to_string()),
            ..AppState::default()
        };
        state.set_dataset(dataset());
        assert!(state.dataset.is_some());
        assert!(state.status_message.is_none());
        assert!(!state.loading);
    }

    #[test]
    fn a_failed_fetch_leaves_no_dataset_behind() {
        let mut state = AppState {
            loading: true,
            ..AppState::default()
        };
        state.set_error("Error: connection refused".to_string());
        assert!(state.dataset.is_none());
        assert_eq!(
            state.status_message.as_deref(),
            Some("Error: connection refused")
        );
        assert!(!state.loading);
    }
}
