//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the page-wide signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! Request state is not in here: each `AnalysisPanel` owns its own.

use crate::js_bridge;
use dioxus::prelude::*;
use upi_core::{AnalysisConfig, NeighborhoodOptions};

/// Shared application state for the page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Where the analysis backend lives
    pub config: Signal<AnalysisConfig>,
    /// Dropdown options (empty until loaded, or if loading failed)
    pub neighborhoods: Signal<Vec<String>>,
    /// Whether the neighborhood CSV is still being fetched
    pub neighborhoods_loading: Signal<bool>,
    /// Neighborhood picked in the dropdown ("" for the placeholder)
    pub selected_neighborhood: Signal<String>,
}

impl AppState {
    /// Create a new AppState pointing at `config`.
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config: Signal::new(config),
            neighborhoods: Signal::new(Vec::new()),
            neighborhoods_loading: Signal::new(true),
            selected_neighborhood: Signal::new(String::new()),
        }
    }

    /// Fetch the community CSV once and fill `neighborhoods`.
    ///
    /// Failures only get logged; the dropdown then just shows its placeholder.
    pub async fn load_neighborhoods(mut self, csv_url: &str) {
        let loaded = fetch_neighborhoods(csv_url).await;
        self.neighborhoods.set(options_or_empty(loaded, csv_url));
        self.neighborhoods_loading.set(false);
    }
}

/// Dropdown names from a load attempt; any failure degrades to no options.
pub(crate) fn options_or_empty(
    loaded: anyhow::Result<NeighborhoodOptions>,
    source: &str,
) -> Vec<String> {
    match loaded {
        Ok(options) => options.into_vec(),
        Err(e) => {
            log::warn!("Failed to load neighborhoods from {}: {}", source, e);
            Vec::new()
        }
    }
}

async fn fetch_neighborhoods(csv_url: &str) -> anyhow::Result<NeighborhoodOptions> {
    let csv_data = js_bridge::fetch_text(csv_url).await?;
    NeighborhoodOptions::from_community_csv(&csv_data)
}
