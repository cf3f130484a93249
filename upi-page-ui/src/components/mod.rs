//! Reusable Dioxus RSX components for the Urban Planning Initiative page.

mod analysis_panel;
mod error_display;
mod loading_spinner;
mod metric_input;
mod neighborhood_selector;
mod site_header;

pub use analysis_panel::AnalysisPanel;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use metric_input::MetricInput;
pub use neighborhood_selector::NeighborhoodSelector;
pub use site_header::SiteHeader;
