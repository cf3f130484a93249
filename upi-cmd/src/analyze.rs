//! Analysis and health-check commands against the backend.

use anyhow::bail;
use log::info;
use upi_core::transport::ReqwestTransport;
use upi_core::{AnalysisClient, AnalysisConfig, AnalysisInput, AnalysisWidget, RequestState};

/// Build the request payload; no neighborhood means the bare GET form.
pub fn build_input(
    neighborhood: Option<String>,
    aqi: f64,
    stores: f64,
    cover: f64,
) -> Option<AnalysisInput> {
    let neighborhood = neighborhood?.trim().to_string();
    if neighborhood.is_empty() {
        return None;
    }
    Some(AnalysisInput {
        neighborhood,
        aqi,
        stores,
        cover,
    })
}

/// Run one analysis and print the returned text.
///
/// Drives the same `AnalysisWidget` state machine as the page, so the exit
/// status follows its final phase.
pub async fn run_analyze(base_url: &str, input: Option<&AnalysisInput>) -> anyhow::Result<()> {
    let client = AnalysisClient::new(AnalysisConfig::new(base_url), ReqwestTransport::default());
    let mut widget = AnalysisWidget::new();

    let Some(ticket) = widget.begin() else {
        bail!("analysis already running");
    };
    info!("Requesting analysis from {}", client.chat_url());
    let outcome = client.run(input).await;
    widget.finish(ticket, outcome);

    match widget.state() {
        RequestState::Succeeded { result_text } => {
            println!("{}", result_text);
            Ok(())
        }
        RequestState::Failed { error_message } => bail!("{}", error_message),
        other => bail!("analysis ended in unexpected state {:?}", other),
    }
}

/// Print whether the backend reports itself healthy.
pub async fn run_health(base_url: &str) -> anyhow::Result<()> {
    let client = AnalysisClient::new(AnalysisConfig::new(base_url), ReqwestTransport::default());
    if client.health().await? {
        println!("ok");
        Ok(())
    } else {
        bail!("backend at {} reported not ok", client.config().base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_neighborhood_means_get() {
        assert_eq!(build_input(None, 70.0, 1.0, 75.0), None);
        assert_eq!(build_input(Some("  ".to_string()), 70.0, 1.0, 75.0), None);
    }

    #[test]
    fn neighborhood_builds_post_payload() {
        let input = build_input(Some(" Avondale ".to_string()), 120.0, 1.0, 23.0).unwrap();
        assert_eq!(input.neighborhood, "Avondale");
        assert_eq!(input.aqi, 120.0);
        assert_eq!(input.cover, 23.0);
    }
}
