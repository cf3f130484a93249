use serde::{Deserialize, Serialize};

/// Local development address of the analysis backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5500";

/// Endpoint configuration injected into the analysis client.
///
/// # Example
///
/// ```rust
/// use upi_core::AnalysisConfig;
///
/// let config = AnalysisConfig::new("https://planner.example.org/");
/// assert_eq!(config.endpoint("chat"), "https://planner.example.org/chat");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisConfig {
    pub base_url: String,
}

impl AnalysisConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Use `base_url` when it is set and non-blank, otherwise the default address.
    pub fn from_override(base_url: Option<&str>) -> Self {
        match base_url.map(str::trim) {
            Some(url) if !url.is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    /// Parse a JSON config such as `{ "baseUrl": "http://host:5500" }`.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Join a route onto the base URL, ignoring trailing/leading slashes.
    pub fn endpoint(&self, route: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            route.trim_start_matches('/')
        )
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_backend() {
        let config = AnalysisConfig::default();
        assert_eq!(config.endpoint("chat"), "http://localhost:5500/chat");
    }

    #[test]
    fn blank_override_uses_default() {
        assert_eq!(AnalysisConfig::from_override(None), AnalysisConfig::default());
        assert_eq!(AnalysisConfig::from_override(Some("  ")), AnalysisConfig::default());
        assert_eq!(
            AnalysisConfig::from_override(Some("http://10.0.0.2:8000")).base_url,
            "http://10.0.0.2:8000"
        );
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        let config = AnalysisConfig::new("http://host:5500///");
        assert_eq!(config.endpoint("/health"), "http://host:5500/health");
    }

    #[test]
    fn parses_camel_case_json() {
        let config = AnalysisConfig::from_json(r#"{ "baseUrl": "http://api:9000" }"#).unwrap();
        assert_eq!(config.base_url, "http://api:9000");
        assert!(AnalysisConfig::from_json(r#"{ "base": 1 }"#).is_err());
    }
}
