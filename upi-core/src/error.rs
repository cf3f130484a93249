/// Error types for analysis requests
use thiserror::Error;

/// Fallback text when the transport reports a failure without a message.
const GENERIC_FAILURE: &str = "Request failed";

/// Why a single analysis request failed.
///
/// The `Display` output is exactly what the widget shows after `Error: `.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The request never produced a response (network unreachable, DNS, CORS...)
    #[error("{0}")]
    Transport(String),

    /// The server answered with a non-2xx status
    #[error("HTTP {0}")]
    Status(u16),

    /// The response body was not the expected JSON
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl AnalysisError {
    /// Build a transport error, substituting a generic message for an empty one.
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            AnalysisError::Transport(GENERIC_FAILURE.to_string())
        } else {
            AnalysisError::Transport(message)
        }
    }
}

#[cfg(feature = "api")]
impl From<reqwest::Error> for AnalysisError {
    fn from(e: reqwest::Error) -> Self {
        AnalysisError::transport(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_displays_http_code() {
        assert_eq!(AnalysisError::Status(500).to_string(), "HTTP 500");
        assert_eq!(AnalysisError::Status(404).to_string(), "HTTP 404");
    }

    #[test]
    fn transport_keeps_underlying_message() {
        let err = AnalysisError::transport("connection refused");
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn empty_transport_message_falls_back() {
        assert_eq!(AnalysisError::transport("").to_string(), "Request failed");
        assert_eq!(AnalysisError::transport("   ").to_string(), "Request failed");
    }
}
