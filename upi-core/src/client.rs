//! Client for the analysis backend's `/chat` route.

use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::transport::{HttpRequest, HttpResponse, Transport};

/// Shown when the backend answers successfully but without any text.
pub const NO_TEXT_PLACEHOLDER: &str = "(no text returned)";

const CHAT_ROUTE: &str = "chat";
const HEALTH_ROUTE: &str = "health";

/// Neighborhood metrics sent to the analysis backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisInput {
    pub neighborhood: String,
    /// Historical air quality index
    pub aqi: f64,
    /// Grocery stores within 2 miles
    pub stores: f64,
    /// Tree canopy cover (%)
    pub cover: f64,
}

impl Default for AnalysisInput {
    fn default() -> Self {
        Self {
            neighborhood: "Logan Square".to_string(),
            aqi: 70.0,
            stores: 1.0,
            cover: 75.0,
        }
    }
}

/// Success body of `/chat`. `message` is diagnostic only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AnalysisReply {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub response: Option<String>,
}

impl AnalysisReply {
    /// Interpret a raw response: non-2xx is an error, otherwise the body must be JSON.
    pub fn from_response(response: &HttpResponse) -> Result<Self, AnalysisError> {
        if !response.is_success() {
            return Err(AnalysisError::Status(response.status));
        }
        serde_json::from_str(&response.body).map_err(|e| AnalysisError::Decode(e.to_string()))
    }

    /// The text to render: `response`, or the placeholder when it is absent or empty.
    pub fn display_text(&self) -> String {
        match self.response.as_deref() {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => NO_TEXT_PLACEHOLDER.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct HealthReply {
    #[serde(default)]
    ok: bool,
}

/// Issues analysis requests against the configured base URL.
pub struct AnalysisClient<T> {
    config: AnalysisConfig,
    transport: T,
}

impl<T: Transport> AnalysisClient<T> {
    pub fn new(config: AnalysisConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn chat_url(&self) -> String {
        self.config.endpoint(CHAT_ROUTE)
    }

    /// Build the `/chat` request: `GET` without input, JSON `POST` with it.
    pub fn request(&self, input: Option<&AnalysisInput>) -> HttpRequest {
        match input {
            None => HttpRequest::get(self.chat_url()),
            Some(input) => {
                let body = serde_json::json!({
                    "neighborhood": input.neighborhood,
                    "aqi": input.aqi,
                    "stores": input.stores,
                    "cover": input.cover,
                });
                HttpRequest::post_json(self.chat_url(), body.to_string())
            }
        }
    }

    /// Send one `/chat` request and return the text to display.
    pub async fn run(&self, input: Option<&AnalysisInput>) -> Result<String, AnalysisError> {
        let request = self.request(input);
        log::info!("Running analysis: {} {}", request.method.as_str(), request.url);

        let response = self.transport.send(request).await?;
        let reply = AnalysisReply::from_response(&response)?;
        if let Some(message) = reply.message.as_deref() {
            log::info!("message: {}", message);
        }
        Ok(reply.display_text())
    }

    /// Probe the backend's `/health` route.
    pub async fn health(&self) -> Result<bool, AnalysisError> {
        let response = self
            .transport
            .send(HttpRequest::get(self.config.endpoint(HEALTH_ROUTE)))
            .await?;
        if !response.is_success() {
            return Err(AnalysisError::Status(response.status));
        }
        let reply: HealthReply = serde_json::from_str(&response.body)
            .map_err(|e| AnalysisError::Decode(e.to_string()))?;
        Ok(reply.ok)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::transport::Method;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Replays canned outcomes and records every request it is handed.
    #[derive(Default)]
    pub(crate) struct FakeTransport {
        pub(crate) sent: RefCell<Vec<HttpRequest>>,
        replies: RefCell<VecDeque<Result<HttpResponse, AnalysisError>>>,
    }

    impl FakeTransport {
        pub(crate) fn replying(replies: Vec<Result<HttpResponse, AnalysisError>>) -> Self {
            Self {
                sent: RefCell::new(Vec::new()),
                replies: RefCell::new(replies.into()),
            }
        }
    }

    impl Transport for &FakeTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, AnalysisError> {
            self.sent.borrow_mut().push(request);
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(AnalysisError::transport("no canned reply")))
        }
    }

    fn ok(body: &str) -> Result<HttpResponse, AnalysisError> {
        Ok(HttpResponse::new(200, body))
    }

    #[tokio::test]
    async fn returns_response_field() {
        let fake = FakeTransport::replying(vec![ok(r#"{"message":"ok","response":"Hello"}"#)]);
        let client = AnalysisClient::new(AnalysisConfig::default(), &fake);
        assert_eq!(client.run(None).await.unwrap(), "Hello");
    }

    #[tokio::test]
    async fn empty_or_missing_response_uses_placeholder() {
        let fake = FakeTransport::replying(vec![
            ok(r#"{"message":"ok","response":""}"#),
            ok(r#"{"message":"ok"}"#),
            ok("{}"),
        ]);
        let client = AnalysisClient::new(AnalysisConfig::default(), &fake);
        for _ in 0..3 {
            assert_eq!(client.run(None).await.unwrap(), NO_TEXT_PLACEHOLDER);
        }
    }

    #[tokio::test]
    async fn non_success_status_is_error() {
        let fake = FakeTransport::replying(vec![Ok(HttpResponse::new(
            500,
            r#"{"error":"model unavailable"}"#,
        ))]);
        let client = AnalysisClient::new(AnalysisConfig::default(), &fake);
        let err = client.run(None).await.unwrap_err();
        assert_eq!(err, AnalysisError::Status(500));
        assert_eq!(err.to_string(), "HTTP 500");
    }

    #[tokio::test]
    async fn malformed_body_is_decode_error() {
        let fake = FakeTransport::replying(vec![ok("<html>oops</html>")]);
        let client = AnalysisClient::new(AnalysisConfig::default(), &fake);
        let err = client.run(None).await.unwrap_err();
        assert!(matches!(err, AnalysisError::Decode(_)));
        assert!(err.to_string().starts_with("Invalid response body: "));
    }

    #[tokio::test]
    async fn transport_failure_passes_through() {
        let fake = FakeTransport::replying(vec![Err(AnalysisError::transport(
            "Failed to fetch",
        ))]);
        let client = AnalysisClient::new(AnalysisConfig::default(), &fake);
        let err = client.run(None).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch");
    }

    #[tokio::test]
    async fn without_input_sends_bare_get() {
        let fake = FakeTransport::replying(vec![ok(r#"{"response":"hi"}"#)]);
        let client = AnalysisClient::new(AnalysisConfig::new("http://api.local/"), &fake);
        client.run(None).await.unwrap();

        let sent = fake.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Get);
        assert_eq!(sent[0].url, "http://api.local/chat");
        assert_eq!(sent[0].body, None);
    }

    #[tokio::test]
    async fn with_input_posts_json_body() {
        let fake = FakeTransport::replying(vec![ok(r#"{"response":"hi"}"#)]);
        let client = AnalysisClient::new(AnalysisConfig::default(), &fake);
        let input = AnalysisInput {
            neighborhood: "Uptown".to_string(),
            aqi: 120.0,
            stores: 3.0,
            cover: 23.5,
        };
        client.run(Some(&input)).await.unwrap();

        let sent = fake.sent.borrow();
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].content_type(), Some("application/json"));
        let body: serde_json::Value =
            serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["neighborhood"], "Uptown");
        assert_eq!(body["aqi"], 120.0);
        assert_eq!(body["stores"], 3.0);
        assert_eq!(body["cover"], 23.5);
    }

    #[tokio::test]
    async fn health_reads_ok_flag() {
        let fake = FakeTransport::replying(vec![
            ok(r#"{"ok":true}"#),
            Ok(HttpResponse::new(503, "")),
        ]);
        let client = AnalysisClient::new(AnalysisConfig::default(), &fake);
        assert!(client.health().await.unwrap());
        assert_eq!(client.health().await.unwrap_err(), AnalysisError::Status(503));
        assert_eq!(fake.sent.borrow()[0].url, "http://localhost:5500/health");
    }
}
