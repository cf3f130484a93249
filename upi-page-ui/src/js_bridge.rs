//! Typed wrappers around the browser `fetch` API.
//!
//! `FetchTransport` lets `upi_core::AnalysisClient` run inside the page.
//! JS exceptions are flattened into `AnalysisError::Transport` carrying the
//! JS error message (e.g. `Failed to fetch`).

use upi_core::{AnalysisError, HttpRequest, HttpResponse, Transport};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

/// `Transport` backed by `window.fetch`.
#[derive(Clone, Copy, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, AnalysisError> {
        fetch(&request).await
    }
}

/// Fetch a text asset (e.g. a CSV next to the WASM bundle).
///
/// Non-2xx responses are reported as `AnalysisError::Status`.
pub async fn fetch_text(url: &str) -> Result<String, AnalysisError> {
    let response = fetch(&HttpRequest::get(url)).await?;
    if !response.is_success() {
        return Err(AnalysisError::Status(response.status));
    }
    Ok(response.body)
}

/// Set `document.title`.
pub fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

async fn fetch(request: &HttpRequest) -> Result<HttpResponse, AnalysisError> {
    let window = web_sys::window().ok_or_else(|| AnalysisError::transport("no window"))?;

    let init = RequestInit::new();
    init.set_method(request.method.as_str());
    if let Some(body) = &request.body {
        init.set_body(&JsValue::from_str(body));
    }

    let js_request = Request::new_with_str_and_init(&request.url, &init).map_err(js_error)?;
    if let Some(content_type) = request.content_type() {
        js_request
            .headers()
            .set("Content-Type", content_type)
            .map_err(js_error)?;
    }

    let value = JsFuture::from(window.fetch_with_request(&js_request))
        .await
        .map_err(js_error)?;
    let response: Response = value.dyn_into().map_err(js_error)?;
    let status = response.status();

    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;

    Ok(HttpResponse {
        status,
        body: text.as_string().unwrap_or_default(),
    })
}

fn js_error(value: JsValue) -> AnalysisError {
    let error_message = value.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message()));
    transport_error(error_message, value.as_string())
}

/// Prefer a JS `Error`'s message, then a thrown string; blank means "Request failed".
pub(crate) fn transport_error(
    error_message: Option<String>,
    thrown_string: Option<String>,
) -> AnalysisError {
    let message = error_message
        .filter(|m| !m.trim().is_empty())
        .or(thrown_string)
        .unwrap_or_default();
    AnalysisError::transport(message)
}
