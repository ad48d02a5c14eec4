//! Multipart upload to the generation endpoint via `fetch`.
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use dreamview_core::{FILE_FIELD, GenerateError, GenerationRequest, ImageGenerator, MODEL_FIELD};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, Response};

use crate::blob;

/// Errors from a single `fetch` round trip.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("HTTP status {0}")]
    Status(u16),

    /// A browser API call returned an error or the request was rejected.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for FetchError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

impl From<FetchError> for GenerateError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Status(status) => Self::Status(status),
            FetchError::JsError(msg) => Self::Transport(msg),
        }
    }
}

/// [`ImageGenerator`] that POSTs to an HTTP endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpGenerator {
    endpoint: String,
}

impl HttpGenerator {
    /// Target `endpoint` (absolute URL or path relative to the page).
    #[must_use]
    pub const fn new(endpoint: String) -> Self {
        Self { endpoint }
    }

    /// The configured endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ImageGenerator for HttpGenerator {
    #[allow(clippy::future_not_send)] // WASM is single-threaded; JsFuture is !Send
    async fn generate(&self, request: &GenerationRequest) -> Result<Vec<u8>, GenerateError> {
        Ok(post_multipart(&self.endpoint, request).await?)
    }
}

/// Build the multipart body: the image under [`FILE_FIELD`] and the
/// model value under [`MODEL_FIELD`].
fn build_form(request: &GenerationRequest) -> Result<FormData, JsValue> {
    let form = FormData::new()?;
    let file = &request.file;
    let payload = blob::blob_from_bytes(file.bytes(), file.media_type().mime())?;
    form.append_with_blob_and_filename(FILE_FIELD, &payload, file.name())?;
    form.append_with_str(MODEL_FIELD, request.model.value())?;
    Ok(form)
}

/// POST `request` to `endpoint` and return the full response body.
#[allow(clippy::future_not_send)] // WASM is single-threaded; JsFuture is !Send
async fn post_multipart(endpoint: &str, request: &GenerationRequest) -> Result<Vec<u8>, FetchError> {
    let window = web_sys::window().ok_or_else(|| FetchError::JsError("no global window".into()))?;

    let init = RequestInit::new();
    init.set_method("POST");
    // No explicit Content-Type: the browser adds the multipart boundary.
    let form = build_form(request)?;
    init.set_body(&form);

    let req = Request::new_with_str_and_init(endpoint, &init)?;
    let response: Response = JsFuture::from(window.fetch_with_request(&req))
        .await?
        .dyn_into()?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let buffer = JsFuture::from(response.array_buffer()?).await?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_maps_to_status() {
        let err: GenerateError = FetchError::Status(503).into();
        assert_eq!(err, GenerateError::Status(503));
    }

    #[test]
    fn js_error_maps_to_transport() {
        let err: GenerateError = FetchError::JsError("TypeError: Failed to fetch".into()).into();
        assert_eq!(
            err,
            GenerateError::Transport("TypeError: Failed to fetch".into())
        );
    }

    #[test]
    fn endpoint_is_kept_verbatim() {
        let generator = HttpGenerator::new("/generate/".to_string());
        assert_eq!(generator.endpoint(), "/generate/");
    }
}
