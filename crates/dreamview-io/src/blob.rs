//! Blob construction and object URL management.
//!
//! Object URLs keep their Blob alive until revoked, so every URL
//! returned by [`create_object_url`] must eventually be passed to
//! [`revoke_object_url`].
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use dreamview_core::PlatformError;
use wasm_bindgen::JsValue;
use web_sys::BlobPropertyBag;

/// Errors that can occur when creating a Blob or object URL.
#[derive(Debug, thiserror::Error)]
pub enum BlobError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for BlobError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

impl From<BlobError> for PlatformError {
    fn from(err: BlobError) -> Self {
        match err {
            BlobError::JsError(msg) => Self::JsError(msg),
        }
    }
}

/// Copy `bytes` into a new `Blob` of the given MIME type.
///
/// # Errors
///
/// Returns the raw `JsValue` if the `Blob` constructor throws.
pub fn blob_from_bytes(bytes: &[u8], mime_type: &str) -> Result<web_sys::Blob, JsValue> {
    let uint8_array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&uint8_array);

    let opts = BlobPropertyBag::new();
    opts.set_type(mime_type);
    web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
}

/// Wrap `bytes` in a Blob and return an object URL for it.
///
/// # Errors
///
/// Returns [`BlobError::JsError`] if Blob or URL creation fails.
pub fn create_object_url(bytes: &[u8], mime_type: &str) -> Result<String, BlobError> {
    let blob = blob_from_bytes(bytes, mime_type)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;
    Ok(url)
}

/// Release an object URL created by [`create_object_url`].
///
/// Revocation failures are ignored; there is nothing left to clean up.
pub fn revoke_object_url(url: &str) {
    let _ = web_sys::Url::revoke_object_url(url);
}
