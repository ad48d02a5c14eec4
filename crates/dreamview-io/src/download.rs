//! Client-side save of the generated image.
//!
//! The browser is asked to save in-memory bytes by pointing a temporary
//! `<a download>` element at an object URL and clicking it. The anchor
//! and the URL are released immediately afterwards.
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use dreamview_core::PlatformError;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;

use crate::blob;

/// Errors that can occur when triggering a file download.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for DownloadError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

impl From<DownloadError> for PlatformError {
    fn from(err: DownloadError) -> Self {
        match err {
            DownloadError::JsError(msg) => Self::JsError(msg),
        }
    }
}

/// Trigger a download of `data` in the browser.
///
/// Creates a `Blob` from `data`, generates an object URL, and
/// programmatically clicks a temporary `<a download="filename">` element.
/// The anchor is removed and the object URL revoked right after the click.
///
/// # Errors
///
/// Returns [`DownloadError::JsError`] if any browser API call fails
/// (e.g., `Blob` creation, `URL.createObjectURL`, element creation).
pub fn trigger_download(data: &[u8], filename: &str, mime_type: &str) -> Result<(), DownloadError> {
    let window =
        web_sys::window().ok_or_else(|| DownloadError::JsError("no global window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| DownloadError::JsError("no document".into()))?;

    let blob = blob::blob_from_bytes(data, mime_type)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let anchor: web_sys::HtmlAnchorElement = match document.create_element("a") {
        Ok(element) => element
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|e| DownloadError::JsError(format!("failed to cast element: {e:?}"))),
        Err(e) => Err(e.into()),
    }
    .inspect_err(|_| blob::revoke_object_url(&url))?;

    anchor.set_href(&url);
    anchor.set_download(filename);

    let Some(body) = document.body() else {
        blob::revoke_object_url(&url);
        return Err(DownloadError::JsError("no document body".into()));
    };
    if let Err(e) = body.append_child(&anchor) {
        blob::revoke_object_url(&url);
        return Err(e.into());
    }
    anchor.click();

    // The save has started; cleanup failures are not download failures.
    let _ = body.remove_child(&anchor);
    blob::revoke_object_url(&url);

    Ok(())
}
