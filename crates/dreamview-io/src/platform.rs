//! [`Platform`] implementation on top of the Web API.

use dreamview_core::{Anchor, DisplayHandle, MediaType, Platform, PlatformError};
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::blob;
use crate::components::FILE_INPUT_ID;
use crate::download;

/// Browser side effects for the controller.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPlatform;

impl Platform for BrowserPlatform {
    fn create_display_handle(
        &self,
        bytes: &[u8],
        media_type: MediaType,
    ) -> Result<DisplayHandle, PlatformError> {
        blob::create_object_url(bytes, media_type.mime())
            .map(DisplayHandle::new)
            .map_err(PlatformError::from)
    }

    fn revoke_display_handle(&self, handle: &DisplayHandle) {
        blob::revoke_object_url(handle.as_str());
    }

    fn save(
        &self,
        bytes: &[u8],
        filename: &str,
        media_type: MediaType,
    ) -> Result<(), PlatformError> {
        Ok(download::trigger_download(bytes, filename, media_type.mime())?)
    }

    fn scroll_into_view(&self, anchor: Anchor) {
        wasm_bindgen_futures::spawn_local(async move {
            // Wait one tick so the render revealing the anchor is committed.
            gloo_timers::future::TimeoutFuture::new(0).await;
            if let Err(err) = scroll_to(anchor) {
                warn!(?anchor, %err, "scroll failed");
            }
        });
    }

    fn clear_file_input(&self) {
        let input = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(FILE_INPUT_ID))
            .and_then(|e| e.dyn_into::<web_sys::HtmlInputElement>().ok());
        match input {
            Some(input) => input.set_value(""),
            None => warn!(id = FILE_INPUT_ID, "file input not found"),
        }
    }
}

fn scroll_to(anchor: Anchor) -> Result<(), PlatformError> {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(anchor.element_id()))
        .ok_or_else(|| {
            PlatformError::JsError(format!("no element with id {:?}", anchor.element_id()))
        })?;

    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    if anchor.centered() {
        opts.set_block(ScrollLogicalPosition::Center);
    }
    element.scroll_into_view_with_scroll_into_view_options(&opts);
    Ok(())
}
