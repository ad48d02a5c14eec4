//! File upload component with drag-and-drop and file picker.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdUpload;
use dreamview_core::{Anchor, FileCandidate, IntakeSource, MediaType};
use tracing::warn;

/// DOM id of the hidden `<input type="file">`.
pub const FILE_INPUT_ID: &str = "imageInput";

/// Props for the [`FileUpload`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FileUploadProps {
    /// Whether a drag is currently hovering over the zone.
    dragging: bool,
    /// Called with the first picked or dropped file (`None` if there was none).
    on_intake: EventHandler<(IntakeSource, Option<FileCandidate>)>,
    /// Called when a drag enters (`true`) or leaves (`false`) the zone.
    on_drag: EventHandler<bool>,
    /// Called when an accepted-type file cannot be read, with the reason.
    on_read_error: EventHandler<(IntakeSource, String)>,
}

/// A drag-and-drop zone that also opens the file picker when clicked.
///
/// The picker label fills the whole zone, so a click anywhere in it
/// opens the dialog.
///
/// Only the first file of a selection or drop is considered. Files whose
/// declared type is outside the allow-set are forwarded without reading
/// their contents; the controller rejects them by type.
#[component]
pub fn FileUpload(props: FileUploadProps) -> Element {
    let on_intake = props.on_intake;
    let on_drag = props.on_drag;
    let on_read_error = props.on_read_error;

    let forward_first = move |source: IntakeSource, files: Vec<FileData>| async move {
        let Some(file) = files.into_iter().next() else {
            on_intake.call((source, None));
            return;
        };
        let name = file.name();
        let declared_type = file.content_type().unwrap_or_default();

        let bytes = if MediaType::from_mime(&declared_type).is_some() {
            match file.read_bytes().await {
                Ok(bytes) => bytes.to_vec(),
                Err(err) => {
                    warn!(name = name.as_str(), %err, "failed to read file");
                    on_read_error.call((source, err.to_string()));
                    return;
                }
            }
        } else {
            Vec::new()
        };

        on_intake.call((
            source,
            Some(FileCandidate {
                name,
                declared_type,
                bytes,
            }),
        ));
    };

    let handle_files = move |evt: FormEvent| async move {
        forward_first(IntakeSource::Picker, evt.files()).await;
    };

    let handle_drop = move |evt: DragEvent| async move {
        evt.prevent_default();
        on_drag.call(false);
        forward_first(IntakeSource::Drop, evt.files()).await;
    };

    let zone_class = if props.dragging {
        "upload-area drag-over"
    } else {
        "upload-area"
    };
    let accept = MediaType::accept_attribute();
    let hint = MediaType::ALL.map(MediaType::label).join(", ");

    rsx! {
        div {
            id: Anchor::UploadArea.element_id(),
            class: "{zone_class}",
            ondragover: move |evt| {
                evt.prevent_default();
                on_drag.call(true);
            },
            ondragleave: move |evt| {
                evt.prevent_default();
                on_drag.call(false);
            },
            ondrop: handle_drop,

            label { r#for: FILE_INPUT_ID, class: "upload-label",
                Icon { icon: LdUpload, width: 40, height: 40 }
                p { class: "upload-title", "Drop an image here or click to browse" }
                p { class: "upload-hint", "{hint}" }
            }

            input {
                id: FILE_INPUT_ID,
                r#type: "file",
                accept: "{accept}",
                class: "hidden",
                onchange: handle_files,
            }
        }
    }
}
