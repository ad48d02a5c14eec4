//! The upload, generate, and preview controller.
//!
//! [`Controller`] turns UI events into [`Session`] transitions and
//! performs the resulting side effects through two injected seams:
//!
//! - [`Platform`]: object URLs, saving files, scrolling, and clearing
//!   the file input.
//! - [`ImageGenerator`]: the one network round trip.
//!
//! Session storage is injected as well ([`SessionCell`]) so the same
//! controller drives a Dioxus signal in the browser and a plain
//! `RefCell` in tests.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::error::{GenerateError, IntakeError, PlatformError};
use crate::media::{FileCandidate, MediaType, SelectedFile};
use crate::model::ModelVariant;
use crate::notification::{NotificationId, Severity};
use crate::session::{DisplayHandle, GenerationRejected, GenerationTicket, Session};

/// Multipart field carrying the image bytes.
pub const FILE_FIELD: &str = "file";

/// Multipart field carrying the model variant value.
pub const MODEL_FIELD: &str = "model_type";

/// The service always answers with PNG.
const RESULT_MEDIA_TYPE: MediaType = MediaType::Png;

const MSG_NO_FILE: &str = "Please select an image first";
const MSG_IN_PROGRESS: &str = "An image is already being generated";
const MSG_GENERATED: &str = "Image generated successfully!";
const MSG_GENERATE_FAILED: &str = "Failed to generate image. Please try again.";
const MSG_NO_RESULT: &str = "No generated image to download";
const MSG_DOWNLOADED: &str = "Image downloaded successfully!";
const MSG_DOWNLOAD_FAILED: &str = "Failed to download image";
const MSG_READ_FAILED: &str = "Failed to read the selected file";

/// Build the download filename for a result saved at `timestamp_ms`
/// (milliseconds since the Unix epoch).
#[must_use]
pub fn download_filename(timestamp_ms: u128) -> String {
    format!("generated-image-{timestamp_ms}.png")
}

fn now_millis() -> u128 {
    web_time::SystemTime::now()
        .duration_since(web_time::SystemTime::UNIX_EPOCH)
        .map_or(0, |d| d.as_millis())
}

/// Where a candidate file came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntakeSource {
    /// The file picker dialog.
    Picker,
    /// A drag-and-drop onto the upload area.
    Drop,
}

impl IntakeSource {
    /// Message shown when a candidate from this source is rejected.
    #[must_use]
    pub const fn rejection_message(self) -> &'static str {
        match self {
            Self::Picker => "Please select a valid image file (JPG, PNG, GIF)",
            Self::Drop => "Please drop a valid image file",
        }
    }
}

/// One of the two `<img>` elements the controller populates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageSlot {
    /// The local preview of the selected file.
    Source,
    /// The generated result.
    Generated,
}

impl ImageSlot {
    /// Message shown when the browser fails to render this image.
    #[must_use]
    pub const fn load_failure_message(self) -> &'static str {
        match self {
            Self::Source => "Failed to load the selected image",
            Self::Generated => "Failed to load the generated image",
        }
    }
}

/// Page regions the controller scrolls to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// The drop zone / picker.
    UploadArea,
    /// The preview, model selector, and result panel.
    GenerationPanel,
}

impl Anchor {
    /// DOM id of the anchored element.
    #[must_use]
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::UploadArea => "uploadArea",
            Self::GenerationPanel => "generationSection",
        }
    }

    /// Whether the element should be vertically centred when scrolled to.
    #[must_use]
    pub const fn centered(self) -> bool {
        matches!(self, Self::GenerationPanel)
    }
}

/// Interior-mutable storage for the [`Session`].
pub trait SessionCell {
    /// Run `f` with shared access to the session.
    fn read<R>(&self, f: impl FnOnce(&Session) -> R) -> R;

    /// Run `f` with exclusive access to the session.
    fn update<R>(&self, f: impl FnOnce(&mut Session) -> R) -> R;
}

impl SessionCell for RefCell<Session> {
    fn read<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
        f(&self.borrow())
    }

    fn update<R>(&self, f: impl FnOnce(&mut Session) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

impl<T: SessionCell + ?Sized> SessionCell for Rc<T> {
    fn read<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
        (**self).read(f)
    }

    fn update<R>(&self, f: impl FnOnce(&mut Session) -> R) -> R {
        (**self).update(f)
    }
}

/// Browser effects the controller needs.
pub trait Platform {
    /// Mint an object URL for in-memory image data.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the Blob or URL cannot be created.
    fn create_display_handle(
        &self,
        bytes: &[u8],
        media_type: MediaType,
    ) -> Result<DisplayHandle, PlatformError>;

    /// Release an object URL minted by [`create_display_handle`](Self::create_display_handle).
    fn revoke_display_handle(&self, handle: &DisplayHandle);

    /// Start a client-side save of `bytes` as `filename`.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the download could not be initiated.
    fn save(&self, bytes: &[u8], filename: &str, media_type: MediaType)
    -> Result<(), PlatformError>;

    /// Smoothly scroll `anchor` into view.
    fn scroll_into_view(&self, anchor: Anchor);

    /// Clear the file input so the same file can be chosen again.
    fn clear_file_input(&self);
}

/// What is sent to the generation endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Sent as the [`FILE_FIELD`] part.
    pub file: SelectedFile,
    /// Sent as the [`MODEL_FIELD`] part.
    pub model: ModelVariant,
}

/// The remote image-generation service.
#[allow(async_fn_in_trait)] // WASM is single-threaded; callers never need Send futures
pub trait ImageGenerator {
    /// POST `request` and return the response body.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Status`] for a non-success status and
    /// [`GenerateError::Transport`] if the request or body read fails.
    async fn generate(&self, request: &GenerationRequest) -> Result<Vec<u8>, GenerateError>;
}

/// Clears the loading state of one cycle when dropped, so the trigger
/// is restored on every exit path of [`Controller::generate`],
/// including when its future is dropped mid-flight.
struct LoadingGuard<'a, C: SessionCell> {
    session: &'a C,
    generation: u64,
}

impl<C: SessionCell> Drop for LoadingGuard<'_, C> {
    fn drop(&mut self) {
        let generation = self.generation;
        self.session.update(|s| s.finish_loading(generation));
    }
}

/// Single owner of the session state and its side effects.
///
/// Construct one per page session.
pub struct Controller<C, P, G> {
    session: C,
    platform: P,
    generator: G,
}

impl<C: SessionCell, P: Platform, G: ImageGenerator> Controller<C, P, G> {
    /// Create a controller over the given session storage and seams.
    pub const fn new(session: C, platform: P, generator: G) -> Self {
        Self {
            session,
            platform,
            generator,
        }
    }

    /// Session storage.
    pub const fn session(&self) -> &C {
        &self.session
    }

    /// Platform seam.
    pub const fn platform(&self) -> &P {
        &self.platform
    }

    /// Generator seam.
    pub const fn generator(&self) -> &G {
        &self.generator
    }

    /// Validate and accept a file from the picker or a drop.
    ///
    /// `None` means the event carried no file. A rejected candidate
    /// leaves the session untouched apart from the error banner.
    pub fn intake(&self, source: IntakeSource, candidate: Option<FileCandidate>) {
        if source == IntakeSource::Drop {
            self.set_dragging(false);
        }

        let file = candidate
            .ok_or(IntakeError::Missing)
            .and_then(SelectedFile::try_from_candidate);

        match file {
            Ok(file) => {
                info!(
                    ?source,
                    name = file.name(),
                    media_type = %file.media_type(),
                    bytes = file.len(),
                    "file accepted",
                );
                let retired = self.session.update(|s| s.accept_file(file));
                self.revoke(retired);
                self.platform.scroll_into_view(Anchor::GenerationPanel);
            }
            Err(err) => {
                warn!(?source, %err, "file rejected");
                self.notify(Severity::Error, source.rejection_message());
            }
        }
    }

    /// Report that an accepted-type file could not be read from disk.
    ///
    /// The session keeps its current file, if any.
    pub fn read_failed(&self, source: IntakeSource, reason: &str) {
        if source == IntakeSource::Drop {
            self.set_dragging(false);
        }
        warn!(?source, reason, "file could not be read");
        self.notify(Severity::Error, MSG_READ_FAILED);
    }

    /// Select a model by its wire value; unknown values select the default.
    pub fn choose_model(&self, value: &str) {
        let model = ModelVariant::from_value(value).unwrap_or_else(|| {
            debug!(value, "unknown model value, using default");
            ModelVariant::default()
        });
        self.session.update(|s| s.choose_model(model));
    }

    /// Send the selected file to the generation endpoint and display
    /// the result.
    ///
    /// Rejects (with a banner, and without a network call) when no file
    /// is selected or a generation is already in flight.
    #[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
    pub async fn generate(&self) {
        let ticket = match self.session.update(Session::begin_generation) {
            Ok(ticket) => ticket,
            Err(GenerationRejected::NoFile) => {
                warn!("generate requested without a selected file");
                self.notify(Severity::Error, MSG_NO_FILE);
                return;
            }
            Err(GenerationRejected::InProgress) => {
                debug!("generate requested while a generation is in flight");
                self.notify(Severity::Warning, MSG_IN_PROGRESS);
                return;
            }
        };
        let GenerationTicket {
            generation,
            file,
            model,
            retired,
        } = ticket;
        let _loading = LoadingGuard {
            session: &self.session,
            generation,
        };
        self.revoke(retired);

        info!(
            generation,
            name = file.name(),
            bytes = file.len(),
            model = model.value(),
            "generation started",
        );
        let request = GenerationRequest { file, model };
        let outcome = self.generator.generate(&request).await;

        if !self.session.read(|s| s.is_current(generation)) {
            info!(generation, "discarding result of superseded generation");
            return;
        }

        let outcome = outcome.and_then(|bytes| {
            let handle = self
                .platform
                .create_display_handle(&bytes, RESULT_MEDIA_TYPE)?;
            Ok((bytes, handle))
        });

        match outcome {
            Ok((bytes, handle)) => {
                let len = bytes.len();
                let stored = self
                    .session
                    .update(|s| s.complete_generation(generation, bytes, handle));
                match stored {
                    Ok(()) => {
                        info!(generation, bytes = len, "generation succeeded");
                        self.notify(Severity::Success, MSG_GENERATED);
                    }
                    Err(orphan) => self.platform.revoke_display_handle(&orphan),
                }
            }
            Err(err) => {
                warn!(generation, %err, "generation failed");
                self.session.update(|s| s.fail_generation(generation));
                self.notify(Severity::Error, MSG_GENERATE_FAILED);
            }
        }
    }

    /// Save the generated result as `generated-image-<millis>.png`.
    pub fn download(&self) {
        let Some(bytes) = self.session.read(Session::download_payload) else {
            warn!("download requested without a generated result");
            self.notify(Severity::Error, MSG_NO_RESULT);
            return;
        };

        let filename = download_filename(now_millis());
        match self.platform.save(&bytes, &filename, RESULT_MEDIA_TYPE) {
            Ok(()) => {
                info!(filename = filename.as_str(), bytes = bytes.len(), "download started");
                self.notify(Severity::Success, MSG_DOWNLOADED);
            }
            Err(err) => {
                warn!(filename = filename.as_str(), %err, "download failed");
                self.notify(Severity::Error, MSG_DOWNLOAD_FAILED);
            }
        }
    }

    /// Drop the selected file and result and return to the upload area.
    pub fn reset(&self) {
        let retired = self.session.update(Session::reset);
        self.revoke(retired);
        self.platform.clear_file_input();
        self.platform.scroll_into_view(Anchor::UploadArea);
        info!("interface reset");
    }

    /// Report that the browser could not render one of the images.
    pub fn image_failed(&self, slot: ImageSlot) {
        warn!(?slot, "image failed to load");
        self.notify(Severity::Error, slot.load_failure_message());
    }

    /// Set or clear the drop-zone highlight.
    pub fn set_dragging(&self, dragging: bool) {
        self.session.update(|s| s.set_dragging(dragging));
    }

    /// Show a banner, replacing the current one.
    pub fn notify(&self, severity: Severity, message: &str) -> NotificationId {
        self.session.update(|s| s.notify(severity, message))
    }

    /// Start the exit animation of banner `id` if it is still shown.
    pub fn retire_notification(&self, id: NotificationId) {
        self.session.update(|s| s.retire_notification(id));
    }

    /// Remove banner `id` if it is still shown.
    pub fn dismiss_notification(&self, id: NotificationId) {
        self.session.update(|s| s.dismiss_notification(id));
    }

    fn revoke(&self, handle: Option<DisplayHandle>) {
        if let Some(handle) = handle {
            debug!(url = handle.as_str(), "revoking display handle");
            self.platform.revoke_display_handle(&handle);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn download_filename_pattern() {
        assert_eq!(
            download_filename(1_700_000_000_123),
            "generated-image-1700000000123.png"
        );
    }

    #[test]
    fn now_millis_is_after_2020() {
        assert!(now_millis() > 1_577_836_800_000);
    }

    #[test]
    fn multipart_field_names() {
        assert_eq!(FILE_FIELD, "file");
        assert_eq!(MODEL_FIELD, "model_type");
    }

    #[test]
    fn anchors_point_at_distinct_elements() {
        assert_ne!(
            Anchor::UploadArea.element_id(),
            Anchor::GenerationPanel.element_id()
        );
        assert!(Anchor::GenerationPanel.centered());
        assert!(!Anchor::UploadArea.centered());
    }

    #[test]
    fn rejection_messages_depend_on_source() {
        assert_eq!(
            IntakeSource::Picker.rejection_message(),
            "Please select a valid image file (JPG, PNG, GIF)"
        );
        assert_eq!(
            IntakeSource::Drop.rejection_message(),
            "Please drop a valid image file"
        );
    }

    #[test]
    fn loading_guard_clears_loading_on_drop() {
        let cell = RefCell::new(Session::default());
        let file = SelectedFile::try_from_candidate(FileCandidate {
            name: "a.gif".into(),
            declared_type: "image/gif".into(),
            bytes: vec![b'G', b'I', b'F'],
        })
        .unwrap();
        cell.update(|s| s.accept_file(file));
        let ticket = cell.update(Session::begin_generation).unwrap();
        {
            let _guard = LoadingGuard {
                session: &cell,
                generation: ticket.generation,
            };
            assert!(cell.read(Session::is_loading));
        }
        assert!(!cell.read(Session::is_loading));
    }
}
