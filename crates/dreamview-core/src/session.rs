//! Session state and its transitions.
//!
//! A [`Session`] is the single owner of the selected file, the generated
//! result, and every presentation flag the UI renders from. Transitions
//! are plain methods with no side effects; anything that must happen in
//! the browser (revoking an object URL, scrolling) is handed back to the
//! caller as a return value.
//!
//! ```text
//! Idle ──intake──▶ FileSelected ──generate──▶ Generating ──▶ Generated
//!   ▲                   ▲                          │
//!   │                   └──────────intake──────────┤
//!   └────────reset──────────────── (any) ──────────┴──▶ Failed
//! ```

use std::rc::Rc;

use crate::media::SelectedFile;
use crate::model::ModelVariant;
use crate::notification::{Notification, NotificationId, Severity};

/// Coarse workflow state.
///
/// Choosing a model is allowed in every state and is not tracked here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No file selected.
    Idle,
    /// A file is selected and no generation has run for it yet.
    FileSelected,
    /// A generation request is in flight.
    Generating,
    /// The last generation succeeded; its result is available.
    Generated,
    /// The last generation failed.
    Failed,
}

/// A revocable object URL pointing at in-memory image data.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayHandle(String);

impl DisplayHandle {
    /// Wrap a URL minted by the platform.
    #[must_use]
    pub const fn new(url: String) -> Self {
        Self(url)
    }

    /// The URL, suitable for an `<img src>`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Image bytes returned by the service plus their display handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedResult {
    bytes: Rc<[u8]>,
    handle: DisplayHandle,
}

impl GeneratedResult {
    /// Raw image bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Handle the result image is displayed through.
    #[must_use]
    pub const fn handle(&self) -> &DisplayHandle {
        &self.handle
    }
}

/// Why a generation could not start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GenerationRejected {
    NoFile,
    InProgress,
}

/// Everything a generation cycle needs once it has started.
#[derive(Debug)]
pub(crate) struct GenerationTicket {
    pub(crate) generation: u64,
    pub(crate) file: SelectedFile,
    pub(crate) model: ModelVariant,
    /// Handle of the previous result, to be revoked by the caller.
    pub(crate) retired: Option<DisplayHandle>,
}

/// In-memory state of one page session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    file: Option<SelectedFile>,
    preview_uri: Option<String>,
    result: Option<GeneratedResult>,
    model: ModelVariant,
    phase: Phase,
    loading: bool,
    success_cue: bool,
    dragging: bool,
    /// Bumped by every intake, reset, and generation start so results of
    /// superseded cycles can be recognised and dropped.
    generation: u64,
    notification: Option<Notification>,
    next_notification: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ModelVariant::default())
    }
}

impl Session {
    /// An idle session with `model` preselected.
    #[must_use]
    pub const fn new(model: ModelVariant) -> Self {
        Self {
            file: None,
            preview_uri: None,
            result: None,
            model,
            phase: Phase::Idle,
            loading: false,
            success_cue: false,
            dragging: false,
            generation: 0,
            notification: None,
            next_notification: 0,
        }
    }

    // --- Queries ---

    /// Current workflow phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// The selected source image, if any.
    #[must_use]
    pub const fn selected_file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    /// The current generated result, if any.
    #[must_use]
    pub const fn result(&self) -> Option<&GeneratedResult> {
        self.result.as_ref()
    }

    /// Chosen model variant.
    #[must_use]
    pub const fn model(&self) -> ModelVariant {
        self.model
    }

    /// `data:` URI of the source preview.
    #[must_use]
    pub fn preview_uri(&self) -> Option<&str> {
        self.preview_uri.as_deref()
    }

    /// Object URL of the generated image.
    #[must_use]
    pub fn result_uri(&self) -> Option<&str> {
        self.result.as_ref().map(|r| r.handle.as_str())
    }

    /// Whether the generation panel is shown.
    #[must_use]
    pub const fn panel_visible(&self) -> bool {
        self.file.is_some()
    }

    /// Whether the spinner is shown and the trigger disabled.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the generate trigger accepts clicks.
    #[must_use]
    pub const fn generate_enabled(&self) -> bool {
        !self.loading
    }

    /// Whether the result image is shown.
    #[must_use]
    pub const fn result_visible(&self) -> bool {
        self.result.is_some()
    }

    /// Whether the download action is shown.
    #[must_use]
    pub const fn download_visible(&self) -> bool {
        self.result.is_some()
    }

    /// Whether the result image plays its success animation.
    #[must_use]
    pub const fn success_cue(&self) -> bool {
        self.success_cue
    }

    /// Whether a drag is hovering over the drop zone.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// The banner on screen, if any.
    #[must_use]
    pub const fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Counter identifying the most recent cycle.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether `generation` is still the most recent cycle.
    #[must_use]
    pub const fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Bytes to save on download.
    #[must_use]
    pub fn download_payload(&self) -> Option<Rc<[u8]>> {
        self.result.as_ref().map(|r| Rc::clone(&r.bytes))
    }

    // --- Transitions ---

    /// Make `file` the selected file and clear prior generation output.
    ///
    /// Returns the previous result's handle, which the caller must revoke.
    pub fn accept_file(&mut self, file: SelectedFile) -> Option<DisplayHandle> {
        self.preview_uri = Some(file.data_uri());
        self.file = Some(file);
        self.phase = Phase::FileSelected;
        self.clear_generation_state()
    }

    /// Select a model variant.
    pub const fn choose_model(&mut self, model: ModelVariant) {
        self.model = model;
    }

    /// Set or clear the drop-zone highlight.
    pub const fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    /// Return to [`Phase::Idle`].
    ///
    /// Returns the previous result's handle, which the caller must revoke.
    pub fn reset(&mut self) -> Option<DisplayHandle> {
        self.file = None;
        self.preview_uri = None;
        self.dragging = false;
        self.phase = Phase::Idle;
        self.clear_generation_state()
    }

    pub(crate) fn begin_generation(&mut self) -> Result<GenerationTicket, GenerationRejected> {
        if self.loading {
            return Err(GenerationRejected::InProgress);
        }
        let file = self.file.clone().ok_or(GenerationRejected::NoFile)?;
        self.generation += 1;
        self.loading = true;
        self.success_cue = false;
        self.phase = Phase::Generating;
        Ok(GenerationTicket {
            generation: self.generation,
            file,
            model: self.model,
            retired: self.result.take().map(|r| r.handle),
        })
    }

    /// Store a successful result.
    ///
    /// Hands `handle` back when the cycle was superseded, so the caller
    /// can revoke it.
    pub(crate) fn complete_generation(
        &mut self,
        generation: u64,
        bytes: Vec<u8>,
        handle: DisplayHandle,
    ) -> Result<(), DisplayHandle> {
        if !self.is_current(generation) {
            return Err(handle);
        }
        self.result = Some(GeneratedResult {
            bytes: bytes.into(),
            handle,
        });
        self.success_cue = true;
        self.phase = Phase::Generated;
        Ok(())
    }

    /// Record a failed cycle. Returns `false` if it was superseded.
    pub(crate) const fn fail_generation(&mut self, generation: u64) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.phase = Phase::Failed;
        true
    }

    /// Leave the loading state of `generation`.
    ///
    /// A cycle that never reached [`complete_generation`] or
    /// [`fail_generation`] (its future was dropped) ends as failed.
    ///
    /// [`complete_generation`]: Self::complete_generation
    /// [`fail_generation`]: Self::fail_generation
    pub(crate) fn finish_loading(&mut self, generation: u64) {
        if !self.is_current(generation) {
            return;
        }
        self.loading = false;
        if self.phase == Phase::Generating {
            self.phase = Phase::Failed;
        }
    }

    fn clear_generation_state(&mut self) -> Option<DisplayHandle> {
        self.generation += 1;
        self.loading = false;
        self.success_cue = false;
        self.result.take().map(|r| r.handle)
    }

    // --- Notifications ---

    /// Show a banner, replacing any banner already on screen.
    pub fn notify(&mut self, severity: Severity, message: impl Into<String>) -> NotificationId {
        self.next_notification += 1;
        let id = NotificationId::new(self.next_notification);
        self.notification = Some(Notification::new(id, severity, message.into()));
        id
    }

    /// Start the exit animation of banner `id`.
    ///
    /// Returns `false` if `id` is no longer on screen.
    pub fn retire_notification(&mut self, id: NotificationId) -> bool {
        match self.notification.as_mut() {
            Some(n) if n.id() == id => {
                n.start_leaving();
                true
            }
            _ => false,
        }
    }

    /// Remove banner `id`. Returns `false` if it is no longer on screen.
    pub fn dismiss_notification(&mut self, id: NotificationId) -> bool {
        if self.notification.as_ref().is_some_and(|n| n.id() == id) {
            self.notification = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::media::FileCandidate;

    fn png(name: &str) -> SelectedFile {
        SelectedFile::try_from_candidate(FileCandidate {
            name: name.to_string(),
            declared_type: "image/png".to_string(),
            bytes: vec![0x89, b'P', b'N', b'G'],
        })
        .unwrap()
    }

    fn handle(url: &str) -> DisplayHandle {
        DisplayHandle::new(url.to_string())
    }

    #[test]
    fn new_session_is_idle() {
        let s = Session::default();
        assert_eq!(s.phase(), Phase::Idle);
        assert!(!s.panel_visible());
        assert!(!s.is_loading());
        assert!(s.generate_enabled());
        assert!(s.selected_file().is_none());
        assert!(s.result().is_none());
        assert_eq!(s.model(), ModelVariant::Inception);
    }

    #[test]
    fn accept_file_shows_panel_and_preview() {
        let mut s = Session::default();
        assert!(s.accept_file(png("photo.png")).is_none());
        assert_eq!(s.phase(), Phase::FileSelected);
        assert!(s.panel_visible());
        assert_eq!(s.preview_uri(), Some("data:image/png;base64,iVBORw=="));
        assert!(!s.result_visible());
        assert!(!s.download_visible());
    }

    #[test]
    fn begin_without_file_is_rejected() {
        let mut s = Session::default();
        assert_eq!(
            s.begin_generation().unwrap_err(),
            GenerationRejected::NoFile
        );
        assert!(!s.is_loading());
        assert_eq!(s.phase(), Phase::Idle);
    }

    #[test]
    fn begin_while_loading_is_rejected() {
        let mut s = Session::default();
        s.accept_file(png("a.png"));
        let ticket = s.begin_generation().unwrap();
        assert_eq!(
            s.begin_generation().unwrap_err(),
            GenerationRejected::InProgress
        );
        assert!(s.is_current(ticket.generation));
    }

    #[test]
    fn successful_cycle_stores_result() {
        let mut s = Session::default();
        s.accept_file(png("a.png"));
        s.choose_model(ModelVariant::Vgg16);
        let ticket = s.begin_generation().unwrap();
        assert_eq!(ticket.model, ModelVariant::Vgg16);
        assert_eq!(ticket.file.name(), "a.png");
        assert!(s.is_loading());
        assert!(!s.generate_enabled());

        s.complete_generation(ticket.generation, vec![1, 2], handle("blob:1"))
            .unwrap();
        s.finish_loading(ticket.generation);

        assert_eq!(s.phase(), Phase::Generated);
        assert!(!s.is_loading());
        assert!(s.download_visible());
        assert!(s.success_cue());
        assert_eq!(s.result_uri(), Some("blob:1"));
        assert_eq!(&*s.download_payload().unwrap(), &[1, 2]);
    }

    #[test]
    fn second_cycle_retires_previous_handle() {
        let mut s = Session::default();
        s.accept_file(png("a.png"));
        let first = s.begin_generation().unwrap();
        assert!(first.retired.is_none());
        s.complete_generation(first.generation, vec![1], handle("blob:1"))
            .unwrap();
        s.finish_loading(first.generation);

        let second = s.begin_generation().unwrap();
        assert_eq!(second.retired, Some(handle("blob:1")));
        assert!(!s.result_visible());
    }

    #[test]
    fn dropped_cycle_ends_failed() {
        let mut s = Session::default();
        s.accept_file(png("a.png"));
        let ticket = s.begin_generation().unwrap();
        s.finish_loading(ticket.generation);
        assert_eq!(s.phase(), Phase::Failed);
        assert!(!s.is_loading());
    }

    #[test]
    fn intake_supersedes_in_flight_cycle() {
        let mut s = Session::default();
        s.accept_file(png("a.png"));
        let ticket = s.begin_generation().unwrap();

        s.accept_file(png("b.png"));
        assert!(!s.is_loading());
        assert!(!s.is_current(ticket.generation));

        let returned = s
            .complete_generation(ticket.generation, vec![1], handle("blob:late"))
            .unwrap_err();
        assert_eq!(returned, handle("blob:late"));
        assert!(!s.fail_generation(ticket.generation));
        s.finish_loading(ticket.generation);

        assert_eq!(s.phase(), Phase::FileSelected);
        assert!(s.result().is_none());
        assert_eq!(s.selected_file().unwrap().name(), "b.png");
    }

    #[test]
    fn reset_returns_to_idle_and_hands_back_handle() {
        let mut s = Session::default();
        s.accept_file(png("a.png"));
        s.set_dragging(true);
        let ticket = s.begin_generation().unwrap();
        s.complete_generation(ticket.generation, vec![1], handle("blob:1"))
            .unwrap();
        s.finish_loading(ticket.generation);

        assert_eq!(s.reset(), Some(handle("blob:1")));
        assert_eq!(s.phase(), Phase::Idle);
        assert!(!s.panel_visible());
        assert!(!s.is_dragging());
        assert!(s.preview_uri().is_none());
        assert!(s.download_payload().is_none());
    }

    #[test]
    fn notify_replaces_current_banner() {
        let mut s = Session::default();
        let first = s.notify(Severity::Info, "one");
        let second = s.notify(Severity::Error, "two");
        assert_ne!(first, second);
        let n = s.notification().unwrap();
        assert_eq!(n.id(), second);
        assert_eq!(n.message(), "two");
        assert_eq!(n.severity(), Severity::Error);
    }

    #[test]
    fn stale_timer_does_not_touch_newer_banner() {
        let mut s = Session::default();
        let old = s.notify(Severity::Info, "old");
        let new = s.notify(Severity::Success, "new");

        assert!(!s.retire_notification(old));
        assert!(!s.dismiss_notification(old));
        assert!(!s.notification().unwrap().is_leaving());

        assert!(s.retire_notification(new));
        assert!(s.notification().unwrap().is_leaving());
        assert!(s.dismiss_notification(new));
        assert!(s.notification().is_none());
    }
}
