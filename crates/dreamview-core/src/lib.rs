//! dreamview-core: Upload, generate, and preview state machine (sans-IO).
//!
//! Owns the session state of the dreamview client: the selected source
//! image, the generated result and its display handle, the chosen model
//! variant, the loading flags, and the single visible notification.
//!
//! This crate has **no browser dependencies** -- every effect that
//! touches the page or the network goes through the [`Platform`] and
//! [`ImageGenerator`] seams, and session storage goes through
//! [`SessionCell`]. Browser implementations live in `dreamview-io`.

pub mod config;
pub mod controller;
pub mod error;
pub mod media;
pub mod model;
pub mod notification;
pub mod session;

pub use config::ClientConfig;
pub use controller::{
    Anchor, Controller, FILE_FIELD, GenerationRequest, ImageGenerator, ImageSlot, IntakeSource,
    MODEL_FIELD, Platform, SessionCell, download_filename,
};
pub use error::{GenerateError, IntakeError, PlatformError};
pub use media::{FileCandidate, MediaType, SelectedFile};
pub use model::ModelVariant;
pub use notification::{Notification, NotificationId, Severity};
pub use session::{DisplayHandle, GeneratedResult, Phase, Session};
