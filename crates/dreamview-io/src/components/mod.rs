//! Dioxus UI components for dreamview.
//!
//! Provides the upload drop zone, the model selector, the generation
//! panel (source preview, trigger, result, download), and the
//! notification banner.

mod generation_panel;
mod model_select;
mod notification;
mod upload;

pub use generation_panel::GenerationPanel;
pub use model_select::ModelSelect;
pub use notification::NotificationBanner;
pub use upload::{FILE_INPUT_ID, FileUpload};
