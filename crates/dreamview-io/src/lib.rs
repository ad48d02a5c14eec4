//! dreamview-io: Browser I/O and Dioxus component library.
//!
//! Implements the `dreamview-core` seams on top of the Web API (Blob
//! object URLs, anchor-click downloads, multipart `fetch`, scrolling)
//! and provides the UI components of the dreamview web application.

pub mod blob;
pub mod components;
pub mod config;
pub mod download;
pub mod fetch;
pub mod platform;
pub mod session;

pub use components::{FileUpload, GenerationPanel, ModelSelect, NotificationBanner};
pub use fetch::HttpGenerator;
pub use platform::BrowserPlatform;
pub use session::SignalSession;

/// The controller as wired in the browser.
pub type AppController =
    dreamview_core::Controller<SignalSession, BrowserPlatform, HttpGenerator>;
