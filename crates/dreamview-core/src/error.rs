//! Error types shared by the controller and its I/O seams.

/// Reasons a candidate file is refused at intake.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    /// The picker or drop delivered no file.
    #[error("no file provided")]
    Missing,

    /// The declared media type is outside the JPEG/PNG/GIF/WebP allow-set.
    #[error("unsupported media type: {0:?}")]
    UnsupportedType(String),
}

/// Failures of a single generation round trip.
///
/// The UI reports all of these with the same message; the variants
/// exist for logging.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    /// The endpoint answered with a non-success HTTP status.
    #[error("generation endpoint returned HTTP {0}")]
    Status(u16),

    /// The request could not be sent or the body could not be read.
    #[error("generation request failed: {0}")]
    Transport(String),

    /// The result bytes arrived but could not be turned into a display handle.
    #[error("could not display generated image: {0}")]
    Handle(#[from] PlatformError),
}

/// A browser API call made on behalf of the controller failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlatformError {
    /// A browser API call returned an error or a required object was missing.
    #[error("browser API error: {0}")]
    JsError(String),
}
