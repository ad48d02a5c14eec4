//! Accepted image media types and the selected source file.

use std::fmt;
use std::rc::Rc;

use base64::Engine;

use crate::error::IntakeError;

/// An image media type the generation endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    /// `image/jpeg` (browsers occasionally report `image/jpg`).
    Jpeg,
    /// `image/png`.
    Png,
    /// `image/gif`.
    Gif,
    /// `image/webp`.
    Webp,
}

impl MediaType {
    /// Every accepted media type.
    pub const ALL: [Self; 4] = [Self::Jpeg, Self::Png, Self::Gif, Self::Webp];

    /// Parse a declared MIME type, returning `None` when it is outside
    /// the allow-set.
    ///
    /// Matching ignores ASCII case and any `;` parameters.
    #[must_use]
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or_default().trim();
        let lower = essence.to_ascii_lowercase();
        match lower.as_str() {
            "image/jpeg" | "image/jpg" => Some(Self::Jpeg),
            "image/png" => Some(Self::Png),
            "image/gif" => Some(Self::Gif),
            "image/webp" => Some(Self::Webp),
            _ => None,
        }
    }

    /// Canonical MIME string.
    #[must_use]
    pub const fn mime(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Gif => "image/gif",
            Self::Webp => "image/webp",
        }
    }

    /// Short label for user-facing hints.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Jpeg => "JPEG",
            Self::Png => "PNG",
            Self::Gif => "GIF",
            Self::Webp => "WebP",
        }
    }

    /// Comma-separated MIME list for an `<input accept>` attribute.
    #[must_use]
    pub fn accept_attribute() -> String {
        Self::ALL.map(Self::mime).join(",")
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime())
    }
}

/// A file as delivered by the picker or a drop, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    /// Original filename.
    pub name: String,
    /// MIME type as declared by the browser (may be empty).
    pub declared_type: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

/// The validated source image awaiting submission.
///
/// The payload is reference-counted so a generation request can hold
/// it across an `.await` without copying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    name: String,
    media_type: MediaType,
    bytes: Rc<[u8]>,
}

impl SelectedFile {
    /// Validate a candidate against the media type allow-set.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::UnsupportedType`] when the declared type is
    /// not JPEG, PNG, GIF, or WebP.
    pub fn try_from_candidate(candidate: FileCandidate) -> Result<Self, IntakeError> {
        let media_type = MediaType::from_mime(&candidate.declared_type)
            .ok_or(IntakeError::UnsupportedType(candidate.declared_type))?;
        Ok(Self {
            name: candidate.name,
            media_type,
            bytes: candidate.bytes.into(),
        })
    }

    /// Original filename.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Validated media type.
    #[must_use]
    pub const fn media_type(&self) -> MediaType {
        self.media_type
    }

    /// Raw file contents.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Size of the payload in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` for a zero-byte file.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Encode the file as a `data:` URI for the local preview.
    #[must_use]
    pub fn data_uri(&self) -> String {
        let payload = base64::engine::general_purpose::STANDARD.encode(&self.bytes);
        format!("data:{};base64,{payload}", self.media_type.mime())
    }
}
