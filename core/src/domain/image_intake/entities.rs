use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The one wire encoding used for all outbound image data, independent of
/// the input format.
pub const CANONICAL_MIME_TYPE: &str = "image/png";

/// Where the submitted image came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ImageSource {
    Uploaded,
    Captured,
}

impl ImageSource {
    pub fn as_str(&self) -> &str {
        match self {
            ImageSource::Uploaded => "uploaded",
            ImageSource::Captured => "captured",
        }
    }
}

/// A normalized image ready for transmission: three-channel RGB pixels,
/// re-encoded as PNG regardless of what the user submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalImage {
    pub bytes: Vec<u8>,
    pub mime_type: String,
    pub width: u32,
    pub height: u32,
}
