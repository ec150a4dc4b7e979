use std::io::Cursor;

use image::{DynamicImage, ImageFormat};

use crate::domain::{
    common::entities::app_errors::CoreError,
    image_intake::entities::{CANONICAL_MIME_TYPE, CanonicalImage},
};

/// Decodes a user-supplied byte stream. The accepted-extension whitelist at
/// the HTTP boundary is advisory; this is the authoritative validation.
pub fn decode(bytes: &[u8]) -> Result<DynamicImage, CoreError> {
    image::load_from_memory(bytes).map_err(|e| CoreError::ImageDecodeError(e.to_string()))
}

/// Normalizes a decoded image to three-channel RGB and re-encodes it as PNG.
/// Canonicalizing an already-canonical image reproduces identical bytes.
pub fn to_canonical(image: DynamicImage) -> Result<CanonicalImage, CoreError> {
    let rgb = match image {
        DynamicImage::ImageRgb8(buffer) => buffer,
        other => other.to_rgb8(),
    };
    let (width, height) = rgb.dimensions();

    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(rgb)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| CoreError::ImageDecodeError(format!("re-encode failed: {e}")))?;

    Ok(CanonicalImage {
        bytes,
        mime_type: CANONICAL_MIME_TYPE.to_string(),
        width,
        height,
    })
}

/// Full intake: decode, normalize, encode.
pub fn intake(bytes: &[u8]) -> Result<CanonicalImage, CoreError> {
    to_canonical(decode(bytes)?)
}
