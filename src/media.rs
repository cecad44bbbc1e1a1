//! Media preparation for model upload
//!
//! Resolves the media type actually sent to the model and keeps image
//! payloads within a sane size by downscaling oversized scans before they
//! are base64-encoded.

use std::borrow::Cow;
use std::io::Cursor;

use image::{DynamicImage, ImageFormat};

use crate::validation::UploadedFile;

/// Maximum image dimension (width or height) sent to the model.
const MAX_DIMENSION: u32 = 1600;

/// Detect a media type from magic bytes.
pub fn detect_media_type(data: &[u8]) -> Option<&'static str> {
    if data.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
        Some("image/png")
    } else if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some("image/jpeg")
    } else if data.starts_with(b"RIFF") && data.get(8..12) == Some(b"WEBP") {
        Some("image/webp")
    } else if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
        Some("image/gif")
    } else if data.starts_with(b"%PDF") {
        Some("application/pdf")
    } else {
        None
    }
}

/// Resolve the media type to send: the declared type when present, magic
/// bytes otherwise.
pub fn resolve_media_type(file: &UploadedFile) -> String {
    if !file.media_type.is_empty() {
        return file.media_type.clone();
    }
    detect_media_type(&file.bytes)
        .unwrap_or("application/octet-stream")
        .to_string()
}

/// Prepare upload bytes for the model.
///
/// Images whose longest edge exceeds [`MAX_DIMENSION`] are downscaled and
/// re-encoded as JPEG; everything else passes through untouched. Preparation
/// never fails the request: if the bytes do not decode as an image, the
/// original buffer is used as-is.
///
/// Returns the (possibly re-encoded) bytes and the media type describing
/// them.
pub fn prepare_for_upload(file: &UploadedFile) -> (Cow<'_, [u8]>, String) {
    let media_type = resolve_media_type(file);

    if !media_type.starts_with("image/") {
        return (Cow::Borrowed(&file.bytes), media_type);
    }

    let img = match image::load_from_memory(&file.bytes) {
        Ok(img) => img,
        Err(e) => {
            tracing::debug!(error = %e, "image decode failed, sending original bytes");
            return (Cow::Borrowed(&file.bytes), media_type);
        }
    };

    if img.width() <= MAX_DIMENSION && img.height() <= MAX_DIMENSION {
        return (Cow::Borrowed(&file.bytes), media_type);
    }

    match reencode_scaled(img) {
        Ok(buffer) => (Cow::Owned(buffer), "image/jpeg".to_string()),
        Err(e) => {
            tracing::debug!(error = %e, "image re-encode failed, sending original bytes");
            (Cow::Borrowed(&file.bytes), media_type)
        }
    }
}

fn reencode_scaled(img: DynamicImage) -> Result<Vec<u8>, image::ImageError> {
    let (width, height) = (img.width(), img.height());
    let scale = (MAX_DIMENSION as f32 / width.max(height) as f32).min(1.0);
    let new_width = (width as f32 * scale) as u32;
    let new_height = (height as f32 * scale) as u32;

    let scaled = img.resize(new_width, new_height, image::imageops::FilterType::Lanczos3);

    // JPEG cannot carry an alpha channel.
    let scaled = DynamicImage::ImageRgb8(scaled.to_rgb8());

    let mut buffer = Vec::new();
    let mut cursor = Cursor::new(&mut buffer);
    scaled.write_to(&mut cursor, ImageFormat::Jpeg)?;
    Ok(buffer)
}
