//! Upload validation
//!
//! Size and media-type gating for uploaded contract documents. Runs before
//! any encoding or network work; the first violated rule decides the error.

use crate::error::ValidationError;

/// Maximum accepted upload size: 10 MiB.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// An uploaded contract document, owned for the duration of one request.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Original file name, when the caller knows it.
    pub file_name: Option<String>,

    /// Declared media type (e.g. `image/jpeg`, `application/pdf`). May be
    /// empty; the pipeline then falls back to content sniffing.
    pub media_type: String,

    /// Raw file content.
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: None,
            media_type: media_type.into(),
            bytes,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    /// Size of the upload in bytes.
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Whether a declared media type is accepted for analysis: any `image/*`
/// type, or exactly `application/pdf`.
pub fn is_supported_media_type(media_type: &str) -> bool {
    media_type.starts_with("image/") || media_type == "application/pdf"
}

/// Validate an upload before any expensive work.
///
/// Rules, in order: presence, size (strictly greater than
/// [`MAX_UPLOAD_BYTES`] fails), declared media type.
pub fn validate(file: Option<&UploadedFile>) -> Result<&UploadedFile, ValidationError> {
    let file = file.ok_or(ValidationError::MissingFile)?;

    if file.size() > MAX_UPLOAD_BYTES {
        return Err(ValidationError::FileTooLarge);
    }

    if !is_supported_media_type(&file.media_type) {
        return Err(ValidationError::UnsupportedType);
    }

    Ok(file)
}
