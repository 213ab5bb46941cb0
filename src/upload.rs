//! File upload sentinels and limit checks
//!
//! Upload handlers reject files with one of the [`UploadError`] values below;
//! [`check_upload`] applies the size and extension limits before anything is
//! written to disk.

use crate::error::sentinel_catalogue;

sentinel_catalogue! {
    /// Sentinel errors returned by file upload handlers.
    pub enum UploadError {
        FileMissing => "file_missing", "no file was uploaded";
        EmptyFile => "empty_file", "uploaded file is empty";
        FileTooLarge => "file_too_large", "file exceeds the maximum upload size";
        UnsupportedFileType => "unsupported_file_type", "file type is not supported";
        InvalidFileName => "invalid_file_name", "file name is invalid";
        FileReadFailed => "file_read_failed", "failed to read the uploaded file";
        FileSaveFailed => "file_save_failed", "failed to save the uploaded file";
    }
}

/// 10 MiB
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

pub const DEFAULT_ALLOWED_EXTENSIONS: &[&str] = &["pdf", "png", "jpg", "jpeg", "csv", "xlsx"];

/// Size and type limits applied to a single uploaded file
#[derive(Debug, Clone, PartialEq)]
pub struct UploadLimits {
    pub max_bytes: u64,
    /// Lowercase extensions without the leading dot
    pub allowed_extensions: Vec<String>,
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            allowed_extensions: DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
        }
    }
}

/// Validate an uploaded file's name and size against `limits`.
pub fn check_upload(file_name: &str, size: u64, limits: &UploadLimits) -> Result<(), UploadError> {
    let name = file_name.trim();
    if name.is_empty() || name.contains('/') || name.contains('\\') || name == ".." {
        return Err(UploadError::InvalidFileName);
    }

    if size == 0 {
        return Err(UploadError::EmptyFile);
    }

    if size > limits.max_bytes {
        log::debug!(
            "Rejecting upload '{}': {} bytes exceeds limit of {}",
            name,
            size,
            limits.max_bytes
        );
        return Err(UploadError::FileTooLarge);
    }

    let extension = match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => ext.to_ascii_lowercase(),
        _ => return Err(UploadError::UnsupportedFileType),
    };

    if !limits
        .allowed_extensions
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(&extension))
    {
        return Err(UploadError::UnsupportedFileType);
    }

    Ok(())
}
