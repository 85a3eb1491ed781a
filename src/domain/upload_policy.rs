use super::ContentType;

pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Intake rules applied before a file is stored or any network call is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadPolicy {
    pub max_size_bytes: u64,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_size_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl UploadPolicy {
    pub fn new(max_size_bytes: u64) -> Self {
        Self { max_size_bytes }
    }

    pub fn validate(&self, mime: &str, size_bytes: u64) -> Result<ContentType, UploadRejection> {
        let content_type = ContentType::from_mime(mime)
            .ok_or_else(|| UploadRejection::UnsupportedType(mime.to_string()))?;

        if size_bytes == 0 {
            return Err(UploadRejection::Empty);
        }

        if size_bytes > self.max_size_bytes {
            return Err(UploadRejection::TooLarge {
                size_bytes,
                max_size_bytes: self.max_size_bytes,
            });
        }

        Ok(content_type)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadRejection {
    #[error("invalid file type {0}: please upload PDF, DOC, DOCX, or TXT files")]
    UnsupportedType(String),
    #[error("file too large: {size_bytes} bytes exceeds the {max_size_bytes} byte limit")]
    TooLarge {
        size_bytes: u64,
        max_size_bytes: u64,
    },
    #[error("file is empty")]
    Empty,
}
