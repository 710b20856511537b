pub const DEFAULT_MIN_PICTURE_BYTES: u64 = 1024;
pub const DEFAULT_PICTURE_EXTENSION: &str = "png";

/// Upload gating and naming rules for profile pictures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPolicy {
    /// Payloads strictly smaller than this are rejected
    pub min_size_bytes: u64,
    /// Extension of the stored file, without the leading dot
    pub extension: String,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            min_size_bytes: DEFAULT_MIN_PICTURE_BYTES,
            extension: String::from(DEFAULT_PICTURE_EXTENSION),
        }
    }
}

impl UploadPolicy {
    pub fn new(min_size_bytes: u64, extension: impl Into<String>) -> Self {
        Self {
            min_size_bytes,
            extension: extension.into(),
        }
    }

    pub fn accepts_size(&self, size: u64) -> bool {
        size >= self.min_size_bytes
    }

    /// Storage name for a person's picture. Depends only on the id.
    pub fn filename_for(&self, person_id: i64) -> String {
        format!("{}.{}", person_id, self.extension)
    }
}
