use bytes::Bytes;

/// A profile picture as received from the client.
#[derive(Debug, Clone)]
pub struct PictureUpload {
    pub data: Bytes,
    /// Client-side filename; informational only, never used for storage
    pub original_name: Option<String>,
    pub content_type: Option<String>,
}

impl PictureUpload {
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }
}
