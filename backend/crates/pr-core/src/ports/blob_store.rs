use async_trait::async_trait;

/// Binary storage for uploaded pictures, addressed by a name derived from
/// the owning record.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Write `bytes` under `name`, replacing any previous content.
    ///
    /// Either the whole payload is stored or an error is returned.
    async fn write(&self, name: &str, bytes: &[u8]) -> std::io::Result<()>;
}
