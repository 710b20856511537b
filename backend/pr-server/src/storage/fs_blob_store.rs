use pr_core::BlobStore;

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::{debug, warn};
use uuid::Uuid;

/// Stores blobs as files in one flat directory.
///
/// Each write lands in a hidden temporary sibling and is renamed over the
/// target, so readers never observe a partially written picture.
#[derive(Debug, Clone)]
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the root directory if needed
    pub async fn ensure_root(&self) -> io::Result<()> {
        tokio::fs::create_dir_all(&self.root).await
    }

    fn resolve(&self, name: &str) -> io::Result<PathBuf> {
        // Dotfiles are reserved for in-flight temporaries
        let is_plain = !name.is_empty() && !name.starts_with('.') && !name.contains(['/', '\\']);
        if !is_plain {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid blob name: {name:?}"),
            ));
        }
        Ok(self.root.join(name))
    }
}

#[async_trait]
impl BlobStore for FsBlobStore {
    async fn write(&self, name: &str, bytes: &[u8]) -> io::Result<()> {
        let target = self.resolve(name)?;
        let temp = self.root.join(format!(".{}.tmp", Uuid::new_v4()));

        if let Err(e) = tokio::fs::write(&temp, bytes).await {
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(e);
        }

        if let Err(e) = tokio::fs::rename(&temp, &target).await {
            warn!("Failed to move {} into place: {}", target.display(), e);
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(e);
        }

        debug!("Wrote {} bytes to {}", bytes.len(), target.display());
        Ok(())
    }
}
