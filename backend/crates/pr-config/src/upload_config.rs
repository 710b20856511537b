use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_UPLOAD_DIRECTORY, DEFAULT_UPLOAD_EXTENSION,
    DEFAULT_UPLOAD_MAX_SIZE_BYTES, DEFAULT_UPLOAD_MIN_SIZE_BYTES,
};

use std::path::Path;

use serde::Deserialize;

/// Profile picture upload settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Smallest accepted payload, inclusive
    pub min_size_bytes: u64,
    /// Request body cap for the upload route
    pub max_size_bytes: u64,
    /// Extension given to every stored picture, without the dot
    pub extension: String,
    /// Relative to the config directory
    pub dir: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            min_size_bytes: DEFAULT_UPLOAD_MIN_SIZE_BYTES,
            max_size_bytes: DEFAULT_UPLOAD_MAX_SIZE_BYTES,
            extension: String::from(DEFAULT_UPLOAD_EXTENSION),
            dir: String::from(DEFAULT_UPLOAD_DIRECTORY),
        }
    }
}

impl UploadConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.extension.is_empty() || !self.extension.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return Err(ConfigError::upload(format!(
                "upload.extension must be alphanumeric, got '{}'",
                self.extension
            )));
        }

        if self.min_size_bytes > self.max_size_bytes {
            return Err(ConfigError::upload(format!(
                "upload.min_size_bytes ({}) cannot exceed upload.max_size_bytes ({})",
                self.min_size_bytes, self.max_size_bytes
            )));
        }

        if self.dir.is_empty() || Path::new(&self.dir).is_absolute() || self.dir.contains("..") {
            return Err(ConfigError::upload("upload.dir must be relative and cannot contain '..'"));
        }

        Ok(())
    }
}
