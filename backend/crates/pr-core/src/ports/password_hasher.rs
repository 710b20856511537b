use crate::ErrorLocation;

use std::panic::Location;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HashingError {
    #[error("Password hashing failed: {message} {location}")]
    Failed {
        message: String,
        location: ErrorLocation,
    },
}

impl HashingError {
    #[track_caller]
    pub fn failed<S: Into<String>>(message: S) -> Self {
        Self::Failed {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// One-way password digest.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, plaintext: &str) -> Result<String, HashingError>;
}
