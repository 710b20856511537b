use crate::{ErrorLocation, HashingError, RepositoryError};

use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    /// A uniqueness rule was violated while creating a person.
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// The caller is authenticated but may not touch the targeted person.
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    #[error("Repository error: {source} {location}")]
    Repository {
        #[source]
        source: RepositoryError,
        location: ErrorLocation,
    },

    #[error("Storage error writing {path}: {source} {location}")]
    Storage {
        path: String,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Hashing error: {source} {location}")]
    Hashing {
        #[source]
        source: HashingError,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn conflict<S: Into<String>>(message: S) -> Self {
        CoreError::Conflict {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        CoreError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn forbidden<S: Into<String>>(message: S) -> Self {
        CoreError::Forbidden {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        CoreError::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Stable machine-readable code, one per error kind.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Conflict { .. } => "CONFLICT",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Forbidden { .. } => "FORBIDDEN",
            Self::BadRequest { .. } => "BAD_REQUEST",
            Self::Repository { .. } | Self::Storage { .. } | Self::Hashing { .. } => {
                "INTERNAL_ERROR"
            }
        }
    }
}

impl From<RepositoryError> for CoreError {
    #[track_caller]
    fn from(source: RepositoryError) -> Self {
        Self::Repository {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<HashingError> for CoreError {
    #[track_caller]
    fn from(source: HashingError) -> Self {
        Self::Hashing {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
