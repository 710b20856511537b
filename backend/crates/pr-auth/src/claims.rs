use crate::{AuthError, Result as AuthErrorResult};

use pr_core::Caller;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// JWT claims. `sub` carries the numeric person id as a string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    #[serde(default)]
    pub iat: i64,
}

impl Claims {
    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        self.subject_id().map(|_| ())
    }

    /// Parsed `sub`. Must be a positive integer.
    #[track_caller]
    pub fn subject_id(&self) -> AuthErrorResult<i64> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        match self.sub.parse::<i64>() {
            Ok(id) if id > 0 => Ok(id),
            _ => Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: format!("sub is not a person id: {}", self.sub),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    #[track_caller]
    pub fn caller(&self) -> AuthErrorResult<Caller> {
        self.subject_id().map(Caller::new)
    }
}
