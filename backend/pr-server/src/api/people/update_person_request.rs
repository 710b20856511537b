use crate::{ApiError, ApiResult, RequestValidator};

use pr_core::PersonChanges;

use serde::Deserialize;

/// Partial update. Absent fields are left untouched; email cannot be changed.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdatePersonRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl UpdatePersonRequest {
    pub fn validate(self) -> ApiResult<PersonChanges> {
        if let Some(name) = &self.name {
            RequestValidator::validate_name(name)?;
        }
        if let Some(password) = &self.password {
            RequestValidator::validate_password(password)?;
        }

        let changes = PersonChanges {
            name: self.name,
            password: self.password,
        };
        if changes.is_empty() {
            return Err(ApiError::bad_request(
                "at least one of name or password is required",
            ));
        }

        Ok(changes)
    }
}
