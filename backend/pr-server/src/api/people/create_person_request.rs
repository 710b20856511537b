use crate::{ApiResult, RequestValidator};

use pr_core::PersonRegistration;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreatePersonRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl CreatePersonRequest {
    /// Check field shape and hand over to the record manager
    pub fn validate(self) -> ApiResult<PersonRegistration> {
        RequestValidator::validate_name(&self.name)?;
        RequestValidator::validate_email(&self.email)?;
        RequestValidator::validate_password(&self.password)?;

        Ok(PersonRegistration {
            name: self.name,
            email: self.email,
            password: self.password,
        })
    }
}
