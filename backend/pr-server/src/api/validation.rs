use crate::{ApiError, ApiResult};

pub const MAX_NAME_LENGTH: usize = 100;
pub const MIN_PASSWORD_LENGTH: usize = 5;
const MAX_EMAIL_LENGTH: usize = 254;

/// Shape checks applied to request bodies before they reach the record manager
pub struct RequestValidator;

impl RequestValidator {
    #[track_caller]
    pub fn validate_name(name: &str) -> ApiResult<()> {
        if name.trim().is_empty() {
            return Err(ApiError::validation("name cannot be empty", "name"));
        }

        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(ApiError::validation(
                format!("name must not exceed {} characters", MAX_NAME_LENGTH),
                "name",
            ));
        }

        Ok(())
    }

    /// Structural check only: one `@`, non-empty local part, dotted domain, no whitespace.
    #[track_caller]
    pub fn validate_email(email: &str) -> ApiResult<()> {
        let invalid = || ApiError::validation("email must be a valid email address", "email");

        if email.len() > MAX_EMAIL_LENGTH || email.chars().any(char::is_whitespace) {
            return Err(invalid());
        }

        let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
        if local.is_empty() || domain.contains('@') {
            return Err(invalid());
        }

        let labels: Vec<&str> = domain.split('.').collect();
        if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
            return Err(invalid());
        }

        Ok(())
    }

    #[track_caller]
    pub fn validate_password(password: &str) -> ApiResult<()> {
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ApiError::validation(
                format!(
                    "password must be at least {} characters",
                    MIN_PASSWORD_LENGTH
                ),
                "password",
            ));
        }

        Ok(())
    }
}
