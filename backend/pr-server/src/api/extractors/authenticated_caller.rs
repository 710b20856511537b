//! Axum extractor for bearer-token authentication

use crate::{ApiError, AppState};

use pr_auth::bearer_token;
use pr_core::Caller;

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// The verified identity behind `Authorization: Bearer <jwt>`.
///
/// Rejects with 401 when the header is missing, uses another scheme, or
/// carries a token that fails validation.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedCaller(pub Caller);

impl FromRequestParts<AppState> for AuthenticatedCaller {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok());

            let token = bearer_token(header)?;
            let caller = state.jwt_validator.authenticate(token)?;

            log::debug!("Authenticated {}", caller);
            Ok(AuthenticatedCaller(caller))
        }
    }
}
