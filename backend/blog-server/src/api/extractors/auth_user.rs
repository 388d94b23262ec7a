//! Axum extractor for bearer-token authentication

use crate::{ApiError, AppState};

use blog_auth::{Claims, extract_bearer};

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// The caller of a protected route.
///
/// Holds the verified token claims, or `None` when authentication is
/// disabled and every caller is accepted.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Option<Claims>);

impl AuthUser {
    /// Token subject, or `anonymous` when auth is off.
    pub fn subject(&self) -> &str {
        self.0
            .as_ref()
            .map(|claims| claims.sub.as_str())
            .unwrap_or("anonymous")
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Some(validator) = state.jwt_validator.as_ref() else {
                return Ok(AuthUser(None));
            };

            let header = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok());
            let token = extract_bearer(header)?;
            let claims = validator.validate(token)?;

            log::debug!("Authenticated request from {}", claims.sub);
            Ok(AuthUser(Some(claims)))
        }
    }
}
