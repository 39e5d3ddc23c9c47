//! JWT-based authentication extractor for Axum handlers.

use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use formgen_core::error::CoreError;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::gateway::CallerIdentity;
use crate::state::AppState;

/// Authenticated user extracted from a JWT Bearer token in the `Authorization` header.
///
/// As a plain extractor, a missing or invalid token rejects the request with
/// 401. As `Option<AuthUser>`, a missing header yields `None` while a present
/// but invalid token still rejects.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The opaque user id (from `claims.sub`).
    pub user_id: String,
}

impl AuthUser {
    pub fn identity(&self) -> CallerIdentity {
        CallerIdentity {
            user_id: self.user_id.clone(),
        }
    }

    fn from_header(header: &str, state: &AppState) -> Result<Self, AppError> {
        let token = header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthenticated(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthenticated(
                "Invalid or expired token".into(),
            ))
        })?;

        if claims.sub.trim().is_empty() {
            return Err(AppError::Core(CoreError::Unauthenticated(
                "Token carries no user identity".into(),
            )));
        }

        Ok(AuthUser {
            user_id: claims.sub,
        })
    }
}

fn authorization_header(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = authorization_header(parts).ok_or_else(|| {
            AppError::Core(CoreError::Unauthenticated(
                "Missing Authorization header".into(),
            ))
        })?;
        Self::from_header(header, state)
    }
}

impl OptionalFromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Option<Self>, Self::Rejection> {
        match authorization_header(parts) {
            Some(header) => Self::from_header(header, state).map(Some),
            None => Ok(None),
        }
    }
}
