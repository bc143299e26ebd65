//! Authentication extractor
//!
//! Resolves the caller's identity from the `Authorization: Bearer` header
//! and hands it to handlers by value. No ambient or thread-local state is
//! involved: handlers that need the principal declare `AuthUser` as an
//! argument.

use crate::error::ApiError;
use crate::repositories::UserRepository;
use crate::state::AppState;
use axum::{
    extract::FromRef,
    http::{header::AUTHORIZATION, request::Parts},
};
use uuid::Uuid;

/// Authenticated user extracted from a verified bearer token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub email: String,
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Missing authorization header".to_string()))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::Unauthorized("Invalid authorization format".to_string()))?;

        // Fail-closed verification: no cause is surfaced to the client.
        if !app_state.jwt().verify(token) {
            return Err(ApiError::Unauthorized("Invalid or expired token".to_string()));
        }

        let email = app_state
            .jwt()
            .subject(token)
            .map_err(|_| ApiError::Unauthorized("Invalid token payload".to_string()))?;

        // The token subject is the user's email; resolve it to the stored id
        // so services receive the caller's id explicitly.
        let user = UserRepository::find_by_email(app_state.db(), &email)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::Unauthorized("Unknown user".to_string()))?;

        Ok(AuthUser {
            user_id: user.id,
            email: user.email,
        })
    }
}
