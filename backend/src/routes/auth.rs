//! Authentication routes
//!
//! Endpoints for caregiver login and signup. Neither requires a bearer
//! token; everything else in the API does.

use crate::error::{ApiError, ApiResult};
use crate::services::UserService;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use babysafety_shared::types::{JwtResponse, LoginRequest, MessageResponse, SignupRequest};
use tracing::info;
use validator::Validate;

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/signup", post(signup))
}

/// POST /api/auth/login
///
/// Returns the bearer token plus the user's id, username, and email.
/// Unknown email and wrong password both map to 401.
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<JwtResponse>> {
    req.validate().map_err(ApiError::from_validation)?;

    let response = UserService::login(state.db(), state.jwt(), &req.email, &req.password).await?;
    info!(email = %response.email, "User logged in");
    Ok(Json(response))
}

/// POST /api/auth/signup
///
/// Registers a new caregiver. Duplicate username or email returns 400
/// with the corresponding taken-message.
async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> ApiResult<Json<MessageResponse>> {
    req.validate().map_err(ApiError::from_validation)?;

    let user = UserService::register(
        state.db(),
        &req.username,
        &req.email,
        &req.mobile_number,
        &req.password,
    )
    .await?;

    info!(username = %user.username, "User registered");
    Ok(Json(MessageResponse {
        message: "User registered successfully!".to_string(),
    }))
}
