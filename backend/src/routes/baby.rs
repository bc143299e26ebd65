//! Baby profile routes
//!
//! All routes require a verified bearer token. The two feeding views that
//! historically lived under `/api/baby` are kept here for client
//! compatibility.

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::repositories::BabyProfileRecord;
use crate::services::{BabyProfileService, FeedingTimeService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use babysafety_shared::types::{BabyProfile, BabyProfileRequest, FeedingTime};
use uuid::Uuid;
use validator::Validate;

use super::feeding::to_api_feeding;

/// Create baby profile routes
pub fn baby_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(add_baby_profile))
        .route("/my-babies", get(my_babies))
        .route("/all", get(all_feeding_times))
        .route("/babyFeed/:baby_id", get(feeding_times_by_baby))
        .route("/:id", put(update_baby_profile).delete(delete_baby_profile))
}

fn to_api(record: BabyProfileRecord) -> BabyProfile {
    BabyProfile {
        id: record.id.to_string(),
        user_id: record.user_id.to_string(),
        name: record.name,
        birth_date: record.birth_date,
        weight: record.weight,
        height: record.height,
        health_issues: record.health_issues,
        allergies: record.allergies,
        notes: record.notes,
        age_in_months: record.age_in_months,
        gender: record.gender,
    }
}

/// POST /api/baby/add
///
/// The profile's owner is taken from the verified token, never from the
/// request body.
async fn add_baby_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<BabyProfileRequest>,
) -> ApiResult<Json<BabyProfile>> {
    req.validate().map_err(ApiError::from_validation)?;

    let profile = BabyProfileService::create(state.db(), auth.user_id, &req).await?;
    Ok(Json(to_api(profile)))
}

/// GET /api/baby/my-babies
async fn my_babies(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<BabyProfile>>> {
    let profiles = BabyProfileService::list_by_user(state.db(), auth.user_id).await?;
    Ok(Json(profiles.into_iter().map(to_api).collect()))
}

/// PUT /api/baby/:id
///
/// 404 when the profile does not exist, 403 when the caller does not own it.
async fn update_baby_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<BabyProfileRequest>,
) -> ApiResult<Json<BabyProfile>> {
    req.validate().map_err(ApiError::from_validation)?;

    let profile = BabyProfileService::update(state.db(), id, &req, auth.user_id).await?;
    Ok(Json(to_api(profile)))
}

/// DELETE /api/baby/:id
async fn delete_baby_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    BabyProfileService::delete(state.db(), id, auth.user_id).await?;
    Ok(StatusCode::OK)
}

/// GET /api/baby/all
///
/// Global dump of every feeding entry across all babies.
async fn all_feeding_times(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<FeedingTime>>> {
    let entries = FeedingTimeService::list_all(state.db()).await?;
    Ok(Json(entries.into_iter().map(to_api_feeding).collect()))
}

/// GET /api/baby/babyFeed/:babyId
async fn feeding_times_by_baby(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(baby_id): Path<Uuid>,
) -> ApiResult<Json<Vec<FeedingTime>>> {
    let entries = FeedingTimeService::list_by_baby(state.db(), baby_id).await?;
    Ok(Json(entries.into_iter().map(to_api_feeding).collect()))
}
