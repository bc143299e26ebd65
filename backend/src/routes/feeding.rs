//! Feeding time routes
//!
//! The original service left these routes unauthenticated while the
//! equivalent `/api/baby` views required a token. That inconsistency was
//! a gap, not a feature: the same bearer-token gate applies here.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::repositories::FeedingTimeRecord;
use crate::services::FeedingTimeService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use babysafety_shared::types::{FeedingTime, FeedingTimeRequest};
use uuid::Uuid;

/// Create feeding routes
pub fn feeding_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(add_feeding_entry))
        .route("/:baby_id", get(feeding_times))
}

pub(super) fn to_api_feeding(record: FeedingTimeRecord) -> FeedingTime {
    FeedingTime {
        id: record.id.to_string(),
        baby_id: record.baby_id.to_string(),
        time: record.time,
        amount: record.amount,
        food_type: record.food_type,
        notes: record.notes,
    }
}

/// POST /api/feeding/add
///
/// Persists the entry as-is; the referenced `babyId` is not checked
/// against the profile store.
async fn add_feeding_entry(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(req): Json<FeedingTimeRequest>,
) -> ApiResult<Json<FeedingTime>> {
    let entry = FeedingTimeService::add(state.db(), &req).await?;
    Ok(Json(to_api_feeding(entry)))
}

/// GET /api/feeding/:babyId
async fn feeding_times(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(baby_id): Path<Uuid>,
) -> ApiResult<Json<Vec<FeedingTime>>> {
    let entries = FeedingTimeService::list_by_baby(state.db(), baby_id).await?;
    Ok(Json(entries.into_iter().map(to_api_feeding).collect()))
}
