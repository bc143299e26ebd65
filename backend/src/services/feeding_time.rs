//! Feeding time service
//!
//! Feeding entries are keyed by `baby_id` but the id is not checked
//! against the profile store, so entries can be recorded for ids with no
//! matching profile.

use crate::error::ApiError;
use crate::repositories::{FeedingTimeInput, FeedingTimeRecord, FeedingTimeRepository};
use babysafety_shared::types::FeedingTimeRequest;
use sqlx::PgPool;
use uuid::Uuid;

/// Feeding time service
pub struct FeedingTimeService;

impl FeedingTimeService {
    /// Record a feeding entry as-is
    pub async fn add(
        pool: &PgPool,
        request: &FeedingTimeRequest,
    ) -> Result<FeedingTimeRecord, ApiError> {
        let input = FeedingTimeInput {
            baby_id: request.baby_id,
            time: request.time,
            amount: request.amount.clone(),
            food_type: request.food_type.clone(),
            notes: request.notes.clone(),
        };

        FeedingTimeRepository::create(pool, &input)
            .await
            .map_err(ApiError::Internal)
    }

    /// All entries for one baby
    pub async fn list_by_baby(
        pool: &PgPool,
        baby_id: Uuid,
    ) -> Result<Vec<FeedingTimeRecord>, ApiError> {
        FeedingTimeRepository::list_by_baby(pool, baby_id)
            .await
            .map_err(ApiError::Internal)
    }

    /// Every entry across all babies (administrative view)
    pub async fn list_all(pool: &PgPool) -> Result<Vec<FeedingTimeRecord>, ApiError> {
        FeedingTimeRepository::list_all(pool)
            .await
            .map_err(ApiError::Internal)
    }
}
