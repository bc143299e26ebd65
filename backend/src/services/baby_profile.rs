//! Baby profile service
//!
//! CRUD on baby profiles with per-user ownership enforcement on update
//! and delete. The caller's id comes from the route layer, which resolves
//! it from the verified bearer token.

use crate::error::ApiError;
use crate::repositories::{BabyProfileInput, BabyProfileRecord, BabyProfileRepository};
use babysafety_shared::types::BabyProfileRequest;
use sqlx::PgPool;
use uuid::Uuid;

/// Baby profile service
pub struct BabyProfileService;

impl BabyProfileService {
    /// Create a profile owned by `user_id`
    pub async fn create(
        pool: &PgPool,
        user_id: Uuid,
        request: &BabyProfileRequest,
    ) -> Result<BabyProfileRecord, ApiError> {
        BabyProfileRepository::create(pool, user_id, &to_input(request))
            .await
            .map_err(ApiError::Internal)
    }

    /// All profiles owned by `user_id`
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<Vec<BabyProfileRecord>, ApiError> {
        BabyProfileRepository::list_by_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)
    }

    /// Overwrite a profile's mutable fields
    ///
    /// Fails with `NotFound` when the id does not exist and `Forbidden`
    /// when the profile is owned by someone else; the stored record is
    /// untouched in both cases.
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        request: &BabyProfileRequest,
        caller_id: Uuid,
    ) -> Result<BabyProfileRecord, ApiError> {
        Self::find_owned(pool, id, caller_id).await?;

        BabyProfileRepository::update(pool, id, &to_input(request))
            .await
            .map_err(ApiError::Internal)
    }

    /// Delete a profile, with the same checks as update
    pub async fn delete(pool: &PgPool, id: Uuid, caller_id: Uuid) -> Result<(), ApiError> {
        Self::find_owned(pool, id, caller_id).await?;

        BabyProfileRepository::delete(pool, id)
            .await
            .map_err(ApiError::Internal)
    }

    /// Fetch a profile and check the caller owns it
    async fn find_owned(
        pool: &PgPool,
        id: Uuid,
        caller_id: Uuid,
    ) -> Result<BabyProfileRecord, ApiError> {
        let profile = BabyProfileRepository::find_by_id(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Baby profile not found".to_string()))?;

        if profile.user_id != caller_id {
            return Err(ApiError::Forbidden(
                "You do not own this baby profile".to_string(),
            ));
        }

        Ok(profile)
    }
}

/// Map a request onto repository input, defaulting `age_in_months` to 0.
fn to_input(request: &BabyProfileRequest) -> BabyProfileInput {
    BabyProfileInput {
        name: request.name.clone(),
        birth_date: request.birth_date.clone(),
        weight: request.weight.clone(),
        height: request.height.clone(),
        health_issues: request.health_issues.clone(),
        allergies: request.allergies.clone(),
        notes: request.notes.clone(),
        age_in_months: request.age_in_months.unwrap_or(0),
        gender: request.gender.clone(),
    }
}
