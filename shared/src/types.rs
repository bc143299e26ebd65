//! API request and response types
//!
//! Wire shapes use camelCase field names to stay compatible with the
//! existing web client.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::not_blank;

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Signup request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[validate(length(min = 3, max = 20, message = "username must be 3-20 characters"))]
    pub username: String,
    #[validate(
        email(message = "invalid email format"),
        length(max = 50, message = "email must be at most 50 characters")
    )]
    pub email: String,
    #[validate(length(min = 6, max = 40, message = "password must be 6-40 characters"))]
    pub password: String,
    #[validate(length(min = 10, max = 15, message = "mobile number must be 10-15 characters"))]
    pub mobile_number: String,
}

/// Login response: bearer token plus the authenticated user's identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtResponse {
    pub token: String,
    pub id: String,
    pub username: String,
    pub email: String,
}

/// Generic message body, used for signup results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Baby profile create/update request
///
/// `birth_date` is carried as a "dd-mm-yyyy" string; the backend stores
/// it verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BabyProfileRequest {
    #[validate(custom(function = not_blank))]
    pub name: String,
    #[validate(custom(function = not_blank))]
    pub birth_date: String,
    pub weight: Option<String>,
    pub height: Option<String>,
    pub health_issues: Option<String>,
    pub allergies: Option<String>,
    pub notes: Option<String>,
    /// Defaults to 0 when absent.
    pub age_in_months: Option<i32>,
    pub gender: Option<String>,
}

/// Baby profile as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BabyProfile {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub birth_date: String,
    pub weight: Option<String>,
    pub height: Option<String>,
    pub health_issues: Option<String>,
    pub allergies: Option<String>,
    pub notes: Option<String>,
    pub age_in_months: i32,
    pub gender: Option<String>,
}

/// Feeding entry create request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedingTimeRequest {
    /// Identifier of the baby this entry belongs to. Not checked against
    /// the profile store.
    pub baby_id: uuid::Uuid,
    /// Local time of day of the feeding.
    pub time: Option<NaiveTime>,
    pub amount: Option<String>,
    pub food_type: Option<String>,
    pub notes: Option<String>,
}

/// Feeding entry as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedingTime {
    pub id: String,
    pub baby_id: String,
    pub time: Option<NaiveTime>,
    pub amount: Option<String>,
    pub food_type: Option<String>,
    pub notes: Option<String>,
}
