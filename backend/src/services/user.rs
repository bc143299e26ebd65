//! User service for authentication and registration
//!
//! Password hashing and verification are offloaded to the blocking thread
//! pool; the JWT service is passed by reference with pre-computed keys.

use crate::auth::{JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::{UserRecord, UserRepository};
use babysafety_shared::types::JwtResponse;
use sqlx::PgPool;

pub const USERNAME_TAKEN: &str = "Error: Username is already taken!";
pub const EMAIL_TAKEN: &str = "Error: Email is already in use!";

/// User service for authentication operations
pub struct UserService;

impl UserService {
    /// Login with email and password
    ///
    /// The login contract identifies users by email; an unknown email and a
    /// wrong password are indistinguishable to the caller.
    pub async fn login(
        pool: &PgPool,
        jwt_service: &JwtService,
        email: &str,
        password: &str,
    ) -> Result<JwtResponse, ApiError> {
        let user = UserRepository::find_by_email(pool, email)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::Unauthorized("Invalid credentials".to_string()))?;

        let valid =
            PasswordService::verify_async(password.to_string(), user.password_hash.clone())
                .await
                .map_err(ApiError::Internal)?;

        if !valid {
            return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
        }

        // Token subject is the user's email.
        let token = jwt_service.issue(&user.email).map_err(ApiError::Internal)?;

        Ok(JwtResponse {
            token,
            id: user.id.to_string(),
            username: user.username,
            email: user.email,
        })
    }

    /// Register a new user
    ///
    /// The existence checks here are advisory; the database unique
    /// constraints are the authoritative guard, so a concurrent
    /// registration that slips past the checks still surfaces as the
    /// corresponding taken-error.
    pub async fn register(
        pool: &PgPool,
        username: &str,
        email: &str,
        mobile_number: &str,
        password: &str,
    ) -> Result<UserRecord, ApiError> {
        if UserRepository::username_exists(pool, username)
            .await
            .map_err(ApiError::Internal)?
        {
            return Err(ApiError::Conflict(USERNAME_TAKEN.to_string()));
        }

        if UserRepository::email_exists(pool, email)
            .await
            .map_err(ApiError::Internal)?
        {
            return Err(ApiError::Conflict(EMAIL_TAKEN.to_string()));
        }

        let password_hash = PasswordService::hash_async(password.to_string())
            .await
            .map_err(ApiError::Internal)?;

        UserRepository::create(pool, username, email, mobile_number, &password_hash)
            .await
            .map_err(map_unique_violation)
    }
}

/// Map database unique-constraint violations back to the domain conflicts
/// a losing racer would have seen from the advisory checks.
pub fn map_unique_violation(err: sqlx::Error) -> ApiError {
    if let sqlx::Error::Database(ref db_err) = err {
        match db_err.constraint() {
            Some("users_username_key") => {
                return ApiError::Conflict(USERNAME_TAKEN.to_string());
            }
            Some("users_email_key") => {
                return ApiError::Conflict(EMAIL_TAKEN.to_string());
            }
            _ => {}
        }
    }
    ApiError::Database(err)
}
