//! JWT token issuance and verification
//!
//! Tokens carry the authenticated user's email as the subject. Keys are
//! pre-computed once at startup and cached in AppState.

use anyhow::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user email)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

/// Pre-computed JWT keys, wrapped in Arc for cheap cloning
#[derive(Clone)]
pub struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtKeys {
    /// Create new JWT keys from the shared secret.
    /// This should be called once at startup.
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }
}

/// Token service
///
/// `verify` is fail-closed: every decode failure (bad signature, expired,
/// malformed input) is reported as plain `false` with no cause attached.
#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    expiry_secs: i64,
}

impl JwtService {
    /// Create a new JWT service with pre-computed keys.
    /// Call once at application startup and store in AppState.
    pub fn new(secret: &str, expiry_secs: i64) -> Self {
        Self {
            keys: JwtKeys::new(secret),
            expiry_secs,
        }
    }

    /// Issue a signed token for the given subject email.
    ///
    /// Expiry is `now + expiry_secs` from the configured token lifetime.
    pub fn issue(&self, email: &str) -> Result<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.expiry_secs);

        let claims = Claims {
            sub: email.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, &self.keys.encoding)
            .map_err(|e| anyhow::anyhow!("Failed to issue token: {}", e))
    }

    /// Verify signature and expiry.
    ///
    /// Returns `false` for any malformed, tampered, or expired token;
    /// callers must treat `false` as unauthenticated.
    pub fn verify(&self, token: &str) -> bool {
        decode::<Claims>(token, &self.keys.decoding, &Validation::default()).is_ok()
    }

    /// Extract the subject email from a token's payload.
    ///
    /// Does not re-check signature or expiry; the caller must have already
    /// called `verify`.
    pub fn subject(&self, token: &str) -> Result<String> {
        let mut validation = Validation::default();
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let token_data = decode::<Claims>(token, &self.keys.decoding, &validation)
            .map_err(|e| anyhow::anyhow!("Malformed token payload: {}", e))?;

        Ok(token_data.claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> JwtService {
        JwtService::new("test-secret", 3600)
    }

    #[test]
    fn test_issue_and_verify() {
        let service = create_test_service();
        let token = service.issue("a@x.com").unwrap();

        assert!(service.verify(&token));
        assert_eq!(service.subject(&token).unwrap(), "a@x.com");
    }

    #[test]
    fn test_expired_token_fails_verification() {
        // Negative lifetime puts exp far enough in the past to clear the
        // default 60s validation leeway.
        let service = JwtService::new("test-secret", -3600);
        let token = service.issue("a@x.com").unwrap();

        assert!(!service.verify(&token));
    }

    #[test]
    fn test_tampered_token_fails_verification() {
        let service = create_test_service();
        let other = JwtService::new("different-secret", 3600);
        let token = other.issue("a@x.com").unwrap();

        assert!(!service.verify(&token));
    }

    #[test]
    fn test_garbage_token_fails_verification() {
        let service = create_test_service();
        assert!(!service.verify(""));
        assert!(!service.verify("not.a.jwt"));
        assert!(!service.verify("invalid token with spaces"));
    }

    #[test]
    fn test_subject_skips_expiry_check() {
        // Decoding the subject of an expired-but-verified token must work.
        let service = JwtService::new("test-secret", -3600);
        let token = service.issue("a@x.com").unwrap();

        assert_eq!(service.subject(&token).unwrap(), "a@x.com");
    }

    #[test]
    fn test_subject_of_garbage_is_error() {
        let service = create_test_service();
        assert!(service.subject("garbage").is_err());
    }

    #[test]
    fn test_service_is_clone_cheap() {
        let service = create_test_service();
        let _cloned = service.clone(); // Should be cheap due to Arc
    }
}
