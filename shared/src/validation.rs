//! Input validation functions
//!
//! Helpers used by the `validator` derive macros on request types.

use validator::ValidationError;

/// Reject empty or whitespace-only strings.
///
/// Mirrors a "not blank" constraint: `""` and `"   "` both fail.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.message = Some("must not be blank".into());
        return Err(error);
    }
    Ok(())
}
