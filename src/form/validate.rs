//! Length field validation, decoupled from rendering.

use thiserror::Error;

pub const MIN_LENGTH: i64 = 4;
pub const MAX_LENGTH: i64 = 16;

/// Field-level validation failures for the length input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Length is required")]
    Required,
    #[error("Length must be a number")]
    NotNumeric,
    #[error("Less Character")]
    TooShort,
    #[error("Too much Character")]
    TooLong,
}

/// Validate the raw length input. Generation must never be invoked unless
/// this returns `Ok`.
pub fn validate_length(raw: &str) -> Result<usize, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::Required);
    }

    let n: i64 = raw.parse().map_err(|_| ValidationError::NotNumeric)?;

    if n < MIN_LENGTH {
        return Err(ValidationError::TooShort);
    }
    if n > MAX_LENGTH {
        return Err(ValidationError::TooLong);
    }

    Ok(n as usize)
}
