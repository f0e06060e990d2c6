//! The tagged result every validator returns.
//!
//! Failure is ordinary data: a validator never panics and never returns
//! `Err`. Callers `match` on [`ValidationResult`] or convert it with
//! [`ValidationResult::into_result`] when they prefer `?`.

use serde::{Deserialize, Serialize};

use crate::foundation::ValidationError;

// ============================================================================
// VALIDATION RESULT
// ============================================================================

/// Outcome of a single validation.
///
/// Exactly one variant is populated. `Valid` carries the accepted value,
/// which may be normalized (for example trimmed); `Invalid` carries a
/// human-readable message.
///
/// Serializes as an internally tagged object:
///
/// ```
/// use sift_validator::foundation::ValidationResult;
///
/// let ok: ValidationResult<String> = ValidationResult::valid("alice".to_string());
/// assert_eq!(
///     serde_json::to_string(&ok).unwrap(),
///     r#"{"status":"valid","value":"alice"}"#,
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
#[must_use = "validation result must be checked"]
pub enum ValidationResult<T> {
    /// Validation succeeded.
    Valid {
        /// The accepted value.
        value: T,
    },
    /// Validation failed.
    Invalid {
        /// Message describing the failure.
        error: String,
    },
}

impl<T> ValidationResult<T> {
    /// Creates a successful result.
    pub fn valid(value: T) -> Self {
        Self::Valid { value }
    }

    /// Creates a failed result.
    pub fn invalid(error: impl Into<String>) -> Self {
        Self::Invalid {
            error: error.into(),
        }
    }

    /// Returns `true` for `Valid`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    /// Returns `true` for `Invalid`.
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Borrows the accepted value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Valid { value } => Some(value),
            Self::Invalid { .. } => None,
        }
    }

    /// Borrows the failure message, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Valid { .. } => None,
            Self::Invalid { error } => Some(error),
        }
    }

    /// Transforms the accepted value, leaving failures untouched.
    pub fn map<U, F>(self, f: F) -> ValidationResult<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Valid { value } => ValidationResult::Valid { value: f(value) },
            Self::Invalid { error } => ValidationResult::Invalid { error },
        }
    }

    /// Converts into a standard `Result` for use with `?`.
    pub fn into_result(self) -> Result<T, ValidationError> {
        match self {
            Self::Valid { value } => Ok(value),
            Self::Invalid { error } => Err(ValidationError::new(error)),
        }
    }
}

impl<T> From<ValidationResult<T>> for Result<T, ValidationError> {
    fn from(result: ValidationResult<T>) -> Self {
        result.into_result()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let ok = ValidationResult::valid(5);
        assert!(ok.is_valid());
        assert!(!ok.is_invalid());
        assert_eq!(ok.value(), Some(&5));
        assert_eq!(ok.error(), None);

        let bad: ValidationResult<i32> = ValidationResult::invalid("nope");
        assert!(bad.is_invalid());
        assert_eq!(bad.value(), None);
        assert_eq!(bad.error(), Some("nope"));
    }

    #[test]
    fn test_map_keeps_failure() {
        let bad: ValidationResult<i32> = ValidationResult::invalid("nope");
        assert_eq!(bad.map(|n| n * 2), ValidationResult::invalid("nope"));
        assert_eq!(
            ValidationResult::valid(2).map(|n| n * 2),
            ValidationResult::valid(4)
        );
    }

    #[test]
    fn test_into_result() {
        assert_eq!(ValidationResult::valid("x").into_result().unwrap(), "x");

        let err = ValidationResult::<()>::invalid("Field cannot be empty")
            .into_result()
            .unwrap_err();
        assert_eq!(err.to_string(), "Field cannot be empty");

        let converted: Result<u8, ValidationError> = ValidationResult::valid(1).into();
        assert!(converted.is_ok());
    }

    #[test]
    fn test_serde_shape() {
        let bad: ValidationResult<String> = ValidationResult::invalid("Email must be a string");
        let json = serde_json::to_value(&bad).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "status": "invalid", "error": "Email must be a string" })
        );

        let back: ValidationResult<String> = serde_json::from_value(json).unwrap();
        assert_eq!(back, bad);
    }
}
