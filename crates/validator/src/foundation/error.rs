//! Error type for callers that want `Result` semantics.

use std::borrow::Cow;

/// A validation failure lifted out of [`ValidationResult`](crate::foundation::ValidationResult).
///
/// Validators never produce this directly. It exists so that
/// `ValidationResult::into_result()` can feed the `?` operator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Human-readable message, identical to the `Invalid` payload.
    pub message: Cow<'static, str>,
}

impl ValidationError {
    /// Creates a new error from a message.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_message() {
        let error = ValidationError::new("URL must be a valid URL");
        assert_eq!(error.to_string(), "URL must be a valid URL");
        assert_eq!(error.message(), "URL must be a valid URL");
    }

    #[test]
    fn test_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&ValidationError::new("x"));
    }
}
