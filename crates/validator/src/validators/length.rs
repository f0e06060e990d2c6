//! String length validators
//!
//! Length is measured in Unicode scalar values (chars), not bytes, so
//! `"héllo"` has length 5.

use crate::foundation::field::{label, not_a_string};
use crate::foundation::{DEFAULT_FIELD, Input, ValidationResult};

#[inline]
fn measure(text: &str) -> usize {
    text.chars().count()
}

#[inline]
fn characters(count: usize) -> &'static str {
    if count == 1 { "character" } else { "characters" }
}

// ============================================================================
// MIN LENGTH
// ============================================================================

/// Validates that the input is a string of at least `min` characters.
///
/// # Examples
///
/// ```
/// use sift_validator::validators::validate_min_length;
///
/// assert!(validate_min_length("hello", 5, None).is_valid());
/// assert_eq!(
///     validate_min_length("", 1, Some("Name")).error(),
///     Some("Name must be at least 1 character"),
/// );
/// ```
pub fn validate_min_length<I>(
    value: &I,
    min: usize,
    field: Option<&str>,
) -> ValidationResult<String>
where
    I: Input + ?Sized,
{
    let field = label(field, DEFAULT_FIELD);
    let Some(text) = value.text() else {
        return ValidationResult::invalid(not_a_string(field));
    };

    if measure(text) < min {
        return ValidationResult::invalid(format!(
            "{field} must be at least {min} {}",
            characters(min)
        ));
    }
    ValidationResult::valid(text.to_owned())
}

// ============================================================================
// MAX LENGTH
// ============================================================================

/// Validates that the input is a string of at most `max` characters.
pub fn validate_max_length<I>(
    value: &I,
    max: usize,
    field: Option<&str>,
) -> ValidationResult<String>
where
    I: Input + ?Sized,
{
    let field = label(field, DEFAULT_FIELD);
    let Some(text) = value.text() else {
        return ValidationResult::invalid(not_a_string(field));
    };

    if measure(text) > max {
        return ValidationResult::invalid(format!(
            "{field} must be at most {max} {}",
            characters(max)
        ));
    }
    ValidationResult::valid(text.to_owned())
}

// ============================================================================
// LENGTH RANGE
// ============================================================================

/// Validates `min <= length <= max` by running the min check, then the max
/// check. The first failure is returned.
///
/// `min > max` is not rejected up front; such a range simply accepts nothing.
pub fn validate_length<I>(
    value: &I,
    min: usize,
    max: usize,
    field: Option<&str>,
) -> ValidationResult<String>
where
    I: Input + ?Sized,
{
    match validate_min_length(value, min, field) {
        ValidationResult::Valid { .. } => validate_max_length(value, max, field),
        invalid @ ValidationResult::Invalid { .. } => invalid,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_min_length_boundaries() {
        assert!(validate_min_length("hello", 5, None).is_valid());
        assert!(validate_min_length("hello world", 5, None).is_valid());
        assert_eq!(
            validate_min_length("hi", 5, None).error(),
            Some("Field must be at least 5 characters")
        );
        assert!(validate_min_length("", 0, None).is_valid());
    }

    #[test]
    fn test_max_length_boundaries() {
        assert!(validate_max_length("hello", 5, None).is_valid());
        assert_eq!(
            validate_max_length("hello!", 5, None).error(),
            Some("Field must be at most 5 characters")
        );
        assert_eq!(
            validate_max_length("ab", 1, None).error(),
            Some("Field must be at most 1 character")
        );
        assert_eq!(
            validate_max_length("a", 0, None).error(),
            Some("Field must be at most 0 characters")
        );
    }

    #[test]
    fn test_returns_original_untrimmed() {
        assert_eq!(
            validate_min_length("  ab  ", 2, None),
            ValidationResult::valid("  ab  ".to_string())
        );
    }

    #[test]
    fn test_type_errors() {
        assert_eq!(
            validate_min_length(&json!([1, 2, 3]), 1, None).error(),
            Some("Field must be a string")
        );
        assert_eq!(
            validate_max_length(&json!(null), 1, Some("Bio")).error(),
            Some("Bio must be a string")
        );
        assert_eq!(
            validate_length(&3.5, 1, 4, None).error(),
            Some("Field must be a string")
        );
    }

    #[test]
    fn test_length_first_failure_wins() {
        assert_eq!(
            validate_length("hi", 3, 5, None).error(),
            Some("Field must be at least 3 characters")
        );
        assert_eq!(
            validate_length("toolong", 3, 5, None).error(),
            Some("Field must be at most 5 characters")
        );
        assert!(validate_length("four", 3, 5, None).is_valid());
        // inverted range: min check passes, max check fails
        assert_eq!(
            validate_length("abcd", 4, 2, None).error(),
            Some("Field must be at most 2 characters")
        );
    }

    #[test]
    fn test_unicode_counts_chars() {
        assert!(validate_min_length("h\u{e9}llo", 5, None).is_valid());
        assert!(validate_max_length("\u{1f44b}\u{1f30d}", 2, None).is_valid());
    }
}
