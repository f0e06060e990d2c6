//! Sequential chaining of validators with short-circuit on first failure.
//!
//! # Examples
//!
//! ```
//! use sift_validator::combinators::validate_all;
//! use sift_validator::foundation::ValidationResult;
//! use sift_validator::validators::{validate_min_length, validate_non_empty_string};
//!
//! let trimmed = |v: String| validate_non_empty_string(&v, Some("Username"));
//! let long_enough = |v: String| validate_min_length(&v, 3, Some("Username"));
//!
//! assert_eq!(
//!     validate_all("  alice  ".to_string(), &[&trimmed, &long_enough]),
//!     ValidationResult::valid("alice".to_string()),
//! );
//! assert_eq!(
//!     validate_all(" al ".to_string(), &[&trimmed, &long_enough]).error(),
//!     Some("Username must be at least 3 characters"),
//! );
//! ```

use crate::foundation::ValidationResult;

/// A single step in a [`validate_all`] chain.
pub type Step<'a, T> = &'a dyn Fn(T) -> ValidationResult<T>;

/// Runs `validators` in order over `value`.
///
/// - The first `Invalid` stops the chain and is returned as is.
/// - Each `Valid` value replaces the working value, so normalization such as
///   trimming carries forward.
/// - An empty chain returns `Valid { value }` unchanged.
///
/// When every step passes, the last validator is invoked once more on the
/// final working value and that result is returned. For the pure validators
/// in this crate the outcome equals the last step's result.
pub fn validate_all<T>(value: T, validators: &[Step<'_, T>]) -> ValidationResult<T> {
    let mut current = value;

    for (index, validator) in validators.iter().enumerate() {
        current = match validator(current) {
            ValidationResult::Valid { value } => value,
            ValidationResult::Invalid { error } => {
                tracing::trace!(step = index, %error, "validator chain short-circuited");
                return ValidationResult::Invalid { error };
            }
        };
    }

    tracing::trace!(steps = validators.len(), "validator chain passed");
    match validators.last() {
        Some(last) => last(current),
        None => ValidationResult::Valid { value: current },
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{validate_min_length, validate_non_empty_string};
    use std::cell::Cell;

    #[test]
    fn test_empty_chain_is_identity() {
        assert_eq!(
            validate_all("  raw ".to_string(), &[]),
            ValidationResult::valid("  raw ".to_string())
        );
        assert_eq!(validate_all(7, &[]), ValidationResult::valid(7));
    }

    #[test]
    fn test_short_circuit_stops_later_steps() {
        let calls = Cell::new(0);
        let fail = |_: i32| ValidationResult::<i32>::invalid("first");
        let counted = |n: i32| {
            calls.set(calls.get() + 1);
            ValidationResult::valid(n)
        };

        let result = validate_all(1, &[&fail, &counted]);
        assert_eq!(result.error(), Some("first"));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_values_propagate() {
        let double = |n: i32| ValidationResult::valid(n * 2);
        let add_one = |n: i32| ValidationResult::valid(n + 1);
        assert_eq!(validate_all(3, &[&double]), ValidationResult::valid(12));
        // double(3) = 6, add_one(6) = 7, then add_one re-runs on 7 -> 8
        assert_eq!(
            validate_all(3, &[&double, &add_one]),
            ValidationResult::valid(8)
        );
    }

    #[test]
    fn test_last_step_runs_twice_on_success() {
        let calls = Cell::new(0);
        let counted = |s: String| {
            calls.set(calls.get() + 1);
            ValidationResult::valid(s)
        };
        assert!(validate_all("x".to_string(), &[&counted]).is_valid());
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_non_empty_then_min_length() {
        let non_empty = |v: String| validate_non_empty_string(&v, None);
        let min_five = |v: String| validate_min_length(&v, 5, None);
        assert_eq!(
            validate_all("hi".to_string(), &[&non_empty, &min_five]).error(),
            Some("Field must be at least 5 characters")
        );
    }
}
