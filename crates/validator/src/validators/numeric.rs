//! Numeric validators
//!
//! Numbers are read as `f64`. Strings that look numeric (`"5"`) are not
//! numbers.

use crate::foundation::field::label;
use crate::foundation::{DEFAULT_NUMBER_FIELD, Input, ValidationResult};

// ============================================================================
// NUMBER RANGE
// ============================================================================

/// Validates that the input is a finite number within `[min, max]`.
///
/// `NaN` and the infinities are rejected as non-finite before the range is
/// consulted. Bounds print in shortest form: `0.0` shows as `0`, `-0.0` as
/// `0` and `1e21` as `1e+21`.
///
/// # Examples
///
/// ```
/// use sift_validator::validators::validate_number_range;
///
/// assert!(validate_number_range(&18, 18.0, 65.0, Some("Age")).is_valid());
/// assert_eq!(
///     validate_number_range(&f64::NAN, 0.0, 1.0, None).error(),
///     Some("Number must be a finite number"),
/// );
/// assert_eq!(
///     validate_number_range(&101, 0.0, 100.0, None).error(),
///     Some("Number must be between 0 and 100"),
/// );
/// ```
pub fn validate_number_range<I>(
    value: &I,
    min: f64,
    max: f64,
    field: Option<&str>,
) -> ValidationResult<f64>
where
    I: Input + ?Sized,
{
    let field = label(field, DEFAULT_NUMBER_FIELD);
    let number = match value.number() {
        Some(n) if n.is_finite() => n,
        _ => return ValidationResult::invalid(format!("{field} must be a finite number")),
    };

    if number < min || number > max {
        return ValidationResult::invalid(format!(
            "{field} must be between {} and {}",
            render(min),
            render(max)
        ));
    }
    ValidationResult::valid(number)
}

// ============================================================================
// POSITIVE INTEGER
// ============================================================================

/// Validates that the input is an integer greater than zero.
///
/// The integer check runs first: `1.5` fails as "not an integer" and `0`
/// fails as "not positive".
pub fn validate_positive_integer<I>(value: &I, field: Option<&str>) -> ValidationResult<f64>
where
    I: Input + ?Sized,
{
    let field = label(field, DEFAULT_NUMBER_FIELD);
    let number = match value.number() {
        Some(n) if is_integer(n) => n,
        _ => return ValidationResult::invalid(format!("{field} must be an integer")),
    };

    if number <= 0.0 {
        return ValidationResult::invalid(format!("{field} must be a positive integer"));
    }
    ValidationResult::valid(number)
}

/// Renders a bound for a message.
///
/// Plain decimal in `[1e-6, 1e21)`, exponent form with an explicit sign
/// outside it. Negative zero prints as `0`.
fn render(n: f64) -> String {
    if n == 0.0 {
        return "0".to_owned();
    }
    let magnitude = n.abs();
    if !n.is_finite() || (1e-6..1e21).contains(&magnitude) {
        return n.to_string();
    }

    let exponent = format!("{n:e}");
    match exponent.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exponent,
    }
}

#[inline]
fn is_integer(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0
}

// ============================================================================
// TESTS
// ============================================================================
