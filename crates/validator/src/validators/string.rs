//! String content validators
//!
//! Validators for presence, patterns, email and URL formats, and membership
//! in a fixed set of options. Every one of them rejects non-string input
//! with an `Invalid` result rather than a panic.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::field::{label, not_a_string};
use crate::foundation::{
    DEFAULT_EMAIL_FIELD, DEFAULT_FIELD, DEFAULT_URL_FIELD, Input, ValidationResult,
};

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

// ============================================================================
// NON-EMPTY
// ============================================================================

/// Validates that the input is a string with non-whitespace content.
///
/// On success the value is returned **trimmed**, so chaining this first
/// normalizes input for later validators.
///
/// # Examples
///
/// ```
/// use sift_validator::foundation::ValidationResult;
/// use sift_validator::validators::validate_non_empty_string;
///
/// assert_eq!(
///     validate_non_empty_string("  alice ", None),
///     ValidationResult::valid("alice".to_string()),
/// );
/// assert_eq!(
///     validate_non_empty_string("   ", Some("Name")),
///     ValidationResult::invalid("Name cannot be empty"),
/// );
/// ```
pub fn validate_non_empty_string<I>(value: &I, field: Option<&str>) -> ValidationResult<String>
where
    I: Input + ?Sized,
{
    let field = label(field, DEFAULT_FIELD);
    let Some(text) = value.text() else {
        return ValidationResult::invalid(not_a_string(field));
    };

    let trimmed = text.trim_matches(is_trimmable);
    if trimmed.is_empty() {
        return ValidationResult::invalid(format!("{field} cannot be empty"));
    }
    ValidationResult::valid(trimmed.to_owned())
}

/// Unicode whitespace plus the byte-order mark, which `str::trim` keeps.
#[inline]
fn is_trimmable(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

// ============================================================================
// PATTERN
// ============================================================================

/// Validates that the input is a string matched by `pattern`.
///
/// Both a non-string input and a failed match produce the same fixed
/// `message`. The accepted string is returned untrimmed.
pub fn validate_pattern<I>(value: &I, pattern: &Regex, message: &str) -> ValidationResult<String>
where
    I: Input + ?Sized,
{
    match value.text() {
        Some(text) if pattern.is_match(text) => ValidationResult::valid(text.to_owned()),
        _ => ValidationResult::invalid(message),
    }
}

// ============================================================================
// EMAIL
// ============================================================================

/// Validates a loose `local@domain.tld` email shape.
///
/// Uses [`validate_pattern`] with `^[^\s@]+@[^\s@]+\.[^\s@]+$`; this is a
/// plausibility check, not RFC 5322.
pub fn validate_email<I>(value: &I, field: Option<&str>) -> ValidationResult<String>
where
    I: Input + ?Sized,
{
    let field = label(field, DEFAULT_EMAIL_FIELD);
    validate_pattern(
        value,
        &EMAIL_REGEX,
        &format!("{field} must be a valid email address"),
    )
}

// ============================================================================
// URL
// ============================================================================

/// Validates that the input is an absolute URL.
///
/// A non-string input gets the type message; a string that [`url::Url`]
/// cannot parse (for example one missing its scheme) gets the format message.
///
/// # Examples
///
/// ```
/// use sift_validator::validators::validate_url;
///
/// assert!(validate_url("https://example.com", None).is_valid());
/// assert_eq!(
///     validate_url("example.com", None).error(),
///     Some("URL must be a valid URL"),
/// );
/// assert_eq!(validate_url(&123, None).error(), Some("URL must be a string"));
/// ```
pub fn validate_url<I>(value: &I, field: Option<&str>) -> ValidationResult<String>
where
    I: Input + ?Sized,
{
    let field = label(field, DEFAULT_URL_FIELD);
    let Some(text) = value.text() else {
        return ValidationResult::invalid(not_a_string(field));
    };

    match url::Url::parse(text) {
        Ok(_) => ValidationResult::valid(text.to_owned()),
        Err(_) => ValidationResult::invalid(format!("{field} must be a valid URL")),
    }
}

// ============================================================================
// ONE OF
// ============================================================================

/// Validates that the input is exactly one of `options`.
///
/// The failure message lists every option, double-quoted, in the order
/// given.
///
/// # Examples
///
/// ```
/// use sift_validator::validators::validate_one_of;
///
/// let colors = ["red", "green", "blue"];
/// assert!(validate_one_of("green", &colors, None).is_valid());
/// assert_eq!(
///     validate_one_of("yellow", &colors, None).error(),
///     Some(r#"Field must be one of: "red", "green", "blue""#),
/// );
/// ```
pub fn validate_one_of<I, S>(
    value: &I,
    options: &[S],
    field: Option<&str>,
) -> ValidationResult<String>
where
    I: Input + ?Sized,
    S: AsRef<str>,
{
    let field = label(field, DEFAULT_FIELD);
    let Some(text) = value.text() else {
        return ValidationResult::invalid(not_a_string(field));
    };

    if options.iter().any(|option| option.as_ref() == text) {
        return ValidationResult::valid(text.to_owned());
    }

    let listed = options
        .iter()
        .map(|option| format!("\"{}\"", option.as_ref()))
        .collect::<Vec<_>>()
        .join(", ");
    ValidationResult::invalid(format!("{field} must be one of: {listed}"))
}

// ============================================================================
// TESTS
// ============================================================================
