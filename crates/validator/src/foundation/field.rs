//! Field labels used in error messages.
//!
//! Every validator takes a `field: Option<&str>`. `None` falls back to the
//! constant for that validator's family.

/// Label for generic string validators.
pub const DEFAULT_FIELD: &str = "Field";

/// Label for [`validate_email`](crate::validators::validate_email).
pub const DEFAULT_EMAIL_FIELD: &str = "Email";

/// Label for [`validate_url`](crate::validators::validate_url).
pub const DEFAULT_URL_FIELD: &str = "URL";

/// Label for numeric validators.
pub const DEFAULT_NUMBER_FIELD: &str = "Number";

/// Resolves the label to print, preferring the caller's override.
#[inline]
pub(crate) fn label<'a>(field: Option<&'a str>, fallback: &'static str) -> &'a str {
    field.unwrap_or(fallback)
}

/// Message shared by every string validator for non-text input.
pub(crate) fn not_a_string(field: &str) -> String {
    format!("{field} must be a string")
}
