//! Built-in validators
//!
//! Every validator is a plain function:
//! `validate_x(value, ...params, field) -> ValidationResult<T>`.
//! `field` is an optional label override for error messages.
//!
//! # Categories
//!
//! - **String**: non-empty, pattern, email, URL, one-of
//! - **Length**: min, max, range
//! - **Numeric**: finite range, positive integer
//!
//! # Examples
//!
//! ```
//! use sift_validator::validators::*;
//!
//! assert!(validate_non_empty_string(" bob ", Some("Username")).is_valid());
//! assert!(validate_length("bob", 3, 20, Some("Username")).is_valid());
//! assert!(validate_positive_integer(&3, Some("Quantity")).is_valid());
//! ```

pub mod length;
pub mod numeric;
pub mod string;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use length::{validate_length, validate_max_length, validate_min_length};

pub use numeric::{validate_number_range, validate_positive_integer};

pub use string::{
    validate_email, validate_non_empty_string, validate_one_of, validate_pattern, validate_url,
};
