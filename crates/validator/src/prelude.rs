//! Prelude module for convenient imports.
//!
//! Provides a single `use sift_validator::prelude::*;` import that brings
//! in the result type, the input trait, every validator and the chain.
//!
//! # Examples
//!
//! ```
//! use sift_validator::prelude::*;
//!
//! let email = |v: String| validate_email(&v, None);
//! assert!(validate_all("ops@example.com".to_string(), &[&email]).is_valid());
//! ```

// ============================================================================
// FOUNDATION: Result, input, errors, labels
// ============================================================================

pub use crate::foundation::{
    DEFAULT_EMAIL_FIELD, DEFAULT_FIELD, DEFAULT_NUMBER_FIELD, DEFAULT_URL_FIELD, Input,
    ValidationError, ValidationResult,
};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

pub use crate::validators::{
    validate_email, validate_length, validate_max_length, validate_min_length,
    validate_non_empty_string, validate_number_range, validate_one_of, validate_pattern,
    validate_positive_integer, validate_url,
};

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::combinators::{Step, validate_all};
