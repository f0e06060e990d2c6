//! Core validation types
//!
//! This module contains the building blocks shared by every validator:
//!
//! - **Result**: [`ValidationResult`], the tagged `Valid` / `Invalid` outcome
//! - **Input**: [`Input`], a uniform view over untyped values
//! - **Errors**: [`ValidationError`], for callers that want `Result` + `?`
//! - **Labels**: default field names substituted into messages
//!
//! # Architecture
//!
//! ## 1. Failure is data
//!
//! Validators are total. A wrong type, an empty string or an out-of-range
//! number all come back as `ValidationResult::Invalid`:
//!
//! ```
//! use sift_validator::foundation::ValidationResult;
//! use sift_validator::validators::validate_min_length;
//!
//! let result = validate_min_length(&42, 3, None);
//! assert_eq!(result, ValidationResult::invalid("Field must be a string"));
//! ```
//!
//! ## 2. Any input
//!
//! Functions are generic over [`Input`], so the same validator accepts a
//! `serde_json::Value`, a `&str`, a `String` or a number:
//!
//! ```
//! use serde_json::json;
//! use sift_validator::validators::validate_email;
//!
//! assert!(validate_email(&json!("a@b.io"), None).is_valid());
//! assert!(validate_email("a@b.io", None).is_valid());
//! assert!(validate_email(&7, None).is_invalid());
//! ```

// Module declarations
pub mod error;
pub mod field;
pub mod input;
pub mod result;

// Re-export everything at the foundation level for convenience
pub use error::ValidationError;
pub use field::{DEFAULT_EMAIL_FIELD, DEFAULT_FIELD, DEFAULT_NUMBER_FIELD, DEFAULT_URL_FIELD};
pub use input::Input;
pub use result::ValidationResult;

// ============================================================================
// PRELUDE
// ============================================================================

/// Common imports for working with the foundation types.
pub mod prelude {
    pub use super::{Input, ValidationError, ValidationResult};
}
