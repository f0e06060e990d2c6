//! # sift-validator
//!
//! Small, pure validators for strings and numbers.
//!
//! ## Quick Start
//!
//! ```
//! use sift_validator::prelude::*;
//!
//! let name = |v: String| validate_non_empty_string(&v, Some("Username"));
//! let bounded = |v: String| validate_length(&v, 3, 20, Some("Username"));
//!
//! match validate_all("  alice ".to_string(), &[&name, &bounded]) {
//!     ValidationResult::Valid { value } => assert_eq!(value, "alice"),
//!     ValidationResult::Invalid { error } => panic!("{error}"),
//! }
//! ```
//!
//! ## Contract
//!
//! - Every validator accepts any [`Input`](foundation::Input): a
//!   `serde_json::Value`, a string or a number.
//! - Every validator returns a [`ValidationResult`](foundation::ValidationResult)
//!   and never panics. Wrong types are reported as `Invalid`.
//! - Messages are part of the API; an optional `field` label replaces the
//!   default (`"Field"`, `"Email"`, `"URL"` or `"Number"`).
//!
//! ## Built-in Validators
//!
//! - **String**: [`validate_non_empty_string`](validators::validate_non_empty_string),
//!   [`validate_pattern`](validators::validate_pattern),
//!   [`validate_email`](validators::validate_email),
//!   [`validate_url`](validators::validate_url),
//!   [`validate_one_of`](validators::validate_one_of)
//! - **Length**: [`validate_min_length`](validators::validate_min_length),
//!   [`validate_max_length`](validators::validate_max_length),
//!   [`validate_length`](validators::validate_length)
//! - **Numeric**: [`validate_number_range`](validators::validate_number_range),
//!   [`validate_positive_integer`](validators::validate_positive_integer)
//! - **Chain**: [`validate_all`](combinators::validate_all)

pub mod combinators;
pub mod foundation;
pub mod prelude;
pub mod validators;
