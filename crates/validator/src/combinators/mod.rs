//! Combinators for composing validators
//!
//! The only composition offered is sequential chaining: [`validate_all`]
//! threads a value through an ordered list of steps and stops at the first
//! failure.

pub mod chain;

pub use chain::{Step, validate_all};
