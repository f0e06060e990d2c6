//! Basic usage example for sift-validator

use serde_json::json;
use sift_validator::prelude::*;

fn main() {
    let payload = json!({
        "username": "  alice ",
        "email": "alice@example",
        "age": 34,
    });

    // Untyped JSON fields go straight into the validators.
    match validate_non_empty_string(&payload["username"], Some("Username")) {
        ValidationResult::Valid { value } => println!("✓ username normalized to {value:?}"),
        ValidationResult::Invalid { error } => println!("✗ {error}"),
    }

    match validate_email(&payload["email"], None) {
        ValidationResult::Valid { value } => println!("✓ {value} is a valid email"),
        ValidationResult::Invalid { error } => println!("✗ {error}"),
    }

    let age = validate_number_range(&payload["age"], 18.0, 120.0, Some("Age"));
    println!("age valid: {}", age.is_valid());

    // Chain: trim first, then length-check the trimmed value.
    let trimmed = |v: String| validate_non_empty_string(&v, Some("Username"));
    let bounded = |v: String| validate_length(&v, 3, 16, Some("Username"));
    let result = validate_all(" al ".to_string(), &[&trimmed, &bounded]);
    if let Some(error) = result.error() {
        println!("✗ {error}");
    }
}
