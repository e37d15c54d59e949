// Test Assertion Helpers
//
// Assertions on JSON response bodies.

use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

/// Parse a money field serialized as a decimal string
///
/// # Panics
/// If the field is missing or not a decimal string
pub fn money_field(body: &Value, field: &str) -> Decimal {
    let raw = body
        .get(field)
        .and_then(Value::as_str)
        .unwrap_or_else(|| panic!("Expected decimal string field '{}' in {}", field, body));
    Decimal::from_str(raw).unwrap_or_else(|e| panic!("Field '{}' = '{}' is not a decimal: {}", field, raw, e))
}

/// Assert a money field equals `expected`, ignoring trailing zeros
pub fn assert_money(body: &Value, field: &str, expected: Decimal) {
    assert_eq!(
        money_field(body, field),
        expected,
        "Field '{}' mismatch in {}",
        field,
        body
    );
}

/// Assert the body is the standard error envelope with the given status code
pub fn assert_error_envelope(body: &Value, code: u16) {
    let error = body
        .get("error")
        .unwrap_or_else(|| panic!("Expected 'error' object in {}", body));
    assert_eq!(error["code"], code, "Unexpected error code in {}", body);
    assert!(
        error["message"].as_str().is_some_and(|m| !m.is_empty()),
        "Expected non-empty error message in {}",
        body
    );
}
