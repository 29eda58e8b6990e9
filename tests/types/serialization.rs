#![cfg(feature = "serde")]

use sugar_rail::types::{PanicError, ValidationError};

#[test]
fn validation_error_serializes_its_reason() {
    let reason = ValidationError::new("maximum length is 5");
    let json = serde_json::to_string(&reason).unwrap();
    assert_eq!(json, r#"{"reason":"maximum length is 5"}"#);

    let back: ValidationError = serde_json::from_str(&json).unwrap();
    assert_eq!(back, reason);
}

#[test]
fn panic_error_serializes_its_message() {
    let panic = PanicError::new("index out of bounds");
    let json = serde_json::to_string(&panic).unwrap();
    assert_eq!(json, r#"{"message":"index out of bounds"}"#);
}
