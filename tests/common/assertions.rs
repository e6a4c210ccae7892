//! Custom assertion macros and utilities
//!
//! Provides assertions for the API's two error body shapes.

use axum_test::TestResponse;

/// Assert that a result is ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $message:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $message, e),
        }
    };
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}

/// Assert a `{ "msg": ... }` body
pub fn assert_msg(response: &TestResponse, expected: &str) {
    let body: serde_json::Value = response.json();
    assert_eq!(
        body["msg"], expected,
        "unexpected body: {}",
        body
    );
}

/// Assert an `{ "errors": [...] }` body and return its messages
pub fn error_messages(response: &TestResponse) -> Vec<String> {
    let body: serde_json::Value = response.json();
    body["errors"]
        .as_array()
        .unwrap_or_else(|| panic!("Expected errors array, got: {}", body))
        .iter()
        .map(|e| e["msg"].as_str().unwrap_or_default().to_string())
        .collect()
}
