use std::error::Error;
use dilemma::errors::{DilemmaError, sanitize_message, sanitize_utf8};

#[test]
fn test_dilemma_error_implements_error_trait() {
    fn assert_error<T: Error>(_: &T) {}

    let error = DilemmaError::Completion("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_dilemma_error_display() {
    let error = DilemmaError::Completion("No text in response".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to access completion API: No text in response"
    );

    let error = DilemmaError::Http("Connection error".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to send HTTP request: Connection error"
    );

    let error = DilemmaError::upstream(429, b"slow down");
    assert_eq!(
        format!("{error}"),
        "Completion API error (status 429): slow down"
    );
}

#[test]
fn test_sanitize_utf8_replaces_invalid_sequences() {
    assert_eq!(sanitize_utf8(b"plain"), "plain");
    assert_eq!(sanitize_utf8("héllo".as_bytes()), "héllo");
    assert_eq!(sanitize_utf8(b"a\xffb"), "a\u{FFFD}b");
    // Truncated multi-byte sequence
    assert_eq!(sanitize_utf8(b"caf\xc3"), "caf\u{FFFD}");
}

#[test]
fn test_sanitize_message_uses_display_text() {
    let error = DilemmaError::upstream(500, b"boom \xfe");
    let message = sanitize_message(&error);
    assert_eq!(message, "Completion API error (status 500): boom \u{FFFD}");
    assert!(serde_json::to_string(&message).is_ok());
}

#[test]
fn test_dilemma_error_from_reqwest() {
    #[allow(unused)]
    #[allow(clippy::items_after_statements)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> DilemmaError {
        // Never called; verifies the conversion exists
        DilemmaError::from(err)
    }
}
