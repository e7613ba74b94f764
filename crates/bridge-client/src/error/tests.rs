//! Unit tests for error module.

use super::*;

#[test]
fn test_api_error_display() {
    let error = Error::Api {
        status: 400,
        message: "Please provide type, numeric quantity, and condition.".to_string(),
    };

    let display = format!("{}", error);
    assert!(display.contains("400"));
    assert!(display.contains("numeric quantity"));
}

#[test]
fn test_not_found_error_display() {
    let error = Error::NotFound("/warehouse".to_string());

    let display = format!("{}", error);
    assert!(display.contains("Not found"));
    assert!(display.contains("/warehouse"));
}

#[test]
fn test_invalid_url_display() {
    let error = Error::InvalidUrl("ftp:/".to_string());
    assert_eq!(format!("{}", error), "Invalid URL: ftp:/");
}

#[test]
fn test_status_accessor() {
    let api = Error::Api {
        status: 500,
        message: "Error fetching market data".to_string(),
    };
    assert_eq!(api.status(), Some(500));
    assert_eq!(Error::NotFound(String::new()).status(), Some(404));
    assert_eq!(Error::InvalidUrl(String::new()).status(), None);
}

#[test]
fn test_json_error_from() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: Error = json_err.into();
    assert!(matches!(error, Error::Json(_)));
}
