use github_profile_updater::error::{ProfileError, Result};
use std::error::Error;

#[test]
fn test_error_display() {
    let error = ProfileError::ConfigError("no account".to_string());
    assert_eq!(format!("{}", error), "Configuration error: no account");

    let error = ProfileError::AuthError("token required".to_string());
    assert_eq!(format!("{}", error), "Authentication error: token required");

    let error = ProfileError::TransientFetch { status: 500, body: "boom".to_string() };
    assert_eq!(format!("{}", error), "GitHub API returned status 500: boom");

    let error = ProfileError::MissingMarkers("README.md".to_string());
    assert_eq!(format!("{}", error), "No repository markers found: README.md");
}

#[test]
fn test_error_source() {
    let error = ProfileError::MissingMarkers("README.md".to_string());
    assert!(error.source().is_none());

    let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
    let error: ProfileError = io_error.into();
    assert!(error.source().is_some());
}

#[test]
fn test_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error: ProfileError = io_error.into();
    assert!(matches!(error, ProfileError::IoError(_)));

    let url_error = url::Url::parse("not a url").unwrap_err();
    let error: ProfileError = url_error.into();
    assert!(matches!(error, ProfileError::UrlError(_)));

    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: ProfileError = json_error.into();
    assert!(matches!(error, ProfileError::JsonError(_)));
}

#[test]
fn test_transient_classification() {
    assert!(ProfileError::TransientFetch { status: 503, body: String::new() }.is_transient());
    assert!(!ProfileError::MissingMarkers(String::new()).is_transient());
    assert!(!ProfileError::AuthError(String::new()).is_transient());

    let json_error = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
    assert!(!ProfileError::from(json_error).is_transient());
}

#[test]
fn test_result_type() {
    fn returns_result() -> Result<String> {
        Ok("success".to_string())
    }

    let result = returns_result();
    assert!(result.is_ok());
    assert_eq!(result.unwrap(), "success");

    fn returns_error() -> Result<String> {
        Err(ProfileError::ConfigError("missing".to_string()))
    }

    let result = returns_error();
    assert!(result.is_err());
}
