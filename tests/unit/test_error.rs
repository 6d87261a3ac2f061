use bassa_client::error::{AppError, ErrorKind};
use reqwest::StatusCode;

#[test]
fn test_app_error_display_config() {
    let error = AppError::Config("base URL must not be empty".to_string());
    assert_eq!(
        error.to_string(),
        "configuration error: base URL must not be empty"
    );
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("user_name must not be empty".to_string());
    assert_eq!(error.to_string(), "invalid input: user_name must not be empty");
}

#[test]
fn test_app_error_display_unexpected() {
    let error = AppError::Unexpected(StatusCode::BAD_REQUEST);
    assert!(error.to_string().contains("400"));
}

#[test]
fn test_app_error_display_missing_header() {
    let error = AppError::MissingHeader("token".to_string());
    assert_eq!(error.to_string(), "missing response header: token");
}

#[test]
fn test_app_error_from_serde() {
    let serde_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(_) => (),
        other => panic!("Expected Json error, got {other:?}"),
    }
}

#[test]
fn test_app_error_from_io() {
    let app_error: AppError = std::io::Error::other("disk full").into();
    assert!(matches!(app_error, AppError::Io(_)));
    assert!(std::error::Error::source(&app_error).is_some());
}

#[test]
fn test_kind_covers_the_five_categories() {
    assert_eq!(AppError::Config(String::new()).kind(), ErrorKind::Configuration);
    assert_eq!(AppError::InvalidInput(String::new()).kind(), ErrorKind::Validation);
    assert_eq!(AppError::InvalidFormat(String::new()).kind(), ErrorKind::Validation);
    assert_eq!(AppError::NotFound.kind(), ErrorKind::Transport);
    assert_eq!(
        AppError::Unexpected(StatusCode::BAD_GATEWAY).kind(),
        ErrorKind::Transport
    );
    assert_eq!(
        AppError::SerializationError(String::new()).kind(),
        ErrorKind::Decode
    );
    assert_eq!(AppError::MissingHeader(String::new()).kind(), ErrorKind::Protocol);
}

#[test]
fn test_from_status_mapping() {
    assert!(matches!(
        AppError::from_status(StatusCode::UNAUTHORIZED),
        AppError::Unauthorized
    ));
    assert!(matches!(
        AppError::from_status(StatusCode::FORBIDDEN),
        AppError::Unauthorized
    ));
    assert!(matches!(
        AppError::from_status(StatusCode::NOT_FOUND),
        AppError::NotFound
    ));
    assert!(matches!(
        AppError::from_status(StatusCode::TOO_MANY_REQUESTS),
        AppError::RateLimitExceeded
    ));
    assert!(matches!(
        AppError::from_status(StatusCode::CONFLICT),
        AppError::Unexpected(StatusCode::CONFLICT)
    ));
}

#[test]
fn test_is_retryable() {
    assert!(AppError::RateLimitExceeded.is_retryable());
    assert!(AppError::Unexpected(StatusCode::SERVICE_UNAVAILABLE).is_retryable());
    assert!(!AppError::Unexpected(StatusCode::BAD_REQUEST).is_retryable());
    assert!(!AppError::InvalidInput("x".to_string()).is_retryable());
    assert!(!AppError::MissingHeader("token".to_string()).is_retryable());
}
