use crate::error::{ErrorContext, UsersError};
use crate::users_error;

#[test]
fn test_error_context_on_result() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "file not found"
    ));

    let users_result = result.context("Failed to read config file");

    match users_result {
        Err(UsersError::Unknown(msg)) => {
            assert!(msg.contains("Failed to read config file"));
            assert!(msg.contains("file not found"));
        }
        _ => panic!("Expected UsersError::Unknown"),
    }
}

#[test]
fn test_error_context_on_option() {
    let option: Option<String> = None;
    let result = option.context("No API URL configured");

    match result {
        Err(UsersError::Unknown(msg)) => assert_eq!(msg, "No API URL configured"),
        _ => panic!("Expected UsersError::Unknown"),
    }
}

#[test]
fn test_error_context_with_closure() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::PermissionDenied,
        "access denied"
    ));

    let users_result = result.with_context(|| {
        format!("Failed to write config at path: {}", "/tmp/test.json")
    });

    match users_result {
        Err(UsersError::Unknown(msg)) => {
            assert!(msg.contains("Failed to write config at path: /tmp/test.json"));
            assert!(msg.contains("access denied"));
        }
        _ => panic!("Expected UsersError::Unknown"),
    }
}

#[test]
fn test_users_error_macro() {
    let error = users_error!(ApiError, "Request failed");
    match error {
        UsersError::ApiError(msg) => assert_eq!(msg, "Request failed"),
        _ => panic!("Expected UsersError::ApiError"),
    }

    let error = users_error!(InvalidInput, "'{}' is not a valid user ID", "abc");
    match error {
        UsersError::InvalidInput(msg) => assert_eq!(msg, "'abc' is not a valid user ID"),
        _ => panic!("Expected UsersError::InvalidInput"),
    }
}

#[test]
fn test_remote_failure_classification() {
    assert!(UsersError::ApiError("HTTP error: 500".to_string()).is_remote_failure());

    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    assert!(UsersError::from(json_err).is_remote_failure());

    assert!(!UsersError::InvalidInput("bad id".to_string()).is_remote_failure());
    assert!(!UsersError::ConfigError("no home".to_string()).is_remote_failure());
}
