//! Unit tests for domain error types

use crate::errors::{AuthError, DomainError, TokenError, ValidationError};

#[test]
fn test_auth_error_messages() {
    assert_eq!(
        AuthError::InvalidCredentials.to_string(),
        "Invalid username or password"
    );
    assert_eq!(AuthError::UserNotFound.to_string(), "User not found");
}

#[test]
fn test_bridge_errors_are_transparent() {
    let error: DomainError = TokenError::Expired.into();
    assert_eq!(error.to_string(), "Token expired");
    assert!(matches!(error, DomainError::Token(TokenError::Expired)));

    let error: DomainError = AuthError::InvalidRefreshToken.into();
    assert!(matches!(
        error,
        DomainError::Auth(AuthError::InvalidRefreshToken)
    ));
}

#[test]
fn test_validation_error_with_fields() {
    let error = ValidationError::InvalidLength {
        field: "title".to_string(),
        max: 200,
        actual: 201,
    };
    let message = error.to_string();
    assert!(message.contains("title"));
    assert!(message.contains("201"));

    let error = ValidationError::InvalidHourRange { start: 20, end: 8 };
    assert_eq!(error.to_string(), "Start hour 20 must be before end hour 8");
}

#[test]
fn test_internal_helper() {
    let error = DomainError::internal("pool timed out");
    assert!(matches!(error, DomainError::Internal { ref message } if message == "pool timed out"));
}
