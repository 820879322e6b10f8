//! Error types for authentication, token handling and input validation
//!
//! Display strings are English and meant for logs. User-facing, localized
//! messages are chosen by the HTTP layer from the variant.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown username or wrong password. Both cases share this variant.
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Refresh token not provided")]
    MissingRefreshToken,

    #[error("User not found")]
    UserNotFound,

    #[error("Session expired")]
    SessionExpired,
}

/// Token verification and generation failures
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Token expired")]
    Expired,

    #[error("Token type does not match the expected type")]
    WrongType,

    #[error("Malformed token")]
    Malformed,

    #[error("Token generation failed")]
    GenerationFailed,
}

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field required: {field}")]
    RequiredField { field: String },

    #[error("Invalid format for field: {field}")]
    InvalidFormat { field: String },

    #[error("Value out of range for field: {field} (min: {min}, max: {max})")]
    OutOfRange {
        field: String,
        min: String,
        max: String,
    },

    #[error("Invalid length for field: {field} (max: {max}, actual: {actual})")]
    InvalidLength {
        field: String,
        max: usize,
        actual: usize,
    },

    #[error("Start hour {start} must be before end hour {end}")]
    InvalidHourRange { start: u8, end: u8 },

    #[error("Invalid date: {value}")]
    InvalidDate { value: String },
}
