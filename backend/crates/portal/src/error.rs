//! Portal Error Types
//!
//! Portal-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. Client errors keep their own message;
//! server errors are reported under the failing operation's generic message.

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub const INVALID_FULL_NAME: &str = "Invalid full name format.";
pub const INVALID_ID_NUMBER: &str = "Invalid ID number format.";
pub const INVALID_ACCOUNT_NUMBER: &str = "Invalid account number format.";
pub const PASSWORD_REQUIRED: &str = "Password is required.";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials.";
pub const TOO_MANY_REQUESTS: &str = "Too many requests, please try again later.";
pub const REGISTER_FAILED: &str = "Error registering user.";
pub const LOGIN_FAILED: &str = "Error logging in.";

const INTERNAL_ERROR: &str = "Internal server error.";

/// Portal-specific result type alias
pub type PortalResult<T> = Result<T, PortalError>;

/// Portal-specific error variants
#[derive(Debug, Error)]
pub enum PortalError {
    #[error("Invalid full name format.")]
    InvalidFullName,

    #[error("Invalid ID number format.")]
    InvalidIdNumber,

    #[error("Invalid account number format.")]
    InvalidAccountNumber,

    #[error("Password is required.")]
    PasswordRequired,

    /// Unknown account or wrong password
    #[error("Invalid credentials.")]
    InvalidCredentials,

    #[error("Login attempts exhausted, retry in {retry_after_secs}s")]
    TooManyAttempts { retry_after_secs: u64 },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl PortalError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            PortalError::InvalidFullName
            | PortalError::InvalidIdNumber
            | PortalError::InvalidAccountNumber
            | PortalError::PasswordRequired => StatusCode::BAD_REQUEST,
            PortalError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            PortalError::TooManyAttempts { .. } => StatusCode::TOO_MANY_REQUESTS,
            PortalError::Database(_) | PortalError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PortalError::InvalidFullName
            | PortalError::InvalidIdNumber
            | PortalError::InvalidAccountNumber
            | PortalError::PasswordRequired => ErrorKind::BadRequest,
            PortalError::InvalidCredentials => ErrorKind::Unauthorized,
            PortalError::TooManyAttempts { .. } => ErrorKind::TooManyRequests,
            PortalError::Database(_) | PortalError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn is_server_error(&self) -> bool {
        self.kind().is_server_error()
    }

    /// Client-facing message
    fn public_message(&self) -> &'static str {
        match self {
            PortalError::InvalidFullName => INVALID_FULL_NAME,
            PortalError::InvalidIdNumber => INVALID_ID_NUMBER,
            PortalError::InvalidAccountNumber => INVALID_ACCOUNT_NUMBER,
            PortalError::PasswordRequired => PASSWORD_REQUIRED,
            PortalError::InvalidCredentials => INVALID_CREDENTIALS,
            PortalError::TooManyAttempts { .. } => TOO_MANY_REQUESTS,
            PortalError::Database(_) | PortalError::Internal(_) => INTERNAL_ERROR,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.public_message())
    }

    /// Convert to AppError, reporting server errors as `fallback`
    pub fn into_app_error(self, fallback: &'static str) -> AppError {
        self.log();
        if self.is_server_error() {
            AppError::internal(fallback).with_source(self)
        } else {
            self.to_app_error()
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            PortalError::Database(e) => {
                tracing::error!(error = %e, "Portal database error");
            }
            PortalError::Internal(msg) => {
                tracing::error!(message = %msg, "Portal internal error");
            }
            PortalError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            PortalError::TooManyAttempts { retry_after_secs } => {
                tracing::warn!(retry_after_secs, "Login rate limit exceeded");
            }
            _ => {
                tracing::debug!(error = %self, "Portal validation error");
            }
        }
    }
}

impl IntoResponse for PortalError {
    fn into_response(self) -> Response {
        self.log();
        let retry_after = match &self {
            PortalError::TooManyAttempts { retry_after_secs } => Some(*retry_after_secs),
            _ => None,
        };

        let mut response = self.to_app_error().into_response();
        if let Some(secs) = retry_after {
            response
                .headers_mut()
                .insert(header::RETRY_AFTER, HeaderValue::from(secs));
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_validation_errors_are_bad_request() {
        for (err, msg) in [
            (PortalError::InvalidFullName, INVALID_FULL_NAME),
            (PortalError::InvalidIdNumber, INVALID_ID_NUMBER),
            (PortalError::InvalidAccountNumber, INVALID_ACCOUNT_NUMBER),
            (PortalError::PasswordRequired, PASSWORD_REQUIRED),
        ] {
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
            assert_eq!(err.into_app_error(REGISTER_FAILED).message(), msg);
        }
    }

    #[test]
    fn test_server_errors_use_fallback() {
        let app_error = PortalError::Internal("pool closed".to_string()).into_app_error(LOGIN_FAILED);
        assert_eq!(app_error.status_code(), 500);
        assert_eq!(app_error.message(), LOGIN_FAILED);
        assert!(app_error.source().is_some());

        let app_error = PortalError::Database(sqlx::Error::PoolTimedOut).into_app_error(REGISTER_FAILED);
        assert_eq!(app_error.message(), REGISTER_FAILED);
    }

    #[test]
    fn test_client_errors_keep_message() {
        let app_error = PortalError::InvalidCredentials.into_app_error(LOGIN_FAILED);
        assert_eq!(app_error.status_code(), 401);
        assert_eq!(app_error.message(), INVALID_CREDENTIALS);
    }

    #[test]
    fn test_too_many_attempts_sets_retry_after() {
        let response = PortalError::TooManyAttempts { retry_after_secs: 42 }.into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(response.headers().get(header::RETRY_AFTER).unwrap(), "42");
    }
}
