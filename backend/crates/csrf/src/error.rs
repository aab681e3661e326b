//! CSRF Error Types
//!
//! Every variant is rendered identically to the client; the distinction only
//! shows up in logs.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Client-facing message for every CSRF rejection
pub const INVALID_CSRF_TOKEN: &str = "Invalid CSRF token.";

pub type CsrfResult<T> = Result<T, CsrfError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CsrfError {
    /// No secret cookie, or one that was not minted by us
    #[error("CSRF secret cookie missing or malformed")]
    MissingSecret,

    /// No token header on a mutating request
    #[error("CSRF token header missing")]
    MissingToken,

    /// Token present but not valid for the cookie secret
    #[error("CSRF token does not match secret")]
    InvalidToken,
}

impl CsrfError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::FORBIDDEN
    }

    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Forbidden
    }

    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), INVALID_CSRF_TOKEN)
    }

    fn log(&self) {
        match self {
            CsrfError::InvalidToken => {
                tracing::warn!("Rejected request with forged or stale CSRF token");
            }
            _ => {
                tracing::debug!(error = %self, "Rejected request without CSRF credentials");
            }
        }
    }
}

impl IntoResponse for CsrfError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
