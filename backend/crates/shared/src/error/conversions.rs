//! Error conversions - HTTP rendering of [`AppError`]
//!
//! Every error response body has the same shape: `{"message": "..."}`.

#[cfg(feature = "axum")]
use super::app_error::AppError;

#[cfg(feature = "axum")]
#[derive(serde::Serialize)]
struct ErrorBody<'a> {
    message: &'a str,
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (
            status,
            Json(ErrorBody {
                message: self.message(),
            }),
        )
            .into_response()
    }
}

#[cfg(feature = "axum")]
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(err: axum::extract::rejection::JsonRejection) -> Self {
        AppError::bad_request("Invalid request body.").with_source(err)
    }
}
