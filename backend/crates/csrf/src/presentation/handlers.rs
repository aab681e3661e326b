//! HTTP Handlers

use crate::application::config::CsrfConfig;
use crate::application::issue_token::IssueTokenUseCase;
use crate::presentation::dto::CsrfTokenResponse;
use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, header};
use axum::response::{IntoResponse, Response};
use platform::cookie::extract_cookie;
use std::sync::Arc;

/// Shared state for the token endpoint and guard
#[derive(Clone)]
pub struct CsrfAppState {
    pub config: Arc<CsrfConfig>,
}

impl CsrfAppState {
    pub fn new(config: CsrfConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// GET /csrf-token
pub async fn issue_token(State(state): State<CsrfAppState>, headers: HeaderMap) -> Response {
    let existing = extract_cookie(&headers, &state.config.cookie_name);

    let output = IssueTokenUseCase::new(state.config.clone()).execute(existing);

    let mut response = Json(CsrfTokenResponse {
        csrf_token: output.token,
    })
    .into_response();

    let response_headers = response.headers_mut();
    response_headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));

    if let Some(secret) = output.new_secret {
        match state.config.cookie_config().header_value(&secret) {
            Ok(cookie) => {
                response_headers.insert(header::SET_COOKIE, cookie);
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to encode CSRF cookie");
            }
        }
    }

    response
}
