//! CSRF Middleware

use crate::application::verify_token::{VerifyTokenInput, VerifyTokenUseCase};
use crate::error::CsrfError;
use crate::presentation::handlers::CsrfAppState;
use axum::Router;
use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Method, Request};
use axum::middleware::{self, Next};
use axum::response::Response;
use platform::cookie::extract_cookie;

/// Headers a client may carry the token in, checked in order
pub const TOKEN_HEADERS: [&str; 4] = ["x-csrf-token", "csrf-token", "x-xsrf-token", "xsrf-token"];

fn is_safe_method(method: &Method) -> bool {
    matches!(
        *method,
        Method::GET | Method::HEAD | Method::OPTIONS | Method::TRACE
    )
}

fn extract_token(headers: &HeaderMap) -> Option<String> {
    TOKEN_HEADERS.iter().find_map(|name| {
        headers
            .get(*name)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    })
}

/// Reject state-changing requests that lack a token valid for the cookie secret
pub async fn require_csrf_token(
    State(state): State<CsrfAppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, CsrfError> {
    if is_safe_method(req.method()) {
        return Ok(next.run(req).await);
    }

    let headers = req.headers();
    let input = VerifyTokenInput {
        secret: extract_cookie(headers, &state.config.cookie_name),
        token: extract_token(headers),
    };

    VerifyTokenUseCase::new(state.config.clone()).execute(input)?;

    Ok(next.run(req).await)
}

/// Wrap every route of `router` in the CSRF guard
pub fn with_csrf_protection<S>(router: Router<S>, state: CsrfAppState) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(middleware::from_fn_with_state(state, require_csrf_token))
}
