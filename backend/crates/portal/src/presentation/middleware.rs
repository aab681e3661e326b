//! Login Rate-Limit Middleware

use axum::body::Body;
use axum::extract::{ConnectInfo, State};
use axum::http::{HeaderValue, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use platform::client::client_key;
use platform::rate_limit::{RateLimitConfig, RateLimitStore};
use std::net::SocketAddr;
use std::sync::Arc;

use crate::error::{LOGIN_FAILED, PortalError};

const X_RATELIMIT_LIMIT: &str = "x-ratelimit-limit";
const X_RATELIMIT_REMAINING: &str = "x-ratelimit-remaining";

/// Middleware state
pub struct LoginRateLimitState<L>
where
    L: RateLimitStore + Send + Sync + 'static,
{
    pub store: Arc<L>,
    pub config: Arc<RateLimitConfig>,
    pub trust_proxy: bool,
}

impl<L> Clone for LoginRateLimitState<L>
where
    L: RateLimitStore + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            config: self.config.clone(),
            trust_proxy: self.trust_proxy,
        }
    }
}

/// Count one login attempt per client and refuse once the window is spent
pub async fn limit_login_attempts<L>(
    State(state): State<LoginRateLimitState<L>>,
    req: Request<Body>,
    next: Next,
) -> Response
where
    L: RateLimitStore + Send + Sync + 'static,
{
    let direct_ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip());
    let key = client_key(req.headers(), direct_ip, state.trust_proxy);

    let result = match state.store.check_and_increment(&key, &state.config).await {
        Ok(result) => result,
        Err(e) => {
            return PortalError::Internal(e.to_string())
                .into_app_error(LOGIN_FAILED)
                .into_response();
        }
    };

    if !result.allowed {
        let retry_after_secs = result.reset_after.as_secs_f64().ceil().max(1.0) as u64;
        return PortalError::TooManyAttempts { retry_after_secs }.into_response();
    }

    let mut response = next.run(req).await;
    let headers = response.headers_mut();
    headers.insert(X_RATELIMIT_LIMIT, HeaderValue::from(result.limit));
    headers.insert(X_RATELIMIT_REMAINING, HeaderValue::from(result.remaining));
    response
}
