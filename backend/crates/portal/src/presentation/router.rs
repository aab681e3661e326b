//! Portal Router

use axum::{Router, middleware, routing::post};
use platform::rate_limit::{InMemoryRateLimitStore, RateLimitStore};
use std::sync::Arc;

use crate::application::config::PortalConfig;
use crate::domain::repository::CustomerRepository;
use crate::infra::postgres::PgCustomerRepository;
use crate::presentation::handlers::{self, PortalAppState};
use crate::presentation::middleware::{LoginRateLimitState, limit_login_attempts};

/// Create the portal router with the PostgreSQL repository
pub fn portal_router(
    repo: PgCustomerRepository,
    limiter: Arc<InMemoryRateLimitStore>,
    config: PortalConfig,
) -> Router {
    portal_router_generic(Arc::new(repo), limiter, config)
}

/// Create a portal router for any repository and rate-limit store
pub fn portal_router_generic<R, L>(repo: Arc<R>, limiter: Arc<L>, config: PortalConfig) -> Router
where
    R: CustomerRepository + Send + Sync + 'static,
    L: RateLimitStore + Send + Sync + 'static,
{
    let limit_state = LoginRateLimitState {
        store: limiter,
        config: Arc::new(config.login_rate_limit.clone()),
        trust_proxy: config.trust_proxy,
    };

    let state = PortalAppState {
        repo,
        config: Arc::new(config),
    };

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route(
            "/login",
            post(handlers::login::<R>).route_layer(middleware::from_fn_with_state(
                limit_state,
                limit_login_attempts::<L>,
            )),
        )
        .with_state(state)
}
