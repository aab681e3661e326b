//! CSRF Router

use crate::presentation::handlers::{self, CsrfAppState};
use axum::{Router, routing::get};

/// Router exposing GET /csrf-token
pub fn csrf_router(state: CsrfAppState) -> Router {
    Router::new()
        .route("/csrf-token", get(handlers::issue_token))
        .with_state(state)
}
