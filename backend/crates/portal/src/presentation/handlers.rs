//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use kernel::error::app_error::{AppError, AppResult};
use std::sync::Arc;

use crate::application::config::PortalConfig;
use crate::application::login::{LoginInput, LoginUseCase};
use crate::application::register::{RegisterInput, RegisterUseCase};
use crate::domain::repository::CustomerRepository;
use crate::error::{LOGIN_FAILED, REGISTER_FAILED};
use crate::presentation::dto::{LoginRequest, MessageResponse, RegisterRequest};

/// Shared state for portal handlers
pub struct PortalAppState<R>
where
    R: CustomerRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<PortalConfig>,
}

impl<R> Clone for PortalAppState<R>
where
    R: CustomerRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            config: self.config.clone(),
        }
    }
}

// ============================================================================
// Register
// ============================================================================

/// POST /register
pub async fn register<R>(
    State(state): State<PortalAppState<R>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse>
where
    R: CustomerRepository + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(AppError::from)?;

    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    let input = RegisterInput {
        full_name: req.full_name,
        id_number: req.id_number,
        account_number: req.account_number,
        password: req.password,
    };

    use_case
        .execute(input)
        .await
        .map_err(|e| e.into_app_error(REGISTER_FAILED))?;

    Ok((StatusCode::CREATED, Json(MessageResponse::REGISTERED)))
}

// ============================================================================
// Login
// ============================================================================

/// POST /login
pub async fn login<R>(
    State(state): State<PortalAppState<R>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse>
where
    R: CustomerRepository + Send + Sync + 'static,
{
    let Json(req) = payload.map_err(AppError::from)?;

    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());

    let input = LoginInput {
        account_number: req.account_number,
        password: req.password,
    };

    use_case
        .execute(input)
        .await
        .map_err(|e| e.into_app_error(LOGIN_FAILED))?;

    Ok((StatusCode::OK, Json(MessageResponse::LOGGED_IN)))
}
