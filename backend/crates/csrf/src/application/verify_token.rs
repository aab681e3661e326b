//! Verify Token Use Case

use crate::application::config::CsrfConfig;
use crate::domain::services::{is_well_formed_secret, verify_token};
use crate::error::{CsrfError, CsrfResult};
use std::sync::Arc;

/// Input DTO for verify token
#[derive(Debug, Clone, Default)]
pub struct VerifyTokenInput {
    pub secret: Option<String>,
    pub token: Option<String>,
}

/// Verify Token Use Case
pub struct VerifyTokenUseCase {
    config: Arc<CsrfConfig>,
}

impl VerifyTokenUseCase {
    pub fn new(config: Arc<CsrfConfig>) -> Self {
        Self { config }
    }

    pub fn execute(&self, input: VerifyTokenInput) -> CsrfResult<()> {
        let secret = input
            .secret
            .filter(|secret| is_well_formed_secret(secret, self.config.secret_bytes_len))
            .ok_or(CsrfError::MissingSecret)?;

        let token = input
            .token
            .filter(|token| !token.is_empty())
            .ok_or(CsrfError::MissingToken)?;

        if verify_token(&self.config.signing_key, &secret, &token) {
            Ok(())
        } else {
            Err(CsrfError::InvalidToken)
        }
    }
}
