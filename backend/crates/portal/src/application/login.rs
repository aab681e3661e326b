//! Login Use Case
//!
//! Checks an account number and password. No session is issued.

use std::sync::Arc;

use crate::application::config::PortalConfig;
use crate::domain::repository::CustomerRepository;
use crate::domain::value_object::{account_number::AccountNumber, customer_password::RawPassword};
use crate::error::{PortalError, PortalResult};

/// Login input
pub struct LoginInput {
    pub account_number: String,
    pub password: String,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: CustomerRepository,
{
    repo: Arc<R>,
    config: Arc<PortalConfig>,
}

impl<R> LoginUseCase<R>
where
    R: CustomerRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<PortalConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> PortalResult<()> {
        // A malformed account number cannot match any stored record
        let account_number =
            AccountNumber::new(&input.account_number).map_err(|_| PortalError::InvalidCredentials)?;

        let customer = self
            .repo
            .find_by_account_number(&account_number)
            .await?
            .ok_or(PortalError::InvalidCredentials)?;

        let raw_password =
            RawPassword::new(input.password).map_err(|_| PortalError::InvalidCredentials)?;

        if !customer
            .password
            .verify(raw_password, self.config.pepper())
            .await?
        {
            return Err(PortalError::InvalidCredentials);
        }

        tracing::info!(customer_id = %customer.customer_id, "Customer logged in");

        Ok(())
    }
}
