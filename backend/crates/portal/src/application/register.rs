//! Register Use Case
//!
//! Creates a new customer account.

use std::sync::Arc;

use crate::application::config::PortalConfig;
use crate::domain::entity::customer::Customer;
use crate::domain::repository::CustomerRepository;
use crate::domain::value_object::{
    account_number::AccountNumber,
    customer_password::{CustomerPassword, RawPassword},
    full_name::FullName,
    id_number::IdNumber,
};
use crate::error::PortalResult;

/// Register input
pub struct RegisterInput {
    pub full_name: String,
    pub id_number: String,
    pub account_number: String,
    pub password: String,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: CustomerRepository,
{
    repo: Arc<R>,
    config: Arc<PortalConfig>,
}

impl<R> RegisterUseCase<R>
where
    R: CustomerRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<PortalConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> PortalResult<()> {
        // Field order decides which message the client sees
        let full_name = FullName::new(&input.full_name)?;
        let id_number = IdNumber::new(&input.id_number)?;
        let account_number = AccountNumber::new(&input.account_number)?;
        let raw_password = RawPassword::new(input.password)?;

        let password = CustomerPassword::hash(raw_password, self.config.pepper()).await?;

        let customer = Customer::new(
            full_name.sanitized(),
            id_number.sanitized(),
            account_number.sanitized(),
            password,
        );

        self.repo.create(&customer).await?;

        tracing::info!(
            customer_id = %customer.customer_id,
            "Customer registered"
        );

        Ok(())
    }
}
