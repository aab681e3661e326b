//! In-memory Repository Implementation
//!
//! Insertion-ordered store used by tests and local runs without a database.

use tokio::sync::RwLock;

use crate::domain::entity::customer::Customer;
use crate::domain::repository::CustomerRepository;
use crate::domain::value_object::account_number::AccountNumber;
use crate::error::PortalResult;

#[derive(Debug, Default)]
pub struct InMemoryCustomerRepository {
    customers: RwLock<Vec<Customer>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.customers.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.customers.read().await.is_empty()
    }
}

impl CustomerRepository for InMemoryCustomerRepository {
    async fn create(&self, customer: &Customer) -> PortalResult<()> {
        self.customers.write().await.push(customer.clone());
        Ok(())
    }

    async fn find_by_account_number(
        &self,
        account_number: &AccountNumber,
    ) -> PortalResult<Option<Customer>> {
        Ok(self
            .customers
            .read()
            .await
            .iter()
            .find(|c| &c.account_number == account_number)
            .cloned())
    }
}
