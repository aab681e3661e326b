//! Repository Traits
//!
//! Interfaces for data persistence. Implementations live in the
//! infrastructure layer.

use crate::domain::entity::customer::Customer;
use crate::domain::value_object::account_number::AccountNumber;
use crate::error::PortalResult;

/// Customer repository trait
#[trait_variant::make(CustomerRepository: Send)]
pub trait LocalCustomerRepository {
    /// Persist a new customer
    async fn create(&self, customer: &Customer) -> PortalResult<()>;

    /// Earliest-registered customer with this account number
    async fn find_by_account_number(
        &self,
        account_number: &AccountNumber,
    ) -> PortalResult<Option<Customer>>;
}
