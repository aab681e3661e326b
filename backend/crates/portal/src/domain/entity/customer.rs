//! Customer Entity

use chrono::{DateTime, Utc};
use kernel::id::CustomerId;

use crate::domain::value_object::{
    account_number::AccountNumber, customer_password::CustomerPassword, full_name::FullName,
    id_number::IdNumber,
};

/// Registered portal customer
///
/// Every field is populated and `password` is always a hash.
#[derive(Debug, Clone)]
pub struct Customer {
    pub customer_id: CustomerId,
    pub full_name: FullName,
    pub id_number: IdNumber,
    /// Login key, shared by duplicates
    pub account_number: AccountNumber,
    pub password: CustomerPassword,
    pub created_at: DateTime<Utc>,
}

impl Customer {
    /// Create a new customer with a fresh id
    pub fn new(
        full_name: FullName,
        id_number: IdNumber,
        account_number: AccountNumber,
        password: CustomerPassword,
    ) -> Self {
        Self {
            customer_id: CustomerId::new(),
            full_name,
            id_number,
            account_number,
            password,
            created_at: Utc::now(),
        }
    }
}
