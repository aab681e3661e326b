//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::CustomerId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::customer::Customer;
use crate::domain::repository::CustomerRepository;
use crate::domain::value_object::{
    account_number::AccountNumber, customer_password::CustomerPassword, full_name::FullName,
    id_number::IdNumber,
};
use crate::error::PortalResult;

/// PostgreSQL-backed customer repository
#[derive(Clone)]
pub struct PgCustomerRepository {
    pool: PgPool,
}

impl PgCustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl CustomerRepository for PgCustomerRepository {
    async fn create(&self, customer: &Customer) -> PortalResult<()> {
        sqlx::query(
            r#"
            INSERT INTO customers (
                customer_id,
                full_name,
                id_number,
                account_number,
                password_hash,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(customer.customer_id.as_uuid())
        .bind(customer.full_name.as_str())
        .bind(customer.id_number.as_str())
        .bind(customer.account_number.as_str())
        .bind(customer.password.as_phc_string())
        .bind(customer.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_account_number(
        &self,
        account_number: &AccountNumber,
    ) -> PortalResult<Option<Customer>> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT
                customer_id,
                full_name,
                id_number,
                account_number,
                password_hash,
                created_at
            FROM customers
            WHERE account_number = $1
            ORDER BY created_at, customer_id
            LIMIT 1
            "#,
        )
        .bind(account_number.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CustomerRow::into_customer))
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct CustomerRow {
    customer_id: Uuid,
    full_name: String,
    id_number: String,
    account_number: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl CustomerRow {
    fn into_customer(self) -> Customer {
        Customer {
            customer_id: CustomerId::from_uuid(self.customer_id),
            full_name: FullName::from_db(self.full_name),
            id_number: IdNumber::from_db(self.id_number),
            account_number: AccountNumber::from_db(self.account_number),
            password: CustomerPassword::from_db(self.password_hash),
            created_at: self.created_at,
        }
    }
}
