//! Infrastructure Layer
//!
//! Database implementations.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryCustomerRepository;
pub use postgres::PgCustomerRepository;
