//! Customer Portal Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Customer entity, field value objects, repository trait
//! - `application/` - Register and login use cases
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, rate-limit middleware, router
//!
//! ## Security Model
//! - Every field is checked against an anchored ASCII pattern before use
//! - Text fields are sanitized before persistence; passwords never are
//! - Passwords are stored as Argon2id hashes, hashed on the blocking pool
//! - Unknown accounts and wrong passwords produce the same 401
//! - Login attempts are capped per client IP
//!
//! Routes are expected to sit behind the `csrf` guard.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::PortalConfig;
pub use error::{PortalError, PortalResult};
pub use infra::{InMemoryCustomerRepository, PgCustomerRepository};
pub use presentation::router::{portal_router, portal_router_generic};
