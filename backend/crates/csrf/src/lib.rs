//! CSRF Protection Module
//!
//! Clean Architecture structure:
//! - `domain/` - Token minting and verification
//! - `application/` - Use cases and configuration
//! - `presentation/` - Token endpoint, guard middleware, router
//!
//! ## Security Model
//! - A random per-client secret lives in an HTTP-only cookie
//! - Tokens are `salt.mac` with `mac = HMAC-SHA256(server key, secret.salt)`,
//!   so a token is only valid together with the cookie it was minted for
//! - Every mutating request must echo a token in the `X-CSRF-Token` header;
//!   otherwise it is refused with 403 before any handler runs
//! - Tokens stay valid as long as the cookie secret does not change

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::config::CsrfConfig;
pub use error::{CsrfError, CsrfResult};
pub use presentation::handlers::CsrfAppState;
pub use presentation::middleware::{require_csrf_token, with_csrf_protection};
pub use presentation::router::csrf_router;

#[cfg(test)]
mod tests;
