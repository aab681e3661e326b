//! Domain Layer - Token rules
//!
//! Stateless: nothing is persisted server-side. The cookie carries the
//! secret and the server key authenticates tokens.

pub mod services;
