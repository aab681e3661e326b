//! Presentation Layer
//!
//! Token endpoint and the guard that protects mutating routes.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;
